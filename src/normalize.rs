// src/normalize.rs
//! The record normalizer: raw located values in, canonical [`TeamRecord`]
//! out. Every "not found" becomes a documented default; a field that was
//! found passes through unmodified, even when empty. This stage never fails.

use std::path::Path;

use crate::config::consts::*;
use crate::config::options::ExtractOptions;
use crate::extract::RawTeam;
use crate::model::{self, Match, Player, TeamRecord, TeamStats};

pub fn team_record(raw: RawTeam, source_name: &str, options: &ExtractOptions) -> TeamRecord {
    let variant = options.variant;

    // Cap first, then drop stray one-character "nicknames" a loose selector
    // may have matched; a shorter elo/avatar list never shifts anyone else.
    let players: Vec<Player> = raw
        .players
        .into_iter()
        .take(variant.roster_cap())
        .filter(|p| p.nickname.chars().count() > 1)
        .map(|p| Player {
            nickname: p.nickname,
            elo: p.elo.unwrap_or_else(|| s!(variant.default_elo())),
            avatar: p.avatar.unwrap_or_else(|| s!(DEFAULT_PLAYER_AVATAR)),
            country: s!(PLAYER_COUNTRY),
            lvl: s!(PLAYER_LEVEL),
        })
        .collect();

    let matches: Vec<Match> = raw
        .matches
        .into_iter()
        .map(|m| Match {
            date: m.date.unwrap_or_default(),
            time: m.time.unwrap_or_default(),
            opponent: m.opponent.unwrap_or_else(|| s!(variant.default_opponent())),
            opponent_avatar: m.opponent_avatar.unwrap_or_default(),
        })
        .collect();

    let stats = variant.has_stats().then(|| TeamStats {
        wins: raw.season.wins.unwrap_or_else(|| s!(DEFAULT_WINS)),
        losses: raw.season.losses.unwrap_or_else(|| s!(DEFAULT_LOSSES)),
        position: raw.season.position.unwrap_or_else(|| s!(DEFAULT_POSITION)),
    });

    TeamRecord {
        id: model::new_id(),
        name: raw.header.name.unwrap_or_else(|| name_fallback(source_name)),
        avatar: raw.header.avatar.unwrap_or_default(),
        players,
        league: raw.header.league.unwrap_or_else(|| s!(DEFAULT_LEAGUE)),
        region: s!(REGION),
        matches,
        stats,
        ai_report: None,
    }
}

/// Team-name fallback: the source file's stem, then the fixed label.
fn name_fallback(source_name: &str) -> String {
    Path::new(source_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(String::from)
        .unwrap_or_else(|| s!(UNKNOWN_TEAM))
}
