// src/model.rs
//! Canonical team schema. Serialized names stay camelCase so blobs written
//! by earlier versions of the tool keep loading.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One extracted team page. Created once per source file; the only later
/// mutation is the scouting report being attached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    /// Opaque per-session id, random; never derived from page content,
    /// which repeats across re-exports of the same team.
    pub id: String,
    pub name: String,
    /// Empty string when the page carries no usable avatar. Never null.
    pub avatar: String,
    pub players: Vec<Player>,
    pub league: String,
    pub region: String,
    pub matches: Vec<Match>,
    /// Season record; multi-team variant only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<TeamStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_report: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub nickname: String,
    /// Display value, kept as the raw page string ("2,011" etc.).
    pub elo: String,
    pub avatar: String,
    pub country: String,
    pub lvl: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub opponent_avatar: String,
}

/// Raw win/loss/standing strings, exactly as shown on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub wins: String,
    pub losses: String,
    pub position: String,
}

const ID_LEN: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Short base-36 id. Collisions are improbable within one session's
/// collection, which is all the id is used for.
pub fn new_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
