// src/extract.rs
//! Entry point of the extraction pipeline: one exported page in, one
//! canonical record out.

use scraper::Html;

use crate::config::options::ExtractOptions;
use crate::error::ExtractError;
use crate::model::TeamRecord;
use crate::normalize;
use crate::specs::{matches, roster, team};

/// Everything the locator found, defaults not yet applied. `None` means the
/// field's whole chain came up empty.
pub struct RawTeam {
    pub header: team::HeaderRaw,
    pub season: team::SeasonRaw,
    pub players: Vec<roster::RawPlayer>,
    pub matches: Vec<matches::RawMatch>,
}

/// Extract one exported team page.
///
/// `source_name` is the uploaded file's name; it backs the team-name
/// fallback and error messages. Parsing is tolerant, markup drift degrades
/// individual fields to defaults, so the only failure is input with nothing
/// to parse at all.
pub fn parse_team_file(
    html: &str,
    source_name: &str,
    options: &ExtractOptions,
) -> Result<TeamRecord, ExtractError> {
    if html.trim().is_empty() {
        return Err(ExtractError::ParseFailure {
            source_name: s!(source_name),
        });
    }

    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let raw = RawTeam {
        header: team::header(root),
        season: team::season(root),
        players: roster::extract(root, options.index_aligned),
        matches: matches::extract(root),
    };

    log::debug!(
        "{source_name}: {} player node(s), {} match item(s)",
        raw.players.len(),
        raw.matches.len()
    );

    Ok(normalize::team_record(raw, source_name, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_parse_failure() {
        let opts = ExtractOptions::default();
        assert!(matches!(
            parse_team_file("", "team.html", &opts),
            Err(ExtractError::ParseFailure { .. })
        ));
        assert!(matches!(
            parse_team_file("   \n\t ", "team.html", &opts),
            Err(ExtractError::ParseFailure { .. })
        ));
    }

    #[test]
    fn markup_free_text_still_extracts_defaults() {
        let opts = ExtractOptions::default();
        let record = parse_team_file("just some text", "plain.html", &opts).unwrap();
        assert_eq!(record.name, "plain");
        assert!(record.players.is_empty());
    }
}
