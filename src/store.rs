// src/store.rs
//! Persisted team collection: one JSON blob at a fixed location, read and
//! written whole. Last write wins; there are no field-level updates. A
//! missing blob is simply the empty collection.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::consts::{STORE_DIR, STORE_FILE};
use crate::error::StoreError;
use crate::model::TeamRecord;

pub fn default_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(STORE_FILE)
}

pub fn load(path: &Path) -> Result<Vec<TeamRecord>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&text)?)
}

pub fn save(path: &Path, teams: &[TeamRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string(teams)?;
    fs::write(path, text)?;
    Ok(())
}

/// Delete the blob. Already-gone is fine.
pub fn clear(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Drop a team from the caller's collection. True when something went.
pub fn remove_team(collection: &mut Vec<TeamRecord>, id: &str) -> bool {
    let before = collection.len();
    collection.retain(|team| team.id != id);
    collection.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;

    fn sample(name: &str) -> TeamRecord {
        TeamRecord {
            id: model::new_id(),
            name: s!(name),
            avatar: s!(),
            players: Vec::new(),
            league: s!("Intermediate"),
            region: s!("Europe"),
            matches: Vec::new(),
            stats: None,
            ai_report: None,
        }
    }

    fn scratch_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("teamhub_store_{tag}_{}", model::new_id()))
    }

    #[test]
    fn missing_blob_is_empty_collection() {
        let path = scratch_path("missing").join("nope.json");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn round_trip_and_clear() {
        let path = scratch_path("rt").join("teams.json");
        let teams = vec![sample("Alpha"), sample("Beta")];
        save(&path, &teams).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, teams);

        clear(&path).unwrap();
        assert!(load(&path).unwrap().is_empty());
        clear(&path).unwrap(); // second clear is a no-op
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        let path = scratch_path("bad").join("teams.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load(&path), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn remove_by_id() {
        let mut teams = vec![sample("Alpha"), sample("Beta")];
        let gone = teams[0].id.clone();
        assert!(remove_team(&mut teams, &gone));
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Beta");
        assert!(!remove_team(&mut teams, "zzzzzzz"));
    }
}
