// src/config/options.rs
use super::consts::*;

/// Which caller the extraction serves. The single-team dashboard caps the
/// roster at 5 and has no season-stats panel; the multi-team hub caps at 10
/// and fills stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Single,
    Multi,
}

impl Variant {
    pub fn roster_cap(self) -> usize {
        match self {
            Variant::Single => ROSTER_CAP_SINGLE,
            Variant::Multi => ROSTER_CAP_MULTI,
        }
    }

    pub fn default_elo(self) -> &'static str {
        match self {
            Variant::Single => "0",
            Variant::Multi => "N/A",
        }
    }

    pub fn default_opponent(self) -> &'static str {
        match self {
            Variant::Single => "Unknown",
            Variant::Multi => "TBD",
        }
    }

    pub fn has_stats(self) -> bool {
        matches!(self, Variant::Multi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub variant: Variant,
    /// Legacy mode: pair player sub-fields to nicknames by global list
    /// position instead of per-card scoping. Misaligns silently when node
    /// counts diverge; only for bit-compatible reproduction of old output.
    pub index_aligned: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Multi,
            index_aligned: false,
        }
    }
}
