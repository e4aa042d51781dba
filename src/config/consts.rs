// src/config/consts.rs

// Extraction defaults
pub const UNKNOWN_TEAM: &str = "Unknown Team";
pub const DEFAULT_LEAGUE: &str = "Intermediate";
pub const REGION: &str = "Europe"; // fixed; the page doesn't carry it
pub const DEFAULT_PLAYER_AVATAR: &str =
    "https://www.faceit.com/static/img/avatar/avatar_default_user.png";
pub const PLAYER_COUNTRY: &str = "PT";
pub const PLAYER_LEVEL: &str = "10";
pub const DEFAULT_WINS: &str = "0 W";
pub const DEFAULT_LOSSES: &str = "0 L";
pub const DEFAULT_POSITION: &str = "N/A";

// Roster caps
pub const ROSTER_CAP_SINGLE: usize = 5;
pub const ROSTER_CAP_MULTI: usize = 10;

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "teamhub_pro_data.json";

// Concurrency
pub const WORKERS: usize = 4;

// Scouting report
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const API_KEY_VAR: &str = "API_KEY";
pub const REPORT_UNAVAILABLE: &str = "Análise indisponível.";
pub const REPORT_ERROR: &str = "Ocorreu um erro na análise da IA.";
