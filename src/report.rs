// src/report.rs
//! AI scouting report: a fixed Portuguese prompt interpolated from the
//! record, sent to the Gemini `generateContent` endpoint. Failures degrade
//! to fixed user-facing strings and are logged; a broken report never
//! touches the extracted record's data.

use std::{env, time::Duration};

use serde::{Deserialize, Serialize};

use crate::config::consts::{
    API_KEY_VAR, GEMINI_BASE_URL, GEMINI_MODEL, REPORT_ERROR, REPORT_UNAVAILABLE,
};
use crate::error::ReportError;
use crate::model::TeamRecord;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

pub struct ScoutClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl ScoutClient {
    /// Client with the key from the environment and the default model.
    pub fn from_env() -> Result<Self, ReportError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| ReportError::MissingApiKey)?;
        Self::new(api_key, s!(GEMINI_MODEL))
    }

    pub fn new(api_key: String, model: String) -> Result<Self, ReportError> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            api_key,
            model,
        })
    }

    /// One generateContent round trip; the raw report text on success.
    pub fn generate(&self, prompt: &str) -> Result<String, ReportError> {
        let url = format!("{}/models/{}:generateContent", GEMINI_BASE_URL, self.model);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: s!(prompt) }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()?
            .error_for_status()?;

        let decoded: GenerateResponse = response.json()?;
        first_text(decoded).ok_or(ReportError::EmptyResponse)
    }

    /// Report for one team, degraded to the fixed fallback strings: a model
    /// that answers nothing usable reads "unavailable", a transport or API
    /// failure reads as the error message. Both are logged.
    pub fn scouting_report(&self, team: &TeamRecord) -> String {
        match self.generate(&build_prompt(team)) {
            Ok(text) => text,
            Err(ReportError::EmptyResponse) => {
                log::warn!("{}: report came back empty", team.name);
                s!(REPORT_UNAVAILABLE)
            }
            Err(e) => {
                log::error!("{}: scouting report failed: {e}", team.name);
                s!(REPORT_ERROR)
            }
        }
    }
}

fn first_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
}

/// The scouting prompt, interpolated from the record.
pub fn build_prompt(team: &TeamRecord) -> String {
    let players = team
        .players
        .iter()
        .map(|p| format!("{} (Elo: {})", p.nickname, p.elo))
        .collect::<Vec<_>>()
        .join(", ");
    let opponents = team
        .matches
        .iter()
        .map(|m| m.opponent.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze this CS2 Team: {}.\n\
         League: {} in {}.\n\
         Players: {}.\n\
         Scheduled matches against: {}.\n\
         Give a professional esports scouting report summary in Portuguese.\n\
         Format it as short bullet points. Be motivating.",
        team.name, team.league, team.region, players, opponents
    )
}

/// Attach (or refresh) the report, the record's single post-extraction
/// mutation.
pub fn attach_report(team: &mut TeamRecord, client: &ScoutClient) {
    team.ai_report = Some(client.scouting_report(team));
}
