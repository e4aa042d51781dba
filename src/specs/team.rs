// src/specs/team.rs
//! Header and season fields: team name, team avatar, league description,
//! win/loss record, standing.

use scraper::ElementRef;

use crate::core::locate::{self, Chain, Strategy::*};

const TEAM_NAME: Chain = &[
    ExactClass("styles__TeamName-sc-5671d23c-5"),
    Css(r#"h4[class*="TeamName"]"#),
];
const TEAM_AVATAR: Chain = &[
    ExactClass("Avatar__Image-sc-75870453-2"),
    Css(r#"img[class*="Avatar"]"#),
];
const LEAGUE: Chain = &[TestId("description"), ClassContains("TitleDescription")];
const WINS: Chain = &[ClassContains("Wins")];
const LOSSES: Chain = &[ClassContains("Losses")];
const STANDING: Chain = &[Css(r#"[class*="ResultsInfoRow"] h6"#)];

pub struct HeaderRaw {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub league: Option<String>,
}

pub struct SeasonRaw {
    pub wins: Option<String>,
    pub losses: Option<String>,
    pub position: Option<String>,
}

pub fn header(root: ElementRef<'_>) -> HeaderRaw {
    HeaderRaw {
        name: locate::text(root, TEAM_NAME),
        avatar: locate::src(root, TEAM_AVATAR),
        league: locate::text(root, LEAGUE),
    }
}

pub fn season(root: ElementRef<'_>) -> SeasonRaw {
    SeasonRaw {
        wins: locate::text(root, WINS),
        losses: locate::text(root, LOSSES),
        position: locate::text(root, STANDING),
    }
}
