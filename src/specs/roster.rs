// src/specs/roster.rs
//! Player list extraction.
//!
//! Nicknames anchor the roster: one raw player per nickname node, in
//! document order. Elo and avatar are resolved *inside each player's own
//! card scope*, the widest ancestor that still contains just that one
//! nickname, so a missing elo on one card can't shift every later player's
//! rating by one, the way the old global-list pairing did. That legacy
//! pairing is kept behind `index_aligned` for byte-compatible output only.

use scraper::{ElementRef, Selector};

use crate::core::locate::{self, Chain, Strategy::*};

const NICKNAME: Chain = &[
    ExactClass("styles__Nickname-sc-3441c003-2"),
    ClassContains("Nickname"),
];
const ELO: Chain = &[
    ExactClass("styles__EloText-sc-c081ed6b-1"),
    ClassContains("EloText"),
];
const AVATAR: Chain = &[
    Css(".styles__Avatar-sc-5688573a-1 img"),
    Css(r#"[class*="Avatar"] img"#),
];

/// One player as located, before defaults and caps.
pub struct RawPlayer {
    pub nickname: String,
    pub elo: Option<String>,
    pub avatar: Option<String>,
}

pub fn extract(root: ElementRef<'_>, index_aligned: bool) -> Vec<RawPlayer> {
    let Some((nick_selector, nick_nodes)) = locate::list_with(root, NICKNAME) else {
        return Vec::new();
    };

    if index_aligned {
        return extract_index_aligned(root, nick_nodes);
    }

    nick_nodes
        .into_iter()
        .map(|nick| {
            let scope = card_scope(nick, &nick_selector);
            RawPlayer {
                nickname: locate::text_of(nick),
                elo: locate::text(scope, ELO),
                avatar: locate::src(scope, AVATAR),
            }
        })
        .collect()
}

/// Widen from the nickname node to the player's card: the outermost ancestor
/// that still contains exactly this one nickname match. Stops below `body`:
/// a page-wide scope would hand the only player the team header's nodes.
fn card_scope<'a>(nick: ElementRef<'a>, nick_selector: &Selector) -> ElementRef<'a> {
    let mut scope = nick;
    for node in nick.ancestors() {
        let Some(candidate) = ElementRef::wrap(node) else { break };
        let tag = candidate.value().name();
        if tag == "body" || tag == "html" {
            break;
        }
        if candidate.select(nick_selector).count() == 1 {
            scope = candidate;
        } else {
            break;
        }
    }
    scope
}

/// Legacy pairing: independent global lists, matched up by position.
fn extract_index_aligned(root: ElementRef<'_>, nick_nodes: Vec<ElementRef<'_>>) -> Vec<RawPlayer> {
    let elos: Vec<String> = locate::list(root, ELO)
        .into_iter()
        .map(locate::text_of)
        .collect();
    let avatars: Vec<Option<String>> = locate::list(root, AVATAR)
        .into_iter()
        .map(|img| img.value().attr("src").map(String::from))
        .collect();

    nick_nodes
        .into_iter()
        .enumerate()
        .map(|(i, nick)| RawPlayer {
            nickname: locate::text_of(nick),
            elo: elos.get(i).cloned(),
            avatar: avatars.get(i).cloned().flatten(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    // Three cards; the middle one has no elo node.
    const GAPPY_ROSTER: &str = r#"
        <ul>
          <li class="card">
            <div class="styles__Avatar-sc-1"><img src="a1.png"></div>
            <span class="styles__Nickname-sc-1">alpha</span>
            <span class="styles__EloText-sc-1">2101</span>
          </li>
          <li class="card">
            <div class="styles__Avatar-sc-1"><img src="a2.png"></div>
            <span class="styles__Nickname-sc-1">bravo</span>
          </li>
          <li class="card">
            <div class="styles__Avatar-sc-1"><img src="a3.png"></div>
            <span class="styles__Nickname-sc-1">charlie</span>
            <span class="styles__EloText-sc-1">1987</span>
          </li>
        </ul>
    "#;

    #[test]
    fn scoped_pairing_survives_a_missing_elo() {
        let doc = Html::parse_document(GAPPY_ROSTER);
        let players = extract(doc.root_element(), false);
        assert_eq!(players.len(), 3);

        assert_eq!(players[0].nickname, "alpha");
        assert_eq!(players[0].elo.as_deref(), Some("2101"));
        assert_eq!(players[0].avatar.as_deref(), Some("a1.png"));

        // bravo's card has no elo; nobody inherits charlie's.
        assert_eq!(players[1].elo, None);
        assert_eq!(players[1].avatar.as_deref(), Some("a2.png"));

        assert_eq!(players[2].elo.as_deref(), Some("1987"));
        assert_eq!(players[2].avatar.as_deref(), Some("a3.png"));
    }

    #[test]
    fn index_aligned_reproduces_the_legacy_shift() {
        let doc = Html::parse_document(GAPPY_ROSTER);
        let players = extract(doc.root_element(), true);
        assert_eq!(players.len(), 3);

        // Global elo list is ["2101", "1987"]: bravo is handed charlie's
        // rating and charlie goes empty. Documented legacy behavior.
        assert_eq!(players[1].elo.as_deref(), Some("1987"));
        assert_eq!(players[2].elo, None);
    }

    #[test]
    fn flat_siblings_have_no_card_to_scope_to() {
        let doc = Html::parse_document(
            r#"
            <div>
              <span class="x-Nickname">alpha</span>
              <span class="x-Nickname">bravo</span>
              <span class="x-EloText">2101</span>
              <span class="x-EloText">1987</span>
            </div>
        "#,
        );
        let players = extract(doc.root_element(), false);
        assert_eq!(players.len(), 2);
        // No per-player scope exists, so sub-fields stay unresolved.
        assert_eq!(players[0].elo, None);
        assert_eq!(players[1].elo, None);
    }

    #[test]
    fn single_player_scope_stops_below_body() {
        let doc = Html::parse_document(
            r#"
            <img class="Avatar__Image-sc-7" src="team.png">
            <div class="roster">
              <span class="x-Nickname">solo</span>
            </div>
        "#,
        );
        let players = extract(doc.root_element(), false);
        assert_eq!(players.len(), 1);
        // The team avatar sits outside the roster div and must not be
        // claimed as the player's.
        assert_eq!(players[0].avatar, None);
    }

    #[test]
    fn no_nicknames_no_players() {
        let doc = Html::parse_document("<p>empty page</p>");
        assert!(extract(doc.root_element(), false).is_empty());
        assert!(extract(doc.root_element(), true).is_empty());
    }
}
