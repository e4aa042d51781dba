// src/specs/matches.rs
//! Upcoming-match extraction. Each anchor under the matches holder is one
//! match; every sub-field is resolved inside that anchor only.

use scraper::ElementRef;

use crate::core::locate::{self, Chain, Strategy::*};

const MATCH_ITEM: Chain = &[
    Css(".styles__MatchesHolder-sc-b611c7e4-1 a"),
    Css(r#"[class*="MatchesHolder"] a"#),
];
const DATE_TIME_HOLDER: Chain = &[ClassContains("Holder-sc-464d563d")];
const SPAN: Chain = &[Css("span")];
const OPPONENT: Chain = &[
    Css(r#"[class*="TeamMetaContainer"] span"#),
    ClassContains("TeamName"),
];
const OPPONENT_AVATAR: Chain = &[Css(".Avatar__AvatarHolder-sc-75870453-1 img"), Css("img")];

/// One scheduled match as located, before defaults.
pub struct RawMatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub opponent: Option<String>,
    pub opponent_avatar: Option<String>,
}

pub fn extract(root: ElementRef<'_>) -> Vec<RawMatch> {
    locate::list(root, MATCH_ITEM)
        .into_iter()
        .map(extract_item)
        .collect()
}

fn extract_item(item: ElementRef<'_>) -> RawMatch {
    // Date and time share one holder: first span is the date, last the time.
    // A lone span serves as both, matching the page's collapsed layout.
    let spans = locate::first(item, DATE_TIME_HOLDER)
        .map(|holder| locate::list(holder, SPAN))
        .unwrap_or_default();
    let date = spans.first().map(|s| locate::text_of(*s));
    let time = spans.last().map(|s| locate::text_of(*s));

    RawMatch {
        date,
        time,
        opponent: locate::text(item, OPPONENT),
        opponent_avatar: locate::src(item, OPPONENT_AVATAR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn items_in_document_order_with_scoped_fields() {
        let doc = Html::parse_document(
            r##"
            <div class="styles__MatchesHolder-sc-x">
              <a href="#m1">
                <div class="styles__Holder-sc-464d563d-0"><span>FRI 12 SEP</span><span>21:00</span></div>
                <div class="styles__TeamMetaContainer-sc-1"><span>Red Star</span></div>
                <div class="Avatar__AvatarHolder-sc-2"><img src="red.png"></div>
              </a>
              <a href="#m2">
                <div class="styles__Holder-sc-464d563d-0"><span>SAT 13 SEP</span><span>18:30</span></div>
                <div class="styles__TeamMetaContainer-sc-1"><span>Eduslum</span></div>
                <div class="Avatar__AvatarHolder-sc-2"><img src="edu.png"></div>
              </a>
            </div>
        "##,
        );
        let matches = extract(doc.root_element());
        assert_eq!(matches.len(), 2);

        assert_eq!(matches[0].date.as_deref(), Some("FRI 12 SEP"));
        assert_eq!(matches[0].time.as_deref(), Some("21:00"));
        assert_eq!(matches[0].opponent.as_deref(), Some("Red Star"));
        assert_eq!(matches[0].opponent_avatar.as_deref(), Some("red.png"));

        assert_eq!(matches[1].date.as_deref(), Some("SAT 13 SEP"));
        assert_eq!(matches[1].opponent.as_deref(), Some("Eduslum"));
    }

    #[test]
    fn lone_span_is_both_date_and_time() {
        let doc = Html::parse_document(
            r#"
            <div class="x-MatchesHolder"><a>
              <div class="x-Holder-sc-464d563d-9"><span>TODAY</span></div>
            </a></div>
        "#,
        );
        let matches = extract(doc.root_element());
        assert_eq!(matches[0].date.as_deref(), Some("TODAY"));
        assert_eq!(matches[0].time.as_deref(), Some("TODAY"));
    }

    #[test]
    fn bare_anchor_yields_all_none() {
        let doc = Html::parse_document(r#"<div class="x-MatchesHolder"><a>vs?</a></div>"#);
        let matches = extract(doc.root_element());
        assert_eq!(matches.len(), 1);
        assert!(matches[0].date.is_none());
        assert!(matches[0].time.is_none());
        assert!(matches[0].opponent.is_none());
        assert!(matches[0].opponent_avatar.is_none());
    }

    #[test]
    fn no_holder_no_matches() {
        let doc = Html::parse_document("<a href='x'>not a match</a>");
        assert!(extract(doc.root_element()).is_empty());
    }
}
