// src/core/locate.rs
//! Selector-chain lookups over a parsed document.
//!
//! The export's markup uses generated, versioned class names that shift
//! between exports, so no single selector is trustworthy. Each logical field
//! instead carries a *chain* of strategies, most specific first: the exact
//! class observed in known exports, then a substring match on the class
//! attribute, then a semantic attribute where the page has one. The first
//! strategy that matches anything wins; an exhausted chain is an ordinary
//! "not found", resolved to a default by the normalizer. Never an error,
//! and never a reason to abort the other fields.

use scraper::{ElementRef, Selector};

/// One way of finding a field's node(s).
#[derive(Clone, Copy, Debug)]
pub enum Strategy {
    /// Exact generated class name from a previously-observed export.
    ExactClass(&'static str),
    /// Any element whose class attribute contains the fragment.
    ClassContains(&'static str),
    /// Semantic `data-testid` attribute.
    TestId(&'static str),
    /// Raw CSS for compound shapes (descendants, tag-qualified classes).
    Css(&'static str),
}

impl Strategy {
    fn css(&self) -> String {
        match self {
            Strategy::ExactClass(class) => format!(".{class}"),
            Strategy::ClassContains(fragment) => format!(r#"[class*="{fragment}"]"#),
            Strategy::TestId(id) => format!(r#"[data-testid="{id}"]"#),
            Strategy::Css(css) => s!(*css),
        }
    }

    fn selector(&self) -> Option<Selector> {
        // Chains are compiled from static strings; a strategy that fails to
        // compile simply never matches.
        Selector::parse(&self.css()).ok()
    }
}

/// Ordered list of strategies for one logical field.
pub type Chain = &'static [Strategy];

/// First node matched by the first strategy that matches anything.
pub fn first<'a>(scope: ElementRef<'a>, chain: Chain) -> Option<ElementRef<'a>> {
    for strategy in chain {
        let Some(selector) = strategy.selector() else { continue };
        if let Some(element) = scope.select(&selector).next() {
            return Some(element);
        }
    }
    None
}

/// All nodes matched by the winning strategy, in document order.
pub fn list<'a>(scope: ElementRef<'a>, chain: Chain) -> Vec<ElementRef<'a>> {
    list_with(scope, chain)
        .map(|(_, elements)| elements)
        .unwrap_or_default()
}

/// Like [`list`], but also hands back the compiled selector that won, for
/// scoped re-queries against each element's surroundings.
pub fn list_with<'a>(scope: ElementRef<'a>, chain: Chain) -> Option<(Selector, Vec<ElementRef<'a>>)> {
    for strategy in chain {
        let Some(selector) = strategy.selector() else { continue };
        let elements: Vec<_> = scope.select(&selector).collect();
        if !elements.is_empty() {
            return Some((selector, elements));
        }
    }
    None
}

/// Concatenated text content of the first matching node.
pub fn text(scope: ElementRef<'_>, chain: Chain) -> Option<String> {
    first(scope, chain).map(text_of)
}

/// `src` attribute of the first matching node. A node without the attribute
/// does not fall through to the next strategy; the chain picks nodes, not
/// attributes.
pub fn src(scope: ElementRef<'_>, chain: Chain) -> Option<String> {
    first(scope, chain).and_then(|element| element.value().attr("src").map(String::from))
}

/// Text content the way the browser reports it: every descendant text node,
/// concatenated, untrimmed.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
