//! Narrow document-query interface used by the classifier.
//!
//! The classifier only needs four capabilities: find the first element with a
//! tag, find elements matching a selector, read an element's text, and walk
//! an element's child elements. [`ScraperDocument`] provides them on top of
//! the `scraper` crate; tests can supply hand-built documents instead.

use scraper::{ElementRef, Html};

use crate::utils::parse_selector_with_fallback;

/// An element inside a queried document.
pub trait ElementQuery: Sized {
    /// Lowercase local tag name (`"option"`, `"optgroup"`, ...).
    fn tag_name(&self) -> &str;

    /// Concatenated text of the element and all its descendants, untrimmed.
    fn text(&self) -> String;

    /// Child elements in document order (text and comment nodes skipped).
    fn children(&self) -> Vec<Self>;
}

/// A parsed document that can be searched.
pub trait DocumentQuery {
    /// Element handle borrowed from the document.
    type Element<'a>: ElementQuery
    where
        Self: 'a;

    /// First element with the given tag name, in document order.
    fn find_by_tag(&self, tag: &str) -> Option<Self::Element<'_>>;

    /// All elements matching a CSS selector, in document order.
    ///
    /// An unparseable selector matches nothing.
    fn select_all(&self, selector: &str) -> Vec<Self::Element<'_>>;
}

/// HTML document parsed with `scraper` (html5ever).
///
/// Parsing is lenient: any input, including empty or non-HTML text, yields a
/// document.
pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    /// Parses `body` as a full HTML document.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }
}

/// Element of a [`ScraperDocument`].
#[derive(Clone, Copy)]
pub struct ScraperElement<'a>(ElementRef<'a>);

impl ElementQuery for ScraperElement<'_> {
    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .map(ScraperElement)
            .collect()
    }
}

impl DocumentQuery for ScraperDocument {
    type Element<'a>
        = ScraperElement<'a>
    where
        Self: 'a;

    fn find_by_tag(&self, tag: &str) -> Option<ScraperElement<'_>> {
        let selector = parse_selector_with_fallback(tag, "tag lookup");
        self.html.select(&selector).next().map(ScraperElement)
    }

    fn select_all(&self, selector: &str) -> Vec<ScraperElement<'_>> {
        let selector = parse_selector_with_fallback(selector, "selector lookup");
        self.html.select(&selector).map(ScraperElement).collect()
    }
}
