//! Upstream response classification.
//!
//! Turns whatever HTML the upstream form returns into one of three outcomes:
//! - **ResultFound**: the first `<h2>` carries a reexpedición verdict
//! - **ColoniaRequired**: no verdict, but a `<select name="colonia">` lists
//!   neighborhoods to choose from
//! - **Unknown**: anything else
//!
//! Classification is total and pure: malformed markup degrades to `Unknown`,
//! it never produces an error.

mod document;

use serde::Serialize;

use crate::config::{
    COLONIA_CONTROL_NAME, MARKER_WITHOUT_REEXPEDITION, MARKER_WITH_REEXPEDITION,
};
use crate::models::ColoniaName;

pub use document::{DocumentQuery, ElementQuery, ScraperDocument, ScraperElement};

const HEADING_TAG: &str = "h2";
const OPTION_TAG: &str = "option";
const OPTGROUP_TAG: &str = "optgroup";

/// Result of classifying one upstream response.
///
/// Serializes to the API wire shape:
/// `{"status": "RESULT_FOUND" | "COLONIA_REQUIRED" | "UNKNOWN_RESULT", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data")]
pub enum ClassificationOutcome {
    /// Definitive answer.
    #[serde(rename = "RESULT_FOUND")]
    ResultFound {
        /// Full trimmed heading text.
        #[serde(rename = "result")]
        result_text: String,
        /// `true` for "CON REEXPEDICIÓN".
        #[serde(rename = "hasReexpedition")]
        has_reexpedition: bool,
    },

    /// The postal code spans several neighborhoods; ask again with one of these.
    /// Never empty.
    #[serde(rename = "COLONIA_REQUIRED")]
    ColoniaRequired {
        /// Neighborhoods in the order the upstream listed them.
        colonias: Vec<ColoniaName>,
    },

    /// The page matched no known shape.
    #[serde(rename = "UNKNOWN_RESULT")]
    Unknown {},
}

impl ClassificationOutcome {
    /// Wire status tag, for logging.
    pub fn status(&self) -> &'static str {
        match self {
            ClassificationOutcome::ResultFound { .. } => "RESULT_FOUND",
            ClassificationOutcome::ColoniaRequired { .. } => "COLONIA_REQUIRED",
            ClassificationOutcome::Unknown {} => "UNKNOWN_RESULT",
        }
    }
}

/// Parses `html` and classifies it.
///
/// Accepts any string, including empty or non-HTML input.
pub fn classify(html: &str) -> ClassificationOutcome {
    let document = ScraperDocument::parse(html);
    classify_document(&document)
}

/// Classifies an already-parsed document.
///
/// Rules, first match wins:
/// 1. The first `<h2>` contains `SIN REEXPEDICIÓN` or `CON REEXPEDICIÓN`:
///    `ResultFound`, with `has_reexpedition` set only for `CON`.
/// 2. A `<select name="colonia">` has at least one non-blank option:
///    `ColoniaRequired` with those options in document order.
/// 3. Otherwise `Unknown`.
pub fn classify_document<D: DocumentQuery>(document: &D) -> ClassificationOutcome {
    if let Some(outcome) = verdict_from_heading(document) {
        return outcome;
    }

    let colonias = colonia_options(document);
    if !colonias.is_empty() {
        return ClassificationOutcome::ColoniaRequired { colonias };
    }

    ClassificationOutcome::Unknown {}
}

fn verdict_from_heading<D: DocumentQuery>(document: &D) -> Option<ClassificationOutcome> {
    let heading = document.find_by_tag(HEADING_TAG)?;
    let text = heading.text().trim().to_string();

    if !text.contains(MARKER_WITHOUT_REEXPEDITION) && !text.contains(MARKER_WITH_REEXPEDITION) {
        return None;
    }

    // "SIN REEXPEDICIÓN" does not contain "CON REEXPEDICIÓN", so this is exact
    let has_reexpedition = text.contains(MARKER_WITH_REEXPEDITION);
    Some(ClassificationOutcome::ResultFound {
        result_text: text,
        has_reexpedition,
    })
}

fn colonia_options<D: DocumentQuery>(document: &D) -> Vec<ColoniaName> {
    let selector = format!("select[name=\"{COLONIA_CONTROL_NAME}\"]");
    let mut colonias = Vec::new();
    if let Some(control) = document.select_all(&selector).into_iter().next() {
        collect_options(&control, &mut colonias);
    }
    colonias
}

/// Appends the trimmed text of every non-blank `<option>` under `element`,
/// descending into `<optgroup>`.
fn collect_options<E: ElementQuery>(element: &E, out: &mut Vec<ColoniaName>) {
    for child in element.children() {
        match child.tag_name() {
            OPTION_TAG => {
                // Blank placeholders are dropped by value, not by position
                if let Ok(colonia) = ColoniaName::parse(child.text().trim()) {
                    out.push(colonia);
                }
            }
            OPTGROUP_TAG => collect_options(&child, out),
            _ => {}
        }
    }
}
