//! Utility functions.
//!
//! This module provides CSS selector parsing utilities shared by the HTML
//! document adapter.

mod selector;

pub use selector::parse_selector_with_fallback;
