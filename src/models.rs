//! Validated lookup inputs.
//!
//! `PostalCode` and `ColoniaName` can only be built through their `parse`
//! constructors, so any value of these types has already passed validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::POSTAL_CODE_PATTERN;
use crate::error_handling::ValidationError;

static POSTAL_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(POSTAL_CODE_PATTERN)
        .expect("POSTAL_CODE_PATTERN should always compile - this is a programming error")
});

/// A Mexican postal code: exactly five ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Validates `raw` against the five-digit pattern.
    ///
    /// The input is not trimmed; `" 01000"` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPostalCode` if `raw` does not match.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if POSTAL_CODE_REGEX.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPostalCode)
        }
    }

    /// The five digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A neighborhood name, opaque beyond equality and display.
///
/// Values normally come from a previous `ColoniaRequired` outcome, but
/// membership in such a list is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColoniaName(String);

impl ColoniaName {
    /// Accepts any value that is not blank. The value is kept as supplied.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidColonia` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            Err(ValidationError::InvalidColonia)
        } else {
            Ok(Self(raw.to_string()))
        }
    }

    /// The name exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColoniaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One upstream query, built per API call and dropped after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Postal code to look up
    pub postal_code: PostalCode,
    /// Chosen neighborhood; `None` on the first step
    pub colonia: Option<ColoniaName>,
}

impl QueryRequest {
    /// First-step query: postal code only.
    pub fn initial(postal_code: PostalCode) -> Self {
        Self {
            postal_code,
            colonia: None,
        }
    }

    /// Second-step query: postal code plus the chosen colonia.
    pub fn with_colonia(postal_code: PostalCode, colonia: ColoniaName) -> Self {
        Self {
            postal_code,
            colonia: Some(colonia),
        }
    }
}
