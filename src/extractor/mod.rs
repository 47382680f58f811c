//! Public address extraction from issue bodies.

pub mod patterns;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

pub use patterns::{DEFAULT_OUTPUT_KEY, NOT_FOUND, PUBLIC_ADDRESS_HEADER, PUBLIC_ADDRESS_PATTERN};

static PUBLIC_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PUBLIC_ADDRESS_PATTERN).expect("public address pattern is a valid regex")
});

/// Outcome of scanning one issue body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(String),
    NotFound,
}

impl Extraction {
    /// The captured token, or the [`NOT_FOUND`] sentinel.
    pub fn value(&self) -> &str {
        match self {
            Extraction::Found(address) => address,
            Extraction::NotFound => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    pub fn into_value(self) -> String {
        match self {
            Extraction::Found(address) => address,
            Extraction::NotFound => NOT_FOUND.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddressExtractor {
    pattern: &'static Regex,
}

impl AddressExtractor {
    pub fn new() -> Self {
        Self {
            pattern: &PUBLIC_ADDRESS_RE,
        }
    }

    /// Returns the first token following a `### Public Address` header.
    ///
    /// The search is unanchored and only the first match counts. The token
    /// is not validated beyond the `[A-Za-z0-9]` class.
    pub fn extract(&self, body: &str) -> Extraction {
        trace!(len = body.len(), "scanning issue body");

        match self.pattern.captures(body).and_then(|caps| caps.get(1)) {
            Some(token) => {
                debug!(address = token.as_str(), offset = token.start(), "address found");
                Extraction::Found(token.as_str().to_string())
            }
            None => {
                debug!("no address found in issue body");
                Extraction::NotFound
            }
        }
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Token following the public address header, or the sentinel string.
pub fn extract_address(body: &str) -> String {
    AddressExtractor::new().extract(body).into_value()
}
