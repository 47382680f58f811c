use serde::Serialize;

use crate::error::OutputError;
use crate::extractor::Extraction;

/// One CI step output binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutput {
    pub key: String,
    pub value: String,
    pub found: bool,
}

impl StepOutput {
    pub fn new(key: &str, extraction: &Extraction) -> Result<Self, OutputError> {
        validate_key(key)?;
        Ok(Self {
            key: key.to_string(),
            value: extraction.value().to_string(),
            found: extraction.is_found(),
        })
    }
}

/// Rejects keys that would split or corrupt a `key::value` / `key=value` line.
pub fn validate_key(key: &str) -> Result<(), OutputError> {
    if key.is_empty() {
        return Err(OutputError::invalid_key(key, "must not be empty"));
    }
    if key.contains("::") {
        return Err(OutputError::invalid_key(key, "must not contain '::'"));
    }
    if key.contains('=') {
        return Err(OutputError::invalid_key(key, "must not contain '='"));
    }
    if key.contains(['\n', '\r']) {
        return Err(OutputError::invalid_key(key, "must not contain line breaks"));
    }
    Ok(())
}
