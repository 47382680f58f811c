use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("invalid output key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("failed to serialize step output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl OutputError {
    pub fn invalid_key(key: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason,
        }
    }
}
