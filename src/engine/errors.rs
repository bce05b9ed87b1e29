use thiserror::Error;

// * Unified Error type for the Link Engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },
}

impl UrlError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        UrlError::InvalidUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
