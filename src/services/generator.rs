use crate::models::suggestion::{ActivitySuggestion, SelectionCriteria};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GenerationError {
    MissingCredential,
    HttpError(reqwest::Error),
    StatusError(u16, String),
    ResponseError(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::MissingCredential => write!(f, "Generation credential not configured"),
            GenerationError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GenerationError::StatusError(status, body) => {
                write!(f, "Generation request failed with status {}: {}", status, body)
            }
            GenerationError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        // GEMINI_ENDPOINT may carry a key in its query string
        GenerationError::HttpError(err.without_url())
    }
}

/// Source of extra suggestions on top of the catalog.
pub trait SuggestionGenerator {
    /// Whether a credential is available. Unconfigured generators are never called.
    fn is_configured(&self) -> bool;

    async fn fetch_generated(
        &self,
        criteria: &SelectionCriteria,
    ) -> Result<Vec<ActivitySuggestion>, GenerationError>;
}
