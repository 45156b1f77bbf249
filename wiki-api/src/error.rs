use thiserror::Error;

use crate::limits::LimitError;

/// Coarse classification the UI layer can match on without looking at text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    ParseFailure,
    NotFound,
    DisambiguationEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WikiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("unexpected HTTP status {0}")]
    Http(u16),
    #[error("{0}")]
    TooLarge(String),
    #[error("invalid response: {0}")]
    Parse(String),
    #[error("article '{0}' not found")]
    NotFound(String),
    #[error("'{0}' is a disambiguation page without main-namespace links")]
    DisambiguationEmpty(String),
}

pub type WikiResult<T> = Result<T, WikiError>;

impl WikiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WikiError::Network(_)
            | WikiError::Timeout(_)
            | WikiError::Http(_)
            | WikiError::TooLarge(_) => ErrorKind::NetworkFailure,
            WikiError::Parse(_) => ErrorKind::ParseFailure,
            WikiError::NotFound(_) => ErrorKind::NotFound,
            WikiError::DisambiguationEmpty(_) => ErrorKind::DisambiguationEmpty,
        }
    }

    /// Text shown in the article area when a search ends in this error.
    pub fn display_text(&self) -> String {
        match self {
            WikiError::NotFound(query) => format!("Article '{query}' not found."),
            WikiError::DisambiguationEmpty(query) => {
                format!("'{query}' is a disambiguation page, but no articles were found.")
            }
            other => format!("Error: {other}"),
        }
    }
}

impl From<LimitError> for WikiError {
    fn from(e: LimitError) -> Self {
        WikiError::TooLarge(e.to_string())
    }
}

impl From<serde_json::Error> for WikiError {
    fn from(e: serde_json::Error) -> Self {
        WikiError::Parse(e.to_string())
    }
}
