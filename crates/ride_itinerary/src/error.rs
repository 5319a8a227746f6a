use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Response is not valid JSON: {0}")]
    Parse(serde_json::Error),

    #[error("Response does not match the itinerary schema: {0}")]
    Schema(serde_json::Error),
}

/// Coarse failure cause, for callers that want to tell failures apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Auth,
    Api,
    Empty,
    Parse,
    Schema,
}

impl ItineraryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ItineraryError::Request(_) => FailureKind::Transport,
            ItineraryError::Api {
                status: 401 | 403, ..
            } => FailureKind::Auth,
            ItineraryError::Api { .. } => FailureKind::Api,
            ItineraryError::EmptyResponse => FailureKind::Empty,
            ItineraryError::Parse(_) => FailureKind::Parse,
            ItineraryError::Schema(_) => FailureKind::Schema,
        }
    }
}
