//! Error types for ClickUp API operations.

use std::fmt;

/// Which stage of the space → folder → list → task walk failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Spaces,
    Lists,
    Tasks,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Spaces => "spaces",
            Stage::Lists => "lists",
            Stage::Tasks => "tasks",
        };
        f.write_str(name)
    }
}

/// Coarse classification of an [`Error`], so callers can decide what is
/// recoverable without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    ApiStatus,
    SchemaValidation,
    AggregationFatal,
}

/// Errors that can occur while talking to the ClickUp API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API key, or a blank one, was supplied.
    #[error("no ClickUp API key provided")]
    MissingApiKey,

    /// A team-scoped operation was asked for without a team id.
    #[error("no ClickUp team id provided")]
    MissingTeam,

    /// The request never produced a response.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The API answered with a non-success status code.
    #[error("failed to get data from ClickUp API for: {endpoint}. Status: {status}")]
    Status { endpoint: String, status: u16 },

    /// The payload is missing required fields or has the wrong envelope.
    #[error("invalid JSON structure for: {endpoint} ({reason})")]
    InvalidPayload { endpoint: String, reason: String },

    /// The payload passed validation but could not be read into the record type.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Expected a single entity but got a collection, or the reverse.
    #[error("expected {expected} from {endpoint}")]
    Cardinality {
        endpoint: String,
        expected: &'static str,
    },

    /// A lookup the hierarchy walk cannot do without failed: the team's
    /// spaces, or any folder's lists or list's tasks.
    #[error("failed to get {stage} for {parent_id}: {source}")]
    Aggregation {
        stage: Stage,
        parent_id: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingApiKey | Error::MissingTeam => ErrorKind::Configuration,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Status { .. } => ErrorKind::ApiStatus,
            Error::InvalidPayload { .. } | Error::Decode { .. } | Error::Cardinality { .. } => {
                ErrorKind::SchemaValidation
            }
            Error::Aggregation { .. } => ErrorKind::AggregationFatal,
        }
    }

    pub(crate) fn aggregation(stage: Stage, parent_id: &str, source: Error) -> Self {
        Error::Aggregation {
            stage,
            parent_id: parent_id.to_string(),
            source: Box::new(source),
        }
    }
}

/// A specialized Result type for ClickUp API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_endpoint_and_code() {
        let err = Error::Status {
            endpoint: "/space/42".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "failed to get data from ClickUp API for: /space/42. Status: 404"
        );
        assert_eq!(err.kind(), ErrorKind::ApiStatus);
    }

    #[test]
    fn aggregation_wraps_inner_error() {
        let inner = Error::Status {
            endpoint: "/folder/7/list".into(),
            status: 500,
        };
        let err = Error::aggregation(Stage::Lists, "7", inner);
        assert_eq!(err.kind(), ErrorKind::AggregationFatal);
        assert!(err.to_string().starts_with("failed to get lists for 7"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn schema_variants_share_a_kind() {
        let invalid = Error::InvalidPayload {
            endpoint: "/x".into(),
            reason: "missing id".into(),
        };
        let card = Error::Cardinality {
            endpoint: "/x".into(),
            expected: "a single entity",
        };
        assert_eq!(invalid.kind(), ErrorKind::SchemaValidation);
        assert_eq!(card.kind(), ErrorKind::SchemaValidation);
        assert_eq!(Error::MissingApiKey.kind(), ErrorKind::Configuration);
        assert_eq!(Error::MissingTeam.kind(), ErrorKind::Configuration);
    }
}
