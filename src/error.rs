//! Error types for the storage, ingestion and query layers.

use thiserror::Error;

/// Failures raised by a [`crate::repositories::TransactionStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("could not decode document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
    #[error("{0}")]
    Other(String),
}

/// Failures while loading or inserting seed data.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("could not fetch seed data: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("seed source responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("could not read seed file: {0}")]
    Read(#[from] std::io::Error),
    #[error("seed data is not a JSON array of transactions: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not store seed data: {0}")]
    Store(#[from] StoreError),
}

/// The errors a service operation may return.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("seed ingestion failed: {0}")]
    Ingestion(#[from] IngestionError),

    #[error("query failed: {0}")]
    Query(#[from] StoreError),

    /// The month parameter is neither a month name, an abbreviation nor 1-12.
    #[error("\"{0}\" is not a valid month")]
    InvalidMonth(String),

    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ServiceError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Whether the caller, rather than the server, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidMonth(_) | Self::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_client_errors() {
        assert!(ServiceError::InvalidMonth("Foo".to_string()).is_client_error());
        assert!(ServiceError::invalid_parameter("page", "must be at least 1").is_client_error());
        assert!(!ServiceError::Query(StoreError::Other("down".to_string())).is_client_error());
    }

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            ServiceError::InvalidMonth("Foo".to_string()).to_string(),
            "\"Foo\" is not a valid month"
        );
        assert_eq!(
            ServiceError::invalid_parameter("perPage", "must be between 1 and 100").to_string(),
            "invalid perPage: must be between 1 and 100"
        );
    }
}
