//! Core error types for the seller console.
//!
//! Simulated service failures are ordinary values of [`ServiceError`]; they
//! travel back to the caller inside [`Result`] and are never raised as
//! panics. The `Display` output of every variant is the message shown to the
//! user, so it must stay human readable.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the console data layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid lead fixture: {0}")]
    Fixture(String),

    #[error("Invalid configuration value: {0}")]
    Config(String),
}

impl Error {
    /// Whether the failed operation can be attempted again as-is.
    ///
    /// Only load failures are retryable; the console offers an explicit
    /// retry for them.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Service(ServiceError::Network(_)))
    }
}

/// Failures produced by the simulated backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Loading the lead list failed.
    #[error("{0}")]
    Network(String),

    /// A lead mutation failed.
    #[error("{0}")]
    Update(String),

    /// Converting a lead into an opportunity failed.
    #[error("{0}")]
    Conversion(String),
}

impl ServiceError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn update(message: impl Into<String>) -> Self {
        Self::Update(message.into())
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion(message.into())
    }
}

/// Validation errors for user input and fixture data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Score {0} is outside the range 0-100")]
    ScoreOutOfRange(u32),

    #[error("Amount cannot be negative")]
    NegativeAmount,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Fixture(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_messages_are_verbatim() {
        let err: Error = ServiceError::network("Network error: Failed to fetch leads").into();
        assert_eq!(err.to_string(), "Network error: Failed to fetch leads");

        let err: Error = ServiceError::update("Failed to update lead").into();
        assert_eq!(err.to_string(), "Failed to update lead");
    }

    #[test]
    fn test_only_network_errors_are_retryable() {
        assert!(Error::from(ServiceError::network("down")).is_retryable());
        assert!(!Error::from(ServiceError::update("nope")).is_retryable());
        assert!(!Error::from(ServiceError::conversion("nope")).is_retryable());
        assert!(!Error::from(ValidationError::NegativeAmount).is_retryable());
    }

    #[test]
    fn test_invalid_email_message() {
        let err: Error = ValidationError::InvalidEmail("not-an-email".to_string()).into();
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_json_error_maps_to_fixture() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Fixture(_)));
    }
}
