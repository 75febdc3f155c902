//! Auth token error types

/// Auth token operation result type
pub type AuthTokenResult<T> = Result<T, AuthTokenError>;

/// Errors raised while building a token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthTokenError {
    /// A required input field was empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// The signing primitive rejected the key or input
    #[error("signing error: {0}")]
    Signing(String),
    /// The claim set could not be encoded as JSON
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Text that is not a known status string
    #[error("invalid status: {0:?}")]
    InvalidStatus(String),
}

impl AuthTokenError {
    /// Create a missing field error
    #[inline]
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        AuthTokenError::MissingField(field)
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: &str) -> Self {
        AuthTokenError::Signing(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        AuthTokenError::Serialization(msg.to_string())
    }

    /// Create an invalid status error
    #[inline]
    #[must_use]
    pub fn invalid_status(value: &str) -> Self {
        AuthTokenError::InvalidStatus(value.to_string())
    }

    /// Whether this error was raised by input validation, before any signing
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthTokenError::MissingField(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_the_field() {
        let err = AuthTokenError::missing_field("Name");
        assert_eq!(err.to_string(), "missing required field: Name");
        assert!(err.is_validation());
    }

    #[test]
    fn signing_errors_are_not_validation_errors() {
        let err = AuthTokenError::signing("invalid length");
        assert_eq!(err.to_string(), "signing error: invalid length");
        assert!(!err.is_validation());
    }
}
