//! Typed error definitions for the document-store client.
//!
//! Errors are **Displayable** for logging via the Display trait and
//! **Matchable** for handling logic via enum variants, composed with
//! thiserror derive macros.

use thiserror::Error;

/// Errors produced while reading a collection from the document store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The request never reached the store (network failure, CORS, bad URL).
    #[error("Store unreachable: {0}")]
    Network(String),

    /// The store answered with a non-success HTTP status.
    #[error("Store responded with HTTP {status}")]
    Http { status: u16 },

    /// The response body could not be decoded into the wire format.
    #[error("Malformed store response: {0}")]
    Decode(String),
}

/// Standard Result type using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Http { status: 403 };
        assert_eq!(format!("{}", err), "Store responded with HTTP 403");

        let err = StoreError::Network("fetch failed".to_string());
        assert!(format!("{}", err).contains("fetch failed"));
    }
}
