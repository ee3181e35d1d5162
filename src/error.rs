use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("property {id}: {reason}")]
    InvalidProperty { id: String, reason: &'static str },
    #[error("duplicate property id {id}")]
    DuplicateId { id: String },
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account already exists for {email}")]
    EmailTaken { email: String },
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    #[error("sign in to make a booking")]
    NotAuthenticated,
    #[error("check-in and check-out dates are required")]
    MissingDates,
    #[error("check-out must be after check-in")]
    NoQuote,
    #[error("guest count {guests} outside 1..={max_guests}")]
    GuestCount { guests: u32, max_guests: u32 },
    #[error("property {id} is not available")]
    Unavailable { id: String },
    #[error("payment failed: {reason}")]
    PaymentFailed { reason: String },
    #[error("booking timed out after {timeout_ms} ms")]
    TimedOut { timeout_ms: u64 },
}

impl CheckoutError {
    /// Whether the caller may simply try again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CheckoutError::PaymentFailed { .. } | CheckoutError::TimedOut { .. }
        )
    }
}
