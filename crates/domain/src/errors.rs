//! Domain-level errors
//!
//! The `Display` strings of the client-input variants double as the
//! `detail` bodies of the HTTP error responses, so they must stay
//! stable.

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// The path slug carried too few comma-separated fields
    #[error("Not enough arguments")]
    NotEnoughArguments,

    /// The time field was neither an epoch literal nor a parseable datetime
    #[error("Invalid time parameter")]
    InvalidTimeParameter,

    /// A local-midnight timestamp could not be reassembled for the window
    #[error("Invalid day window: {0}")]
    InvalidWindow(String),
}

impl DomainError {
    /// Whether this error was caused by client input (as opposed to an
    /// internal computation failure)
    #[must_use]
    pub const fn is_client_input(&self) -> bool {
        matches!(self, Self::NotEnoughArguments | Self::InvalidTimeParameter)
    }
}
