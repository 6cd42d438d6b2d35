//! services/quote/src/error.rs
//!
//! Defines the primary error type for the quote service.

use crate::config::ConfigError;
use booking_core::{BookingError, PortError};

/// The primary error type for the `quote` service.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the settings port.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// The booking form is not complete or violates the room's rules.
    #[error("Booking Error: {0}")]
    Booking(#[from] BookingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
