//! crates/booking_core/src/ports.rs
//!
//! Defines the service contracts (traits) at the edge of the booking core.
//! The core never performs I/O itself; room configuration is supplied through
//! these ports by whatever adapter the host application wires in.

use crate::domain::RoomSettings;
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Room settings not found: {0}")]
    NotFound(String),
    #[error("Room settings are malformed: {0}")]
    Malformed(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait RoomSettingsSource: Send + Sync {
    /// Loads the full configuration of one room by its identifier.
    async fn load_room_settings(&self, room_id: &str) -> PortResult<RoomSettings>;
}
