//! Core type aliases and re-exports

pub use glam::{DVec2, DVec3};

/// Instant at which a lamp is evaluated
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Standard Result type for the controller
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
