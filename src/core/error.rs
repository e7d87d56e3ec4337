//! Error types for the lamp controller

use thiserror::Error;

/// Main error type for the controller
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ephemeris error: {0}")]
    Ephemeris(String),

    #[error("Time error: {0}")]
    Time(String),

    #[error("Input error: {0}")]
    Input(String),
}
