//! Error types
//!
//! Configuration errors are fatal at startup. Render errors are reported per
//! draw call and skipped by the presenter.

use thiserror::Error;

/// Invalid startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gap size {gap} does not fit twice into field height {height}")]
    GapTooLarge { gap: f32, height: f32 },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("tick rate must be at least 1 per second")]
    ZeroTickRate,

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single draw call that could not be honored by the backend
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no drawing context available")]
    MissingContext,

    #[error("backend error: {0}")]
    Backend(String),
}
