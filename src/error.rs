use thiserror::Error;

use crate::types::ObjectId;

/// Out-of-range tunable
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}

/// Fatal failure while starting a component
#[derive(Debug, Error, PartialEq)]
pub enum InitError {
    #[error("required component missing: {0}")]
    MissingComponent(&'static str),

    #[error("camera target {0} does not exist")]
    MissingTarget(ObjectId),

    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] ConfigError),
}
