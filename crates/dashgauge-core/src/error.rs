//! Error types for gauge configuration

use thiserror::Error;

/// Errors that can occur when validating a gauge configuration.
///
/// These are caller mistakes, surfaced before any geometry is computed.
/// Out-of-range readings are not errors; they are clamped at evaluation
/// time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value range: min={min} >= max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Gauge radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f64 },

    #[error("Gear selector requires at least one gear")]
    EmptyGearList,
}
