//! # DashGauge Core Library
//!
//! Geometry and tick-layout engine for vehicle instrument clusters.
//!
//! This library provides:
//! - Gauge layout evaluation: reading + range → arc, needle, ticks,
//!   number labels, digital readout
//! - Adaptive per-kind tick interval tables (speed, RPM, voltage,
//!   temperature, pressure) and the fixed automotive fuel scale
//! - Threshold-based warning-zone coloring with explicit themes
//! - Unit conversion (°C/°F, PSI/bar/kPa, fuel percent → volume)
//! - A discrete gear selector layout and a demo data simulator
//!
//! The engine is a pure function of its inputs: no rendering, no
//! animation, no I/O, no hidden state. A host renderer draws the value
//! objects it returns.
//!
//! ## Example
//!
//! ```rust
//! use dashgauge_core::prelude::*;
//!
//! let config = GaugeConfig::battery();
//! let theme = GaugeTheme::for_kind(&config.kind);
//! let layout = evaluate(&config, 12.0, &ZoneThresholds::low(11.5), &theme)?;
//!
//! assert_eq!(layout.digital.text, "12.0");
//! assert!((layout.needle.angle_deg - 240.0).abs() < 1e-9);
//! # Ok::<(), dashgauge_core::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod color;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod gear;
pub mod geometry;
pub mod theme;
pub mod ticks;
pub mod units;

pub use error::ConfigError;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::config::{GaugeConfig, GaugeKind, ZoneThresholds};
    pub use crate::engine::{evaluate, needle_angle, DigitalReadout, GaugeLayout};
    pub use crate::error::ConfigError;
    pub use crate::gear::{GearLayout, GearOrientation, GearSelectorConfig};
    pub use crate::geometry::{
        ArcGeometry, CanvasSize, NeedleGeometry, NumberLabel, Point, TickSpec,
    };
    pub use crate::theme::{GaugeTheme, ThemeOverrides};
    pub use crate::ticks::TickPlan;
    pub use crate::units::{FuelUnit, PressureUnit, SpeedUnit, TemperatureUnit};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
