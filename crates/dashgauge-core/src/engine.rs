//! Gauge layout engine.
//!
//! One parameterized pipeline serves every circular gauge variant:
//! validate the configuration, convert range/reading/thresholds into
//! display units, then produce the arc, needle, ticks, labels, and
//! digital readout as plain value objects. Evaluation is pure and
//! stateless; calling it twice with the same inputs yields the same
//! layout.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::{GaugeConfig, GaugeKind, ZoneThresholds};
use crate::error::ConfigError;
use crate::geometry::{ArcGeometry, CanvasSize, NeedleGeometry, NumberLabel, TickSpec};
use crate::theme::GaugeTheme;
use crate::ticks::{generate_ticks, number_labels, DisplayRange};
use crate::units::{percentage_to_volume, FuelUnit, PressureUnit};

/// Fuel warning threshold used by the readout when the caller sets none.
const FUEL_LOW_DEFAULT: f64 = 25.0;

/// The digital value row and unit row below the dial.
///
/// Fuel folds its unit suffix into `text` ("27.0L", "45%"); every other
/// kind keeps the value and unit rows separate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalReadout {
    pub text: String,
    pub unit_label: String,
    pub color: Color,
}

/// Everything a renderer needs to draw one gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeLayout {
    pub arc: ArcGeometry,
    pub needle: NeedleGeometry,
    pub ticks: Vec<TickSpec>,
    pub labels: Vec<NumberLabel>,
    pub digital: DigitalReadout,
    pub canvas: CanvasSize,
}

/// Map a reading onto the arc.
///
/// The ratio is clamped to [0, 1]: the needle never leaves the arc even
/// when the sensor reads outside the configured range. A degenerate
/// range (max ≤ min) is a configuration error caught by validation;
/// this helper guards anyway and pins the needle at the start rather
/// than producing NaN.
pub fn needle_angle(value: f64, min: f64, max: f64, start_angle_deg: f64, sweep_deg: f64) -> f64 {
    let range = max - min;
    let ratio = if range <= 0.0 {
        0.0
    } else {
        ((value - min) / range).clamp(0.0, 1.0)
    };
    start_angle_deg + ratio * sweep_deg
}

/// Compute the full layout for one gauge at the given reading.
///
/// `value` and `thresholds` are in the kind's canonical units (Celsius,
/// PSI, fuel percent); conversion into display units happens here so
/// tick arithmetic and interval selection operate entirely on what the
/// driver sees.
pub fn evaluate(
    config: &GaugeConfig,
    value: f64,
    thresholds: &ZoneThresholds,
    theme: &GaugeTheme,
) -> Result<GaugeLayout, ConfigError> {
    config.validate()?;

    let range = display_range(config, thresholds);
    let display_value = to_display_units(config, value);
    if display_value < range.min || display_value > range.max {
        tracing::debug!(
            value = display_value,
            min = range.min,
            max = range.max,
            "reading outside configured range; needle clamped"
        );
    }

    let angle_deg = needle_angle(
        display_value,
        range.min,
        range.max,
        config.arc_start_angle_deg,
        config.sweep_deg,
    );

    let ticks = generate_ticks(config, &range, theme);
    let labels = number_labels(config, &ticks, &range, theme);

    Ok(GaugeLayout {
        arc: ArcGeometry::from_config(config),
        needle: NeedleGeometry::from_config(config, angle_deg),
        ticks,
        labels,
        digital: digital_readout(config, value, thresholds, theme),
        canvas: CanvasSize::from_config(config),
    })
}

/// Convert range bounds and thresholds into display units.
///
/// Fuel always works on the fixed 0–100 percent scale regardless of the
/// configured bounds; volume units never reach the needle.
fn display_range(config: &GaugeConfig, thresholds: &ZoneThresholds) -> DisplayRange {
    match &config.kind {
        GaugeKind::Temperature { unit } => DisplayRange {
            min: unit.from_celsius(config.min_value),
            max: unit.from_celsius(config.max_value),
            low: thresholds.low.map(|v| unit.from_celsius(v)),
            high: thresholds.high.map(|v| unit.from_celsius(v)),
        },
        GaugeKind::Pressure { unit } => DisplayRange {
            min: unit.from_psi(config.min_value),
            max: unit.from_psi(config.max_value),
            low: thresholds.low.map(|v| unit.from_psi(v)),
            high: thresholds.high.map(|v| unit.from_psi(v)),
        },
        GaugeKind::Fuel { .. } => DisplayRange {
            min: 0.0,
            max: 100.0,
            low: thresholds.low,
            high: thresholds.high,
        },
        _ => DisplayRange {
            min: config.min_value,
            max: config.max_value,
            low: thresholds.low,
            high: thresholds.high,
        },
    }
}

/// Convert a canonical reading into display units.
fn to_display_units(config: &GaugeConfig, value: f64) -> f64 {
    match &config.kind {
        GaugeKind::Temperature { unit } => unit.from_celsius(value),
        GaugeKind::Pressure { unit } => unit.from_psi(value),
        _ => value,
    }
}

/// Build the digital readout for the raw (unclamped) reading.
fn digital_readout(
    config: &GaugeConfig,
    value: f64,
    thresholds: &ZoneThresholds,
    theme: &GaugeTheme,
) -> DigitalReadout {
    match &config.kind {
        GaugeKind::Speed { unit } => DigitalReadout {
            text: format!("{}", value.round() as i64),
            unit_label: unit.symbol().to_string(),
            color: theme.readout,
        },
        GaugeKind::Rpm => DigitalReadout {
            text: format!("{}", value.round() as i64),
            unit_label: "RPM".to_string(),
            color: theme.readout,
        },
        GaugeKind::Voltage => DigitalReadout {
            text: format!("{value:.1}"),
            unit_label: "V".to_string(),
            color: theme.readout,
        },
        GaugeKind::Temperature { unit } => DigitalReadout {
            text: format!("{}", unit.from_celsius(value).round() as i64),
            unit_label: unit.symbol().to_string(),
            color: theme.readout,
        },
        GaugeKind::Pressure { unit } => {
            let display = unit.from_psi(value);
            let text = match unit {
                PressureUnit::Bar => format!("{display:.1}"),
                _ => format!("{}", display.round() as i64),
            };
            DigitalReadout {
                text,
                unit_label: unit.symbol().to_string(),
                color: theme.readout,
            }
        }
        GaugeKind::Fuel {
            unit,
            tank_capacity,
        } => {
            let text = match (unit, tank_capacity) {
                (FuelUnit::Litres, Some(capacity)) => {
                    format!("{:.1}L", percentage_to_volume(value, *capacity))
                }
                (FuelUnit::Gallons, Some(capacity)) => {
                    format!("{:.1}gal", percentage_to_volume(value, *capacity))
                }
                // Volume units without a known capacity fall back to percent.
                _ => format!("{}%", value.round() as i64),
            };
            let low_threshold = thresholds.low.unwrap_or(FUEL_LOW_DEFAULT);
            let color = if value <= low_threshold {
                theme.warning
            } else {
                theme.readout
            };
            DigitalReadout {
                text,
                unit_label: unit.symbol().to_string(),
                color,
            }
        }
    }
}
