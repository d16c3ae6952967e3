//! Gauge configuration types.
//!
//! A [`GaugeConfig`] fully describes one gauge face: its kind, value
//! range, arc placement, and tick/needle dimensions. Per-kind
//! constructors carry the stock automotive defaults; all fields are
//! public so callers can adjust them before evaluation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::units::{FuelUnit, PressureUnit, SpeedUnit, TemperatureUnit};

/// Logical canvas width shared by every gauge, in canvas units.
pub const CANVAS_WIDTH: f64 = 300.0;

/// Largest usable radius (half the canvas width).
pub const MAX_RADIUS: f64 = 150.0;

/// Gauge variant, carrying the display-unit selection where the variant
/// has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GaugeKind {
    /// Speedometer. Readings arrive already in the displayed unit.
    Speed { unit: SpeedUnit },
    /// Tachometer; range and readings in RPM.
    Rpm,
    /// Battery voltage gauge.
    Voltage,
    /// Fuel level gauge; readings are canonical 0–100 percent.
    Fuel {
        unit: FuelUnit,
        /// Tank capacity in the chosen volume unit, used only by the
        /// digital readout.
        tank_capacity: Option<f64>,
    },
    /// Coolant/ambient temperature gauge; readings are canonical Celsius.
    Temperature { unit: TemperatureUnit },
    /// Oil pressure gauge; readings are canonical PSI.
    Pressure { unit: PressureUnit },
}

impl GaugeKind {
    /// Full-circle kinds sweep 270°; the rest are half-circle gauges.
    pub fn is_full_circle(&self) -> bool {
        matches!(self, Self::Speed { .. } | Self::Rpm)
    }
}

/// Optional warning-zone thresholds, in the gauge's canonical units.
///
/// Values at or below `low`, or at or above `high`, are drawn in the
/// theme's warning color (temperature uses the cold color for the low
/// zone). Oil pressure conventionally sets both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneThresholds {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ZoneThresholds {
    /// No warning zones.
    pub fn none() -> Self {
        Self::default()
    }

    /// Warning zone below `value` only.
    pub fn low(value: f64) -> Self {
        Self {
            low: Some(value),
            high: None,
        }
    }

    /// Warning zone above `value` only.
    pub fn high(value: f64) -> Self {
        Self {
            low: None,
            high: Some(value),
        }
    }

    /// Dual warning zones, low and high.
    pub fn both(low: f64, high: f64) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }
}

/// Full description of one gauge face.
///
/// Angles are degrees in screen space: 0° points at 3 o'clock and
/// angles increase clockwise (y grows downward). `sweep_deg` is the
/// needle's travel and is carried explicitly: the stock full-circle
/// faces draw their arc between −225° and −45° while the needle sweeps
/// 270°, so the sweep cannot be derived from the arc endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    pub kind: GaugeKind,

    /// Lower range bound, in canonical units.
    pub min_value: f64,

    /// Upper range bound, in canonical units.
    pub max_value: f64,

    /// Arc start angle in degrees.
    pub arc_start_angle_deg: f64,

    /// Arc end angle in degrees.
    pub arc_end_angle_deg: f64,

    /// Needle travel from min to max, in degrees (180 or 270 on stock
    /// faces).
    pub sweep_deg: f64,

    /// Gauge radius in canvas units.
    pub radius: f64,

    /// Arc center x.
    pub center_x: f64,

    /// Arc center y.
    pub center_y: f64,

    /// Major tick length, drawn inward from the arc.
    pub tick_length_major: f64,

    /// Minor tick length, drawn inward from the arc.
    pub tick_length_minor: f64,

    /// Needle length from center to tip.
    pub needle_length: f64,

    /// Padding as a percentage of the maximum radius; determines the
    /// actual radius on stock faces and the extra canvas height of
    /// half-circle gauges.
    pub padding_percent: f64,
}

impl GaugeConfig {
    fn stock(kind: GaugeKind, min_value: f64, max_value: f64) -> Self {
        let full_circle = kind.is_full_circle();
        let padding_percent = 15.0;
        let radius = MAX_RADIUS - MAX_RADIUS * padding_percent / 100.0;
        let (arc_start_angle_deg, arc_end_angle_deg, sweep_deg) = if full_circle {
            (-225.0, -45.0, 270.0)
        } else {
            (180.0, 0.0, 180.0)
        };
        Self {
            kind,
            min_value,
            max_value,
            arc_start_angle_deg,
            arc_end_angle_deg,
            sweep_deg,
            radius,
            center_x: MAX_RADIUS,
            center_y: MAX_RADIUS,
            tick_length_major: 15.0,
            tick_length_minor: 8.0,
            needle_length: radius - 20.0,
            padding_percent,
        }
    }

    /// Stock speedometer: 0–200, 270° sweep.
    pub fn speed(unit: SpeedUnit) -> Self {
        Self::stock(GaugeKind::Speed { unit }, 0.0, 200.0)
    }

    /// Stock tachometer: 0–8000 RPM, 270° sweep.
    pub fn rpm() -> Self {
        Self::stock(GaugeKind::Rpm, 0.0, 8000.0)
    }

    /// Stock battery gauge: 10–16 V half-circle, tuned for 12 V
    /// automotive electrics.
    pub fn battery() -> Self {
        Self::stock(GaugeKind::Voltage, 10.0, 16.0)
    }

    /// Stock fuel gauge: 0–100 % half-circle.
    pub fn fuel(unit: FuelUnit, tank_capacity: Option<f64>) -> Self {
        Self::stock(
            GaugeKind::Fuel {
                unit,
                tank_capacity,
            },
            0.0,
            100.0,
        )
    }

    /// Stock temperature gauge: −40–120 °C half-circle.
    pub fn temperature(unit: TemperatureUnit) -> Self {
        Self::stock(GaugeKind::Temperature { unit }, -40.0, 120.0)
    }

    /// Stock oil pressure gauge: 0–100 PSI half-circle.
    pub fn pressure(unit: PressureUnit) -> Self {
        Self::stock(GaugeKind::Pressure { unit }, 0.0, 100.0)
    }

    /// Check the configuration for caller errors.
    ///
    /// Runs before any geometry is computed; a failed validation is
    /// fatal to the evaluation and never retried.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value >= self.max_value {
            return Err(ConfigError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                radius: self.radius,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_geometry() {
        let speed = GaugeConfig::speed(SpeedUnit::Mph);
        assert_eq!(speed.sweep_deg, 270.0);
        assert_eq!(speed.arc_start_angle_deg, -225.0);
        assert!((speed.radius - 127.5).abs() < 1e-9);
        assert!((speed.needle_length - 107.5).abs() < 1e-9);

        let battery = GaugeConfig::battery();
        assert_eq!(battery.sweep_deg, 180.0);
        assert_eq!(battery.arc_start_angle_deg, 180.0);
        assert_eq!(battery.min_value, 10.0);
        assert_eq!(battery.max_value, 16.0);
    }

    #[test]
    fn test_validation_rejects_inverted_range() {
        let mut config = GaugeConfig::rpm();
        config.min_value = 9000.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange {
                min: 9000.0,
                max: 8000.0
            })
        );
    }

    #[test]
    fn test_validation_rejects_bad_radius() {
        let mut config = GaugeConfig::battery();
        config.radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveRadius { .. })
        ));
    }
}
