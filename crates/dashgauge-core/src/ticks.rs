//! Tick planning and generation.
//!
//! Every circular gauge shares one generation loop; what differs per
//! kind is the interval table, the label format, and the warning-zone
//! predicate. The tables are deliberate per-domain choices (voltage
//! needs 0.5 V granularity on narrow ranges, RPM wants 500/1000/2000
//! steps), not a derived formula.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::{GaugeConfig, GaugeKind};
use crate::geometry::{polar_point, NumberLabel, TickSpec};
use crate::theme::GaugeTheme;
use crate::units::PressureUnit;

/// Tolerance for classifying an accumulated tick position as major.
/// Float accumulation over dozens of minor steps drifts; positions
/// within this distance of a major multiple count as major.
pub const MAJOR_TICK_EPSILON: f64 = 0.01;

/// Distance from the arc to the number labels.
const LABEL_INSET: f64 = 25.0;

/// Fuel gauges use fixed automotive positions, not an interval loop.
const FUEL_MAJOR_LEVELS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];
const FUEL_MINOR_LEVELS: [f64; 4] = [12.5, 37.5, 62.5, 87.5];

/// Major interval and minor subdivision for one gauge evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub major_interval: f64,
    pub minor_per_major: u32,
}

impl TickPlan {
    /// Select the tick plan for a gauge kind over a display-unit range.
    ///
    /// Each kind owns a small ordered table of `range ≤ threshold`
    /// rules with a fallback for wider ranges. Fuel has no plan: its
    /// tick positions are fixed.
    pub fn select(kind: &GaugeKind, range: f64) -> Option<Self> {
        let plan = match kind {
            GaugeKind::Voltage => {
                if range <= 3.0 {
                    // 0.1 V minors for 3.3 V electronics
                    Self {
                        major_interval: 0.5,
                        minor_per_major: 5,
                    }
                } else if range <= 6.0 {
                    // 1 V steps for 5 V ranges and 12 V automotive spans
                    Self {
                        major_interval: 1.0,
                        minor_per_major: 4,
                    }
                } else if range <= 10.0 {
                    Self {
                        major_interval: 2.0,
                        minor_per_major: 4,
                    }
                } else {
                    // 2 V holds even on very wide ranges
                    Self {
                        major_interval: 2.0,
                        minor_per_major: 4,
                    }
                }
            }
            GaugeKind::Rpm => {
                let major_interval = if range <= 4000.0 {
                    500.0
                } else if range <= 8000.0 {
                    1000.0
                } else {
                    2000.0
                };
                Self {
                    major_interval,
                    minor_per_major: 5,
                }
            }
            GaugeKind::Temperature { .. } => {
                if range <= 50.0 {
                    Self {
                        major_interval: 10.0,
                        minor_per_major: 2,
                    }
                } else if range <= 100.0 {
                    Self {
                        major_interval: 20.0,
                        minor_per_major: 4,
                    }
                } else if range <= 200.0 {
                    Self {
                        major_interval: 40.0,
                        minor_per_major: 4,
                    }
                } else {
                    Self {
                        major_interval: 50.0,
                        minor_per_major: 5,
                    }
                }
            }
            GaugeKind::Pressure { .. } => {
                if range <= 20.0 {
                    Self {
                        major_interval: 5.0,
                        minor_per_major: 5,
                    }
                } else if range <= 50.0 {
                    Self {
                        major_interval: 10.0,
                        minor_per_major: 2,
                    }
                } else if range <= 100.0 {
                    Self {
                        major_interval: 20.0,
                        minor_per_major: 4,
                    }
                } else {
                    Self {
                        major_interval: 50.0,
                        minor_per_major: 5,
                    }
                }
            }
            GaugeKind::Speed { .. } => {
                let major_interval = if range <= 100.0 {
                    10.0
                } else if range <= 200.0 {
                    20.0
                } else {
                    50.0
                };
                Self {
                    major_interval,
                    minor_per_major: 5,
                }
            }
            GaugeKind::Fuel { .. } => return None,
        };
        Some(plan)
    }

    /// Minor tick spacing.
    pub fn minor_interval(&self) -> f64 {
        self.major_interval / self.minor_per_major as f64
    }
}

/// Value range and warning thresholds, already in display units.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DisplayRange {
    pub min: f64,
    pub max: f64,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl DisplayRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Which warning zone a value falls in, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Zone {
    Low,
    High,
}

/// Classify a tick value against the kind's warning zones.
///
/// Speed and RPM warn above the redline only; voltage warns below the
/// low threshold only; temperature and pressure check both sides (low
/// wins when zones overlap). Fuel ticks are never zone-colored — low
/// fuel shows on the digital readout instead.
fn zone_for(kind: &GaugeKind, value: f64, range: &DisplayRange) -> Option<Zone> {
    match kind {
        GaugeKind::Speed { .. } | GaugeKind::Rpm => match range.high {
            Some(high) if value >= high => Some(Zone::High),
            _ => None,
        },
        GaugeKind::Voltage => match range.low {
            Some(low) if value <= low => Some(Zone::Low),
            _ => None,
        },
        GaugeKind::Temperature { .. } | GaugeKind::Pressure { .. } => {
            if matches!(range.low, Some(low) if value <= low) {
                Some(Zone::Low)
            } else if matches!(range.high, Some(high) if value >= high) {
                Some(Zone::High)
            } else {
                None
            }
        }
        GaugeKind::Fuel { .. } => None,
    }
}

fn zone_color(kind: &GaugeKind, zone: Zone, theme: &GaugeTheme) -> Color {
    match (kind, zone) {
        (GaugeKind::Temperature { .. }, Zone::Low) => theme.cold,
        _ => theme.warning,
    }
}

/// Generate the ordered tick sequence for one gauge evaluation.
///
/// Positions accumulate in floating point from `min` in minor-interval
/// steps, exactly like the dial hardware tables were authored; ticks
/// come out in increasing-value order and boundary duplicates are left
/// in place.
pub(crate) fn generate_ticks(
    config: &GaugeConfig,
    range: &DisplayRange,
    theme: &GaugeTheme,
) -> Vec<TickSpec> {
    if matches!(config.kind, GaugeKind::Fuel { .. }) {
        return fuel_ticks(config, theme);
    }

    let plan = match TickPlan::select(&config.kind, range.span()) {
        Some(plan) => plan,
        None => return Vec::new(),
    };
    let minor_interval = plan.minor_interval();

    let mut ticks = Vec::new();
    let mut value = range.min;
    while value <= range.max {
        let is_major = ((value - range.min) % plan.major_interval).abs() < MAJOR_TICK_EPSILON;
        let angle_deg =
            config.arc_start_angle_deg + (value - range.min) / range.span() * config.sweep_deg;
        let tick_length = if is_major {
            config.tick_length_major
        } else {
            config.tick_length_minor
        };
        let color = match zone_for(&config.kind, value, range) {
            Some(zone) => zone_color(&config.kind, zone, theme),
            None if is_major => theme.tick_major,
            None => theme.tick_minor,
        };
        ticks.push(TickSpec {
            value,
            is_major,
            angle_deg,
            inner_radius: config.radius - tick_length,
            outer_radius: config.radius,
            color,
        });
        value += minor_interval;
    }
    ticks
}

/// Fixed fuel tick set: E/¼/½/¾/F majors with minors between, merged
/// into increasing order.
fn fuel_ticks(config: &GaugeConfig, theme: &GaugeTheme) -> Vec<TickSpec> {
    let mut levels: Vec<(f64, bool)> = FUEL_MAJOR_LEVELS
        .iter()
        .map(|&level| (level, true))
        .chain(FUEL_MINOR_LEVELS.iter().map(|&level| (level, false)))
        .collect();
    levels.sort_by(|a, b| a.0.total_cmp(&b.0));

    levels
        .into_iter()
        .map(|(level, is_major)| {
            let angle_deg = config.arc_start_angle_deg + level / 100.0 * config.sweep_deg;
            let tick_length = if is_major {
                config.tick_length_major
            } else {
                config.tick_length_minor
            };
            TickSpec {
                value: level,
                is_major,
                angle_deg,
                inner_radius: config.radius - tick_length,
                outer_radius: config.radius,
                color: if is_major {
                    theme.tick_major
                } else {
                    theme.tick_minor
                },
            }
        })
        .collect()
}

/// One label per major tick, inset from the arc along the tick angle.
pub(crate) fn number_labels(
    config: &GaugeConfig,
    ticks: &[TickSpec],
    range: &DisplayRange,
    theme: &GaugeTheme,
) -> Vec<NumberLabel> {
    let label_radius = config.radius - LABEL_INSET;
    ticks
        .iter()
        .filter(|tick| tick.is_major)
        .map(|tick| {
            let position = polar_point(config.center_x, config.center_y, label_radius, tick.angle_deg);
            let color = match zone_for(&config.kind, tick.value, range) {
                Some(zone) => zone_color(&config.kind, zone, theme),
                None => theme.numbers,
            };
            NumberLabel {
                value: tick.value,
                display_text: format_label(&config.kind, tick.value),
                x: position.x,
                y: position.y,
                color,
            }
        })
        .collect()
}

/// Format a major-tick value per gauge convention.
fn format_label(kind: &GaugeKind, value: f64) -> String {
    match kind {
        GaugeKind::Voltage => format!("{value:.1}"),
        GaugeKind::Rpm => {
            // Tachometers label in thousands: 6000 reads "6".
            if value >= 1000.0 {
                format_plain(value / 1000.0)
            } else {
                format_plain(value)
            }
        }
        GaugeKind::Temperature { .. } => format!("{}", value.round() as i64),
        GaugeKind::Pressure { unit } => match unit {
            PressureUnit::Bar => format!("{value:.1}"),
            _ => format!("{}", value.round() as i64),
        },
        GaugeKind::Speed { .. } => format_plain(value),
        GaugeKind::Fuel { .. } => fuel_glyph(value),
    }
}

/// Print a number the short way: integers without a decimal point,
/// everything else as-is ("6", "6.5").
fn format_plain(value: f64) -> String {
    if value == value.round() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Fixed automotive fuel glyphs at the quarter positions.
fn fuel_glyph(level: f64) -> String {
    match level.round() as i64 {
        0 => "E".to_string(),
        25 => "¼".to_string(),
        50 => "½".to_string(),
        75 => "¾".to_string(),
        100 => "F".to_string(),
        _ => format_plain(level),
    }
}
