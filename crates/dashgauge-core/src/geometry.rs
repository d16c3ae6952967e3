//! Geometric primitives produced by the layout engine.
//!
//! All coordinates live in the logical gauge canvas (300 units wide,
//! see [`crate::config::CANVAS_WIDTH`]). Angles are degrees measured
//! from the positive x-axis, increasing clockwise in y-down screen
//! space; the polar helper converts to Cartesian with the usual
//! `(cx + r·cosθ, cy + r·sinθ)`.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::{GaugeConfig, CANVAS_WIDTH, MAX_RADIUS};

/// Half-width of the needle base, perpendicular to the needle axis.
pub const NEEDLE_BASE_HALF_WIDTH: f64 = 3.0;

/// A point on the gauge canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Convert a polar position around `(cx, cy)` to canvas coordinates.
pub fn polar_point(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point {
        x: cx + radius * rad.cos(),
        y: cy + radius * rad.sin(),
    }
}

/// Circular arc between the configured start and end angles.
///
/// `sweep_flag` is always 1: stock faces draw clockwise, and flipping
/// the flag would select the complementary arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub start_point: Point,
    pub end_point: Point,
    pub radius: f64,
    pub large_arc_flag: u8,
    pub sweep_flag: u8,
}

impl ArcGeometry {
    /// Compute the arc for a gauge face.
    pub fn from_config(config: &GaugeConfig) -> Self {
        let start_point = polar_point(
            config.center_x,
            config.center_y,
            config.radius,
            config.arc_start_angle_deg,
        );
        let end_point = polar_point(
            config.center_x,
            config.center_y,
            config.radius,
            config.arc_end_angle_deg,
        );
        let large_arc_flag = if config.sweep_deg >= 180.0 { 1 } else { 0 };
        Self {
            start_point,
            end_point,
            radius: config.radius,
            large_arc_flag,
            sweep_flag: 1,
        }
    }

    /// Render as an SVG path (`M … A …`).
    pub fn svg_path(&self) -> String {
        format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            self.start_point.x,
            self.start_point.y,
            self.radius,
            self.radius,
            self.large_arc_flag,
            self.sweep_flag,
            self.end_point.x,
            self.end_point.y
        )
    }
}

/// Needle dart: a thin triangle from two base points straddling the
/// center to the tip at the needle angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeedleGeometry {
    pub angle_deg: f64,
    pub tip: Point,
    pub base1: Point,
    pub base2: Point,
}

impl NeedleGeometry {
    /// Compute the needle polygon for a gauge face at `angle_deg`.
    ///
    /// The base points sit `NEEDLE_BASE_HALF_WIDTH` off the center,
    /// perpendicular to the needle axis rather than along it, which
    /// gives the dart its thin waist.
    pub fn from_config(config: &GaugeConfig, angle_deg: f64) -> Self {
        let tip = polar_point(
            config.center_x,
            config.center_y,
            config.needle_length,
            angle_deg,
        );
        let base1 = polar_point(
            config.center_x,
            config.center_y,
            NEEDLE_BASE_HALF_WIDTH,
            angle_deg + 90.0,
        );
        let base2 = polar_point(
            config.center_x,
            config.center_y,
            NEEDLE_BASE_HALF_WIDTH,
            angle_deg - 90.0,
        );
        Self {
            angle_deg,
            tip,
            base1,
            base2,
        }
    }

    /// Render as a closed SVG path (`M base1 L tip L base2 Z`).
    pub fn svg_path(&self) -> String {
        format!(
            "M {} {} L {} {} L {} {} Z",
            self.base1.x, self.base1.y, self.tip.x, self.tip.y, self.base2.x, self.base2.y
        )
    }
}

/// One tick mark on the gauge face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSpec {
    /// Tick position in display units.
    pub value: f64,
    pub is_major: bool,
    pub angle_deg: f64,
    /// Inner end of the tick line (radius minus tick length).
    pub inner_radius: f64,
    /// Outer end of the tick line (the arc radius).
    pub outer_radius: f64,
    pub color: Color,
}

impl TickSpec {
    /// Tick line endpoints, inner then outer.
    pub fn endpoints(&self, cx: f64, cy: f64) -> (Point, Point) {
        (
            polar_point(cx, cy, self.inner_radius, self.angle_deg),
            polar_point(cx, cy, self.outer_radius, self.angle_deg),
        )
    }
}

/// Numeric label at a major tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLabel {
    /// Label position in display units.
    pub value: f64,
    pub display_text: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

/// Logical canvas dimensions for one gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Canvas for a gauge face: full-circle gauges are square,
    /// half-circle gauges get extra height below the baseline for the
    /// label area, derived from the configured padding.
    pub fn from_config(config: &GaugeConfig) -> Self {
        if config.kind.is_full_circle() {
            Self {
                width: CANVAS_WIDTH,
                height: CANVAS_WIDTH,
            }
        } else {
            let extra_height = MAX_RADIUS * config.padding_percent / 100.0;
            Self {
                width: CANVAS_WIDTH,
                height: MAX_RADIUS + extra_height,
            }
        }
    }
}
