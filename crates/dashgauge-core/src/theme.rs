//! Gauge color themes.
//!
//! Themes are plain values passed to the engine by the caller. There is
//! no environment probing: a host application decides light vs dark (or
//! builds its own palette) and hands the result in.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::GaugeKind;

/// Color roles shared by every gauge variant.
///
/// `warning` colors ticks and labels inside a configured warning zone.
/// `cold` is used only by temperature gauges for the low-temperature
/// zone; every other kind uses `warning` for both zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeTheme {
    pub background: Color,
    pub arc: Color,
    pub needle: Color,
    pub tick_major: Color,
    pub tick_minor: Color,
    pub numbers: Color,
    pub readout: Color,
    pub warning: Color,
    pub cold: Color,
}

/// Optional per-role overrides merged over a base theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOverrides {
    pub background: Option<Color>,
    pub arc: Option<Color>,
    pub needle: Option<Color>,
    pub tick_major: Option<Color>,
    pub tick_minor: Option<Color>,
    pub numbers: Option<Color>,
    pub readout: Option<Color>,
    pub warning: Option<Color>,
    pub cold: Option<Color>,
}

impl GaugeTheme {
    /// Light palette.
    pub fn light() -> Self {
        Self {
            background: Color::rgb(0xff, 0xff, 0xff),
            arc: Color::rgb(0xe0, 0xe0, 0xe0),
            needle: Color::rgb(0x21, 0x96, 0xf3),
            tick_major: Color::rgb(0x33, 0x33, 0x33),
            tick_minor: Color::rgb(0x99, 0x99, 0x99),
            numbers: Color::rgb(0x33, 0x33, 0x33),
            readout: Color::rgb(0x21, 0x96, 0xf3),
            warning: Color::rgb(0xf4, 0x43, 0x36),
            cold: Color::rgb(0x00, 0x66, 0xff),
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(0x1a, 0x1a, 0x1a),
            arc: Color::rgb(0x33, 0x33, 0x33),
            needle: Color::rgb(0x00, 0xff, 0x00),
            tick_major: Color::rgb(0xff, 0xff, 0xff),
            tick_minor: Color::rgb(0x88, 0x88, 0x88),
            numbers: Color::rgb(0xff, 0xff, 0xff),
            readout: Color::rgb(0x00, 0xff, 0x00),
            warning: Color::rgb(0xff, 0x44, 0x44),
            cold: Color::rgb(0x00, 0x66, 0xff),
        }
    }

    /// Dark palette tuned for a specific gauge kind.
    ///
    /// Speed and RPM gauges get the red needle and hard-red redline,
    /// battery gauges warn in orange (low voltage is a caution, not a
    /// redline), and fuel gauges use the automotive green needle.
    pub fn for_kind(kind: &GaugeKind) -> Self {
        let base = Self::dark();
        match kind {
            GaugeKind::Speed { .. } | GaugeKind::Rpm => Self {
                needle: Color::rgb(0xff, 0x44, 0x44),
                warning: Color::rgb(0xff, 0x00, 0x00),
                ..base
            },
            GaugeKind::Voltage => Self {
                warning: Color::rgb(0xff, 0xaa, 0x00),
                ..base
            },
            GaugeKind::Fuel { .. } => Self {
                needle: Color::rgb(0x4c, 0xaf, 0x50),
                readout: Color::rgb(0x4c, 0xaf, 0x50),
                ..base
            },
            GaugeKind::Temperature { .. } | GaugeKind::Pressure { .. } => Self {
                warning: Color::rgb(0xff, 0x00, 0x00),
                ..base
            },
        }
    }

    /// Merge caller overrides over this theme.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        if let Some(c) = overrides.background {
            self.background = c;
        }
        if let Some(c) = overrides.arc {
            self.arc = c;
        }
        if let Some(c) = overrides.needle {
            self.needle = c;
        }
        if let Some(c) = overrides.tick_major {
            self.tick_major = c;
        }
        if let Some(c) = overrides.tick_minor {
            self.tick_minor = c;
        }
        if let Some(c) = overrides.numbers {
            self.numbers = c;
        }
        if let Some(c) = overrides.readout {
            self.readout = c;
        }
        if let Some(c) = overrides.warning {
            self.warning = c;
        }
        if let Some(c) = overrides.cold {
            self.cold = c;
        }
        self
    }
}

impl Default for GaugeTheme {
    fn default() -> Self {
        Self::dark()
    }
}
