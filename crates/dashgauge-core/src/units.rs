//! Unit Conversion Functions
//!
//! Pure value transforms used by the layout engine:
//! - Temperature: °C ↔ °F
//! - Pressure: PSI ↔ bar ↔ kPa
//! - Fuel: percentage → volume (litres/gallons) for the readout
//!
//! Canonical units are Celsius, PSI, and fuel percentage; gauges convert
//! their range, reading, and thresholds into display units before any
//! tick arithmetic so interval tables are keyed on the displayed range.

use serde::{Deserialize, Serialize};

/// PSI → bar factor.
pub const PSI_TO_BAR: f64 = 0.0689476;

/// PSI → kPa factor.
pub const PSI_TO_KPA: f64 = 6.89476;

/// Speed display units. Label-only: readings are supplied already in
/// the displayed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[serde(rename = "mph")]
    Mph,
    #[serde(rename = "kph")]
    Kph,
}

impl SpeedUnit {
    /// Display symbol for the readout unit row.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Mph => "mph",
            Self::Kph => "kph",
        }
    }
}

/// Temperature display units. Readings are canonical Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "celsius")]
    Celsius,
    #[serde(rename = "fahrenheit")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a canonical Celsius value into this display unit.
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    /// Display symbol for the readout unit row.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Pressure display units. Readings are canonical PSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "psi")]
    Psi,
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "kpa")]
    Kpa,
}

impl PressureUnit {
    /// Convert a canonical PSI value into this display unit.
    pub fn from_psi(&self, psi: f64) -> f64 {
        match self {
            Self::Psi => psi,
            Self::Bar => psi * PSI_TO_BAR,
            Self::Kpa => psi * PSI_TO_KPA,
        }
    }

    /// Display symbol for the readout unit row.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Psi => "PSI",
            Self::Bar => "bar",
            Self::Kpa => "kPa",
        }
    }
}

/// Fuel display units. The needle always works on the canonical 0–100
/// percentage; volume units only change the digital readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelUnit {
    #[serde(rename = "percentage")]
    Percentage,
    #[serde(rename = "litres")]
    Litres,
    #[serde(rename = "gallons")]
    Gallons,
}

impl FuelUnit {
    /// Display symbol for the readout unit row.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Percentage => "%",
            Self::Litres => "L",
            Self::Gallons => "gal",
        }
    }
}

/// Convert Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Convert Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Convert a fuel percentage to a volume given the tank capacity
pub fn percentage_to_volume(percentage: f64, tank_capacity: f64) -> f64 {
    percentage / 100.0 * tank_capacity
}
