//! Gear selector layout.
//!
//! The one non-circular variant: a strip of discrete gear cells
//! (P/R/N/D for an automatic, 1–6 for a manual) joined by connector
//! segments, with the selected cell enlarged and filled. Cell sizing is
//! tuned for four gears and scales down proportionally when more are
//! configured.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::theme::GaugeTheme;

/// Gear count the stock cell sizes are tuned for.
const BASE_GEAR_COUNT: usize = 4;

/// Strip orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearOrientation {
    Portrait,
    Landscape,
}

/// Configuration for the gear selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearSelectorConfig {
    /// Ordered gear labels; must not be empty.
    pub gears: Vec<String>,
    /// Currently selected gear. An unknown label is not an error — no
    /// cell is marked active.
    pub current_gear: String,
    pub orientation: GearOrientation,
    /// Padding as a percentage of the container's short side.
    pub padding_percent: f64,
    /// Cell diameter at the base gear count.
    pub gear_size: f64,
    /// Connector thickness at the base gear count.
    pub connecting_line_thickness: f64,
    /// Margin on each side of a cell along the strip axis.
    pub gear_margin: f64,
    /// Container corner radius.
    pub corner_radius: f64,
    /// Label size inside the active cell, before scaling.
    pub active_font_size: f64,
    /// Label size inside inactive cells, before scaling.
    pub inactive_font_size: f64,
}

impl GearSelectorConfig {
    /// Stock selector for the given gear set.
    pub fn new(gears: Vec<String>, current_gear: impl Into<String>) -> Self {
        Self {
            gears,
            current_gear: current_gear.into(),
            orientation: GearOrientation::Portrait,
            padding_percent: 10.0,
            gear_size: 45.0,
            connecting_line_thickness: 8.0,
            gear_margin: 1.0,
            corner_radius: 15.0,
            active_font_size: 36.0,
            inactive_font_size: 32.0,
        }
    }

    /// Stock automatic selector (P/R/N/D).
    pub fn automatic(current_gear: impl Into<String>) -> Self {
        Self::new(
            ["P", "R", "N", "D"].map(String::from).to_vec(),
            current_gear,
        )
    }

    /// Check the configuration for caller errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gears.is_empty() {
            return Err(ConfigError::EmptyGearList);
        }
        Ok(())
    }
}

/// One gear cell in the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearCell {
    pub label: String,
    pub is_active: bool,
    /// Cell diameter after scaling.
    pub size: f64,
    pub font_size: f64,
    /// Fill color; inactive cells are outline-only.
    pub fill: Option<Color>,
    pub text_color: Color,
    /// Cell center relative to the container center, along the strip.
    pub center: Point,
}

/// Connector segment between two adjacent cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearConnector {
    pub from: Point,
    pub to: Point,
    pub thickness: f64,
}

/// Computed gear selector layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearLayout {
    pub cells: Vec<GearCell>,
    pub connectors: Vec<GearConnector>,
    /// Container width over height (2.5 landscape, 0.4 portrait).
    pub aspect_ratio: f64,
    /// Shrink factor applied above the base gear count.
    pub size_scale: f64,
    pub corner_radius: f64,
}

/// Lay out the gear strip.
pub fn layout(config: &GearSelectorConfig, theme: &GaugeTheme) -> Result<GearLayout, ConfigError> {
    config.validate()?;

    let count = config.gears.len();
    let size_scale = if count > BASE_GEAR_COUNT {
        BASE_GEAR_COUNT as f64 / count as f64
    } else {
        1.0
    };

    let cell_size = (config.gear_size * size_scale).round();
    let connector_thickness = (config.connecting_line_thickness * size_scale).round().max(4.0);
    let margin = (config.gear_margin * size_scale).round().max(1.0);
    let active_font = (config.active_font_size * size_scale).round();
    let inactive_font = (config.inactive_font_size * size_scale).round();

    // Cells are spaced along the strip axis and centered on the
    // container center.
    let pitch = cell_size + 2.0 * margin;
    let strip_length = pitch * count as f64;
    let first_center = -strip_length / 2.0 + margin + cell_size / 2.0;

    let at = |offset: f64| match config.orientation {
        GearOrientation::Portrait => Point { x: 0.0, y: offset },
        GearOrientation::Landscape => Point { x: offset, y: 0.0 },
    };

    let cells: Vec<GearCell> = config
        .gears
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let is_active = *label == config.current_gear;
            GearCell {
                label: label.clone(),
                is_active,
                size: cell_size,
                font_size: if is_active { active_font } else { inactive_font },
                fill: if is_active { Some(theme.readout) } else { None },
                text_color: if is_active {
                    theme.background
                } else {
                    theme.numbers
                },
                center: at(first_center + i as f64 * pitch),
            }
        })
        .collect();

    let connectors = (0..count.saturating_sub(1))
        .map(|i| {
            let from_offset = first_center + i as f64 * pitch + cell_size / 2.0;
            let to_offset = first_center + (i + 1) as f64 * pitch - cell_size / 2.0;
            GearConnector {
                from: at(from_offset),
                to: at(to_offset),
                thickness: connector_thickness,
            }
        })
        .collect();

    let aspect_ratio = match config.orientation {
        GearOrientation::Landscape => 2.5,
        GearOrientation::Portrait => 1.0 / 2.5,
    };

    Ok(GearLayout {
        cells,
        connectors,
        aspect_ratio,
        size_scale,
        corner_radius: config.corner_radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_gear_list_rejected() {
        let config = GearSelectorConfig::new(Vec::new(), "P");
        assert_eq!(
            layout(&config, &GaugeTheme::dark()),
            Err(ConfigError::EmptyGearList)
        );
    }

    #[test]
    fn test_base_count_keeps_stock_sizes() {
        let config = GearSelectorConfig::automatic("D");
        let layout = layout(&config, &GaugeTheme::dark()).unwrap();
        assert_eq!(layout.size_scale, 1.0);
        assert_eq!(layout.cells.len(), 4);
        assert_eq!(layout.cells[0].size, 45.0);
        assert_eq!(layout.connectors.len(), 3);
    }

    #[test]
    fn test_six_speed_scales_down() {
        let gears = ["1", "2", "3", "4", "5", "6"].map(String::from).to_vec();
        let config = GearSelectorConfig::new(gears, "3");
        let layout = layout(&config, &GaugeTheme::dark()).unwrap();
        assert!((layout.size_scale - 4.0 / 6.0).abs() < 1e-9);
        assert_eq!(layout.cells[0].size, 30.0);
        // Thickness floors at 4 even when scaling would go lower.
        assert!(layout.connectors.iter().all(|c| c.thickness >= 4.0));
    }

    #[test]
    fn test_active_cell_styling() {
        let config = GearSelectorConfig::automatic("R");
        let theme = GaugeTheme::dark();
        let layout = layout(&config, &theme).unwrap();
        let active: Vec<_> = layout.cells.iter().filter(|c| c.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "R");
        assert_eq!(active[0].fill, Some(theme.readout));
        assert!(active[0].font_size > layout.cells[0].font_size);
    }

    #[test]
    fn test_unknown_current_gear_is_not_active() {
        let config = GearSelectorConfig::automatic("5");
        let layout = layout(&config, &GaugeTheme::dark()).unwrap();
        assert!(layout.cells.iter().all(|c| !c.is_active));
    }
}
