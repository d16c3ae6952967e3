//! Tests for the gear selector layout

use dashgauge_core::gear::{layout, GearLayout, GearOrientation, GearSelectorConfig};
use dashgauge_core::theme::GaugeTheme;

#[test]
fn test_portrait_cells_stack_vertically() {
    let config = GearSelectorConfig::automatic("N");
    let result = layout(&config, &GaugeTheme::dark()).unwrap();

    assert!((result.aspect_ratio - 0.4).abs() < 1e-9);
    assert!(result.cells.iter().all(|c| c.center.x == 0.0));

    let ys: Vec<f64> = result.cells.iter().map(|c| c.center.y).collect();
    let mut sorted = ys.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(ys, sorted, "cells should run top to bottom");

    // The strip is centered on the container.
    let sum: f64 = ys.iter().sum();
    assert!(sum.abs() < 1e-9);
}

#[test]
fn test_landscape_flips_axis_and_aspect() {
    let mut config = GearSelectorConfig::automatic("D");
    config.orientation = GearOrientation::Landscape;
    let result = layout(&config, &GaugeTheme::dark()).unwrap();

    assert!((result.aspect_ratio - 2.5).abs() < 1e-9);
    assert!(result.cells.iter().all(|c| c.center.y == 0.0));
}

#[test]
fn test_connectors_join_adjacent_cells() {
    let config = GearSelectorConfig::automatic("P");
    let result = layout(&config, &GaugeTheme::dark()).unwrap();

    assert_eq!(result.connectors.len(), result.cells.len() - 1);
    for (i, connector) in result.connectors.iter().enumerate() {
        let gap_start = result.cells[i].center.y + result.cells[i].size / 2.0;
        let gap_end = result.cells[i + 1].center.y - result.cells[i + 1].size / 2.0;
        assert!((connector.from.y - gap_start).abs() < 1e-9);
        assert!((connector.to.y - gap_end).abs() < 1e-9);
    }
}

#[test]
fn test_manual_box_with_reverse() {
    let gears = ["R", "1", "2", "3", "4", "5", "6"].map(String::from).to_vec();
    let config = GearSelectorConfig::new(gears, "2");
    let result = layout(&config, &GaugeTheme::dark()).unwrap();

    assert_eq!(result.cells.len(), 7);
    assert!((result.size_scale - 4.0 / 7.0).abs() < 1e-9);
    assert_eq!(
        result.cells.iter().filter(|c| c.is_active).count(),
        1
    );
    assert!(result.cells[2].is_active);
}

#[test]
fn test_layout_serializes() {
    let config = GearSelectorConfig::automatic("D");
    let result = layout(&config, &GaugeTheme::dark()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let parsed: GearLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}
