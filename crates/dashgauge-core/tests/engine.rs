//! Tests for gauge layout evaluation

use dashgauge_core::prelude::*;

fn theme_for(config: &GaugeConfig) -> GaugeTheme {
    GaugeTheme::for_kind(&config.kind)
}

#[test]
fn test_battery_needle_angle_scenario() {
    // 10-16 V half-circle: 12 V sits a third of the way around.
    let config = GaugeConfig::battery();
    let layout = evaluate(&config, 12.0, &ZoneThresholds::none(), &theme_for(&config)).unwrap();
    assert!(
        (layout.needle.angle_deg - 240.0).abs() < 1e-9,
        "expected 240°, got {}",
        layout.needle.angle_deg
    );
}

#[test]
fn test_needle_angle_is_monotonic() {
    let config = GaugeConfig::speed(SpeedUnit::Mph);
    let mut last = f64::NEG_INFINITY;
    for step in 0..=100 {
        let value = 200.0 * step as f64 / 100.0;
        let angle = needle_angle(
            value,
            config.min_value,
            config.max_value,
            config.arc_start_angle_deg,
            config.sweep_deg,
        );
        assert!(angle >= last, "angle regressed at value {value}");
        last = angle;
    }
    assert_eq!(
        needle_angle(0.0, 0.0, 200.0, -225.0, 270.0),
        config.arc_start_angle_deg
    );
    assert_eq!(
        needle_angle(200.0, 0.0, 200.0, -225.0, 270.0),
        config.arc_start_angle_deg + config.sweep_deg
    );
}

#[test]
fn test_out_of_range_values_clamp() {
    let config = GaugeConfig::battery();
    let theme = theme_for(&config);
    let thresholds = ZoneThresholds::none();

    let at_min = evaluate(&config, 10.0, &thresholds, &theme).unwrap();
    let below = evaluate(&config, 8.5, &thresholds, &theme).unwrap();
    assert_eq!(below.needle.angle_deg, at_min.needle.angle_deg);

    let at_max = evaluate(&config, 16.0, &thresholds, &theme).unwrap();
    let above = evaluate(&config, 19.0, &thresholds, &theme).unwrap();
    assert_eq!(above.needle.angle_deg, at_max.needle.angle_deg);

    // The readout still shows the raw reading.
    assert_eq!(below.digital.text, "8.5");
    assert_eq!(above.digital.text, "19.0");
}

#[test]
fn test_speed_readout_shows_raw_value() {
    let config = GaugeConfig::speed(SpeedUnit::Kph);
    let layout = evaluate(&config, 250.0, &ZoneThresholds::none(), &theme_for(&config)).unwrap();
    assert_eq!(layout.digital.text, "250");
    assert_eq!(layout.digital.unit_label, "kph");
    // Needle pinned to the end of the arc.
    assert!((layout.needle.angle_deg - 45.0).abs() < 1e-9);
}

#[test]
fn test_fuel_readout_in_litres() {
    let config = GaugeConfig::fuel(FuelUnit::Litres, Some(60.0));
    let layout = evaluate(&config, 45.0, &ZoneThresholds::none(), &theme_for(&config)).unwrap();
    assert_eq!(layout.digital.text, "27.0L");
    assert_eq!(layout.digital.unit_label, "L");
}

#[test]
fn test_fuel_readout_falls_back_to_percent_without_capacity() {
    let config = GaugeConfig::fuel(FuelUnit::Litres, None);
    let layout = evaluate(&config, 45.0, &ZoneThresholds::none(), &theme_for(&config)).unwrap();
    assert_eq!(layout.digital.text, "45%");
}

#[test]
fn test_low_fuel_readout_warns() {
    let config = GaugeConfig::fuel(FuelUnit::Percentage, None);
    let theme = theme_for(&config);

    let low = evaluate(&config, 20.0, &ZoneThresholds::none(), &theme).unwrap();
    assert_eq!(low.digital.color, theme.warning);

    let ok = evaluate(&config, 60.0, &ZoneThresholds::none(), &theme).unwrap();
    assert_eq!(ok.digital.color, theme.readout);
}

#[test]
fn test_half_circle_arc_geometry() {
    let config = GaugeConfig::battery();
    let layout = evaluate(&config, 12.0, &ZoneThresholds::none(), &theme_for(&config)).unwrap();
    let arc = layout.arc;

    // Start at 9 o'clock, end at 3 o'clock, on the baseline.
    assert!((arc.start_point.x - (150.0 - config.radius)).abs() < 1e-9);
    assert!((arc.start_point.y - 150.0).abs() < 1e-9);
    assert!((arc.end_point.x - (150.0 + config.radius)).abs() < 1e-9);
    assert!((arc.end_point.y - 150.0).abs() < 1e-9);
    assert_eq!(arc.large_arc_flag, 1);
    assert_eq!(arc.sweep_flag, 1);
}

#[test]
fn test_svg_paths() {
    let config = GaugeConfig::battery();
    let layout = evaluate(&config, 13.0, &ZoneThresholds::none(), &theme_for(&config)).unwrap();

    let arc_path = layout.arc.svg_path();
    assert!(arc_path.starts_with("M "), "arc path: {arc_path}");
    assert!(arc_path.contains(" A "), "arc path: {arc_path}");

    let needle_path = layout.needle.svg_path();
    assert!(needle_path.starts_with("M "), "needle path: {needle_path}");
    assert!(needle_path.ends_with(" Z"), "needle path: {needle_path}");
}

#[test]
fn test_canvas_sizes() {
    let full = GaugeConfig::rpm();
    let layout = evaluate(&full, 3000.0, &ZoneThresholds::none(), &theme_for(&full)).unwrap();
    assert_eq!(layout.canvas.width, 300.0);
    assert_eq!(layout.canvas.height, 300.0);

    // Half-circle canvas grows by the padding below the baseline.
    let half = GaugeConfig::battery();
    let layout = evaluate(&half, 12.0, &ZoneThresholds::none(), &theme_for(&half)).unwrap();
    assert_eq!(layout.canvas.width, 300.0);
    assert!((layout.canvas.height - 172.5).abs() < 1e-9);
}

#[test]
fn test_evaluation_is_deterministic() {
    let config = GaugeConfig::temperature(TemperatureUnit::Celsius);
    let thresholds = ZoneThresholds::both(0.0, 100.0);
    let theme = theme_for(&config);

    let first = evaluate(&config, 88.0, &thresholds, &theme).unwrap();
    let second = evaluate(&config, 88.0, &thresholds, &theme).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_config_rejected_before_layout() {
    let mut config = GaugeConfig::battery();
    config.min_value = 16.0;
    config.max_value = 10.0;
    let err = evaluate(&config, 12.0, &ZoneThresholds::none(), &GaugeTheme::dark()).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidRange {
            min: 16.0,
            max: 10.0
        }
    );
}

#[test]
fn test_layout_serializes() {
    let config = GaugeConfig::battery();
    let layout = evaluate(&config, 12.0, &ZoneThresholds::low(11.5), &theme_for(&config)).unwrap();
    let json = serde_json::to_string(&layout).unwrap();
    let parsed: GaugeLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, layout);
}
