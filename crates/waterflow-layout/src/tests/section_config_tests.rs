use super::SectionConfig;
use waterflow_ui_graphics::EdgeInsets;

#[test]
fn default_is_single_column_without_spacing() {
    let config = SectionConfig::default();
    assert_eq!(config.columns, 1);
    assert_eq!(config.x_spacing, 0.0);
    assert_eq!(config.y_spacing, 0.0);
    assert!(config.insets.is_zero());
}

#[test]
fn zero_columns_normalize_to_one() {
    let config = SectionConfig::new(0).normalized();
    assert_eq!(config.columns, 1);
}

#[test]
fn negative_and_nan_spacing_normalize_to_zero() {
    let config = SectionConfig::new(3)
        .with_x_spacing(-2.0)
        .with_y_spacing(f32::NAN)
        .with_insets(EdgeInsets::from_components(-1.0, 4.0, 2.0, -8.0))
        .normalized();
    assert_eq!(config.columns, 3);
    assert_eq!(config.x_spacing, 0.0);
    assert_eq!(config.y_spacing, 0.0);
    assert_eq!(
        config.insets,
        EdgeInsets::from_components(0.0, 4.0, 2.0, 0.0)
    );
}

#[test]
fn valid_config_is_unchanged_by_normalization() {
    let config = SectionConfig::new(4)
        .with_x_spacing(5.0)
        .with_y_spacing(10.0);
    assert_eq!(config.normalized(), config);
}

#[test]
fn column_width_subtracts_insets_and_gaps() {
    // (300 - 10 - 10 - 2 * 5) / 3 = 90
    let config = SectionConfig::new(3)
        .with_x_spacing(5.0)
        .with_insets(EdgeInsets::horizontal(10.0));
    assert_eq!(config.column_width(300.0), 90.0);
    assert_eq!(config.effective_x_spacing(300.0), 5.0);
    assert_eq!(config.column_x(0, 300.0), 10.0);
    assert_eq!(config.column_x(2, 300.0), 10.0 + 2.0 * 95.0);
}

#[test]
fn column_width_never_negative() {
    let config = SectionConfig::new(4).with_x_spacing(50.0);
    assert_eq!(config.column_width(100.0), 0.0);
}

#[test]
fn oversized_gaps_shrink_to_fit_the_section() {
    // 3 columns with 80pt gaps cannot fit in 100pt
    let config = SectionConfig::new(3).with_x_spacing(80.0);
    assert_eq!(config.column_width(100.0), 0.0);
    assert_eq!(config.effective_x_spacing(100.0), 50.0);
    assert_eq!(config.column_x(1, 100.0), 50.0);
    assert_eq!(config.column_x(2, 100.0), 100.0);
}

#[test]
fn single_column_keeps_requested_spacing() {
    let config = SectionConfig::new(1).with_x_spacing(500.0);
    assert_eq!(config.effective_x_spacing(100.0), 500.0);
    assert_eq!(config.column_x(0, 100.0), 0.0);
    assert_eq!(config.column_width(100.0), 100.0);
}
