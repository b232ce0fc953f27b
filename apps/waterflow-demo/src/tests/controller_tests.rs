use super::{CellColor, DemoController};
use waterflow_layout::{IndexPath, WaterfallDelegate};

#[test]
fn section_configs_widen_with_section_index() {
    let controller = DemoController::new(1, 3, 30);
    for section in 0..3 {
        let config = controller.config_for_section(section).unwrap();
        assert_eq!(config.columns, section + 2);
        assert_eq!(config.x_spacing, 5.0 * section as f32);
        assert_eq!(config.y_spacing, 10.0);
    }
}

#[test]
fn heights_stay_within_demo_range() {
    let controller = DemoController::new(9, 3, 30);
    for section in 0..3 {
        for item in 0..30 {
            let height = controller.height_for_item(IndexPath::new(section, item));
            assert!((23.0..=70.0).contains(&height), "height {height}");
        }
    }
}

#[test]
fn same_seed_reproduces_data() {
    let a = DemoController::new(5, 2, 10);
    let b = DemoController::new(5, 2, 10);
    for item in 0..10 {
        let path = IndexPath::new(1, item);
        assert_eq!(a.height_for_item(path), b.height_for_item(path));
        assert_eq!(a.cell_content(path), b.cell_content(path));
    }
}

#[test]
fn cell_content_labels_by_index_path() {
    let controller = DemoController::new(0, 1, 2);
    let content = controller.cell_content(IndexPath::new(0, 1)).unwrap();
    assert_eq!(content.label, "0 - 1");
    assert!(CellColor::ALL.contains(&content.color));
    assert!(controller.cell_content(IndexPath::new(0, 2)).is_none());
    assert!(controller.cell_content(IndexPath::new(4, 0)).is_none());
}

#[test]
fn zero_header_height_means_no_header() {
    let without = DemoController::new(0, 1, 1).with_header_height(0.0);
    let with = DemoController::new(0, 1, 1).with_header_height(20.0);
    assert_eq!(
        without.height_for_supplementary_view(IndexPath::new(0, 0)),
        None
    );
    assert_eq!(
        with.height_for_supplementary_view(IndexPath::new(0, 0)),
        Some(20.0)
    );
}

#[test]
fn reload_keeps_counts_and_appends_grow_sections() {
    let mut controller = DemoController::new(3, 3, 30);
    controller.reload_data();
    assert_eq!(controller.total_items(), 90);
    controller.append_items(2, 5);
    assert_eq!(controller.number_of_items(2), 35);
    assert_eq!(controller.number_of_sections(), 3);
}
