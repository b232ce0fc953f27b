//! Assertion utilities for layout tests
//!
//! Helpers that check the structural guarantees of a prepared
//! [`WaterfallLayout`]: frames fit their columns and never overlap within a
//! column.

use waterflow_layout::{IndexPath, ItemLayoutAttributes, WaterfallLayout};
use waterflow_ui_graphics::Rect;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Collects the attributes of every item in `section`, in item order.
pub fn section_items(layout: &WaterfallLayout, section: usize) -> Vec<ItemLayoutAttributes> {
    let count = layout
        .number_of_items(section)
        .unwrap_or_else(|err| panic!("section {section}: {err}"));
    (0..count)
        .map(|item| {
            layout
                .layout_attributes(IndexPath::new(section, item))
                .unwrap_or_else(|err| panic!("item {section} - {item}: {err}"))
        })
        .collect()
}

/// Assert that no two items of a section share vertical space in one column.
pub fn assert_no_column_overlap(layout: &WaterfallLayout, section: usize) {
    let items = section_items(layout, section);
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if a.column != b.column {
                continue;
            }
            let overlaps = a.frame.y < b.frame.max_y() && b.frame.y < a.frame.max_y();
            assert!(
                !overlaps,
                "items {} {:?} and {} {:?} overlap in column {}",
                a.index_path, a.frame, b.index_path, b.frame, a.column
            );
        }
    }
}

/// Assert that every item of a section lies inside its column's x range and
/// inside the container.
pub fn assert_within_columns(layout: &WaterfallLayout, section: usize) {
    let column_width = layout
        .column_width(section)
        .unwrap_or_else(|err| panic!("section {section}: {err}"));
    let items = section_items(layout, section);
    let container = layout.container_width();
    for item in &items {
        assert_approx_eq(
            item.frame.width,
            column_width,
            1e-3,
            &format!("item {} width", item.index_path),
        );
        assert!(
            item.frame.x >= -1e-3 && item.frame.max_x() <= container + 1e-3,
            "item {} {:?} leaves container width {}",
            item.index_path,
            item.frame,
            container
        );
    }
    // Same column implies same x; different columns never overlap horizontally.
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if a.column == b.column {
                assert_approx_eq(
                    a.frame.x,
                    b.frame.x,
                    1e-3,
                    &format!("column {} x", a.column),
                );
            } else {
                let overlaps =
                    a.frame.x < b.frame.max_x() - 1e-3 && b.frame.x < a.frame.max_x() - 1e-3;
                assert!(
                    !overlaps,
                    "columns {} and {} overlap horizontally",
                    a.column, b.column
                );
            }
        }
    }
}
