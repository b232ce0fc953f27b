use super::{demo_content_insets, run};
use crate::controller::DemoController;
use crate::options::DemoOptions;
use crate::scroll_view::ScrollView;
use waterflow_layout::{IndexPath, WaterfallLayout};
use waterflow_ui_graphics::Size;

#[test]
fn default_demo_runs_to_completion() {
    let options = DemoOptions::default();
    let summary = run(&options).unwrap();

    assert_eq!(summary.content_size.width, 375.0);
    assert!(summary.content_size.height > options.viewport);
    assert!(summary.pages >= 2);
    // every cell is drawn at least once while scrolling the whole content
    assert!(summary.cells_drawn >= 90);
    assert!(summary.headers_drawn >= 3);
    assert!(summary.appended_content_size.height > summary.reloaded_content_size.height);
}

#[test]
fn non_positive_viewport_is_rejected() {
    let options = DemoOptions {
        viewport: 0.0,
        ..DemoOptions::default()
    };
    assert!(run(&options).is_err());
}

#[test]
fn first_cell_sits_below_insets_and_header() {
    let controller = DemoController::new(2024, 3, 30).with_header_height(20.0);
    let mut layout = WaterfallLayout::new(375.0).with_content_insets(demo_content_insets());
    layout.prepare_layout(&controller).unwrap();

    let first = layout.layout_attributes(IndexPath::new(0, 0)).unwrap();
    assert_eq!(first.frame.x, 10.0);
    assert_eq!(first.frame.y, 40.0);
    assert_eq!(first.frame.width, 177.5);
}

#[test]
fn scroll_view_clamps_to_content() {
    let content = Size::new(375.0, 1000.0);
    let mut scroll_view = ScrollView::new(Size::new(375.0, 400.0));

    assert_eq!(scroll_view.scroll_by(-50.0, content), 0.0);
    assert_eq!(scroll_view.scroll_by(450.0, content), 450.0);
    assert!(scroll_view.can_scroll_forward(content));
    assert_eq!(scroll_view.scroll_by(450.0, content), 150.0);
    assert_eq!(scroll_view.offset(), 600.0);
    assert!(!scroll_view.can_scroll_forward(content));
    assert_eq!(scroll_view.visible_rect().y, 600.0);
}

#[test]
fn short_content_never_scrolls() {
    let content = Size::new(375.0, 100.0);
    let mut scroll_view = ScrollView::new(Size::new(375.0, 400.0));
    assert_eq!(scroll_view.max_offset(content), 0.0);
    assert_eq!(scroll_view.scroll_by(100.0, content), 0.0);
}
