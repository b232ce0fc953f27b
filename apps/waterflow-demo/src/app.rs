//! Demo flow: prepare, scroll, reload, append.

use anyhow::{ensure, Context, Result};
use waterflow_layout::{LayoutElement, WaterfallLayout};
use waterflow_ui_graphics::{EdgeInsets, Size};

use crate::controller::DemoController;
use crate::options::DemoOptions;
use crate::scroll_view::ScrollView;

/// Counts gathered while the demo runs, for logging and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoSummary {
    pub content_size: Size,
    pub pages: usize,
    pub cells_drawn: usize,
    pub headers_drawn: usize,
    pub reloaded_content_size: Size,
    pub appended_content_size: Size,
}

/// Content insets of the demo screen.
pub fn demo_content_insets() -> EdgeInsets {
    EdgeInsets::top_left_bottom_right(20.0, 10.0, 30.0, 10.0)
}

pub fn run(options: &DemoOptions) -> Result<DemoSummary> {
    ensure!(
        options.viewport > 0.0,
        "viewport height must be positive, got {}",
        options.viewport
    );

    let mut controller = DemoController::new(options.seed, options.sections, options.items)
        .with_header_height(options.header_height);
    let mut layout = WaterfallLayout::new(options.width).with_content_insets(demo_content_insets());

    layout
        .prepare_layout(&controller)
        .context("initial layout pass")?;
    let content_size = layout.content_extent();
    log::info!(
        "prepared {} sections, {} items, content {}x{}",
        controller.section_count(),
        controller.total_items(),
        content_size.width,
        content_size.height
    );

    let mut summary = DemoSummary {
        content_size,
        ..DemoSummary::default()
    };
    scroll_through(&layout, &controller, options, &mut summary);

    controller.reload_data();
    layout.invalidate_layout();
    layout
        .prepare_layout(&controller)
        .context("layout pass after reload")?;
    summary.reloaded_content_size = layout.content_extent();
    log::info!(
        "after reload content height {}",
        summary.reloaded_content_size.height
    );

    if let Some(last) = controller.section_count().checked_sub(1) {
        controller.append_items(last, options.append);
        layout
            .prepare_layout(&controller)
            .context("incremental layout pass")?;
    }
    summary.appended_content_size = layout.content_extent();
    log::info!(
        "after appending {} items content height {}",
        options.append,
        summary.appended_content_size.height
    );

    Ok(summary)
}

fn scroll_through(
    layout: &WaterfallLayout,
    controller: &DemoController,
    options: &DemoOptions,
    summary: &mut DemoSummary,
) {
    let content = layout.content_extent();
    let mut scroll_view = ScrollView::new(Size::new(options.width, options.viewport));
    loop {
        let elements = scroll_view.visible_elements(layout);
        log::info!(
            "page {} at offset {}: {} elements",
            summary.pages,
            scroll_view.offset(),
            elements.len()
        );
        for element in &elements {
            match element {
                LayoutElement::Header(header) => {
                    summary.headers_drawn += 1;
                    log::debug!("  header {} at {:?}", header.section, header.frame);
                }
                LayoutElement::Item(item) => {
                    summary.cells_drawn += 1;
                    if let Some(content) = controller.cell_content(item.index_path) {
                        log::debug!(
                            "  cell [{}] {} at {:?}",
                            content.label,
                            content.color,
                            item.frame
                        );
                    }
                }
            }
        }
        summary.pages += 1;

        if !scroll_view.can_scroll_forward(content) {
            break;
        }
        scroll_view.scroll_by(options.viewport, content);
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
