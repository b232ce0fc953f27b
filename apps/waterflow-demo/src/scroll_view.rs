//! Minimal stand-in for a host scroll view.
//!
//! Tracks a vertical scroll offset over the layout's content extent and asks
//! the layout which headers and cells fall inside the visible rectangle.

use waterflow_layout::{LayoutElement, WaterfallLayout};
use waterflow_ui_graphics::{Point, Rect, Size};

/// A viewport that scrolls vertically over a [`WaterfallLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollView {
    viewport: Size,
    offset: f32,
}

impl ScrollView {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            offset: 0.0,
        }
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Largest offset that still keeps the viewport inside the content.
    pub fn max_offset(&self, content: Size) -> f32 {
        (content.height - self.viewport.height).max(0.0)
    }

    /// Scrolls by `delta`, clamped to the content bounds.
    /// Returns the distance actually scrolled.
    pub fn scroll_by(&mut self, delta: f32, content: Size) -> f32 {
        let target = (self.offset + delta).clamp(0.0, self.max_offset(content));
        let consumed = target - self.offset;
        self.offset = target;
        consumed
    }

    pub fn can_scroll_forward(&self, content: Size) -> bool {
        self.offset < self.max_offset(content)
    }

    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(0.0, self.offset), self.viewport)
    }

    /// Headers and cells to draw at the current offset.
    pub fn visible_elements(&self, layout: &WaterfallLayout) -> Vec<LayoutElement> {
        layout.layout_attributes_in_rect(self.visible_rect())
    }
}
