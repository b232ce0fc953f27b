//! Cached layout state of one section.
//!
//! Item frames are stored relative to the section's top edge. Restacking
//! sections after an append or a per-section rebuild only moves `top`; the
//! cached frames stay untouched.

use crate::{
    ColumnTracker, HeaderLayoutAttributes, IndexPath, ItemLayoutAttributes, SectionConfig,
};
use waterflow_ui_graphics::Rect;

#[derive(Clone, Debug)]
pub(crate) struct SectionLayout {
    section: usize,
    config: SectionConfig,
    /// Left edge of the section (content inset).
    origin_x: f32,
    /// Width the section spans, before its own insets.
    available_width: f32,
    column_width: f32,
    header_height: Option<f32>,
    tracker: ColumnTracker,
    /// Section-relative frames, in item order.
    items: Vec<ItemLayoutAttributes>,
    /// Absolute Y of the section's top edge.
    top: f32,
}

impl SectionLayout {
    /// Creates an empty section. `config` must already be normalized.
    pub(crate) fn new(
        section: usize,
        config: SectionConfig,
        origin_x: f32,
        available_width: f32,
        header_height: Option<f32>,
    ) -> Self {
        let column_width = config.column_width(available_width);
        Self {
            section,
            config,
            origin_x,
            available_width,
            column_width,
            header_height,
            tracker: ColumnTracker::new(config.columns, config.insets.top),
            items: Vec::new(),
            top: 0.0,
        }
    }

    #[inline]
    pub(crate) fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn column_width(&self) -> f32 {
        self.column_width
    }

    #[inline]
    pub(crate) fn top(&self) -> f32 {
        self.top
    }

    #[inline]
    pub(crate) fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    /// Header, top inset, columns and bottom inset.
    pub(crate) fn extent(&self) -> f32 {
        self.header_height.unwrap_or(0.0) + self.tracker.max_height() + self.config.insets.bottom
    }

    pub(crate) fn bottom(&self) -> f32 {
        self.top + self.extent()
    }

    /// Places the next item in the shortest column.
    pub(crate) fn append_item(&mut self, item_height: f32) {
        let index_path = IndexPath::new(self.section, self.items.len());
        let column = self.tracker.shortest_column_index();
        let y_spacing = self.config.y_spacing;
        let column_top = self.tracker.place(column, item_height, y_spacing);
        let frame = Rect::new(
            self.origin_x + self.config.column_x(column, self.available_width),
            self.header_height.unwrap_or(0.0) + column_top,
            self.column_width,
            item_height,
        );
        log::trace!(
            "WaterfallLayout: item {} -> column {} at y {}",
            index_path,
            column,
            frame.y
        );
        self.items
            .push(ItemLayoutAttributes::new(index_path, column, frame));
    }

    /// Absolute attributes of `item`.
    pub(crate) fn item(&self, item: usize) -> Option<ItemLayoutAttributes> {
        self.items
            .get(item)
            .map(|attributes| attributes.translated(self.top))
    }

    pub(crate) fn header(&self) -> Option<HeaderLayoutAttributes> {
        self.header_height.map(|height| HeaderLayoutAttributes {
            section: self.section,
            frame: Rect::new(
                self.origin_x + self.config.insets.left,
                self.top + self.config.insets.top,
                (self.available_width - self.config.insets.horizontal_sum()).max(0.0),
                height,
            ),
        })
    }

    /// Absolute attributes of every item, in item order.
    pub(crate) fn items(&self) -> impl Iterator<Item = ItemLayoutAttributes> + '_ {
        self.items
            .iter()
            .map(move |attributes| attributes.translated(self.top))
    }
}
