//! The waterfall layout engine.
//!
//! [`WaterfallLayout`] asks a [`WaterfallDelegate`] for counts, heights and
//! section configs, places every item into the currently shortest column of
//! its section and stacks sections vertically in index order.
//!
//! # Lifecycle
//!
//! 1. [`prepare_layout`](WaterfallLayout::prepare_layout) computes frames.
//! 2. Queries ([`layout_attributes`](WaterfallLayout::layout_attributes),
//!    [`content_extent`](WaterfallLayout::content_extent), ...) read the cache.
//! 3. [`invalidate_layout`](WaterfallLayout::invalidate_layout) or
//!    [`invalidate_section`](WaterfallLayout::invalidate_section) drop cached
//!    state; queries fail with [`LayoutError::NotPrepared`] until the next
//!    pass.
//!
//! A pass on a clean, prepared layout is incremental: only items appended
//! since the previous pass are queried and placed.

use std::collections::BTreeSet;

use crate::section_layout::SectionLayout;
use crate::{
    HeaderLayoutAttributes, IndexPath, ItemLayoutAttributes, LayoutElement, LayoutError,
    WaterfallDelegate,
};
use waterflow_ui_graphics::{EdgeInsets, Rect, Size};

/// Multi-section waterfall (masonry) layout.
#[derive(Clone, Debug)]
pub struct WaterfallLayout {
    container_width: f32,
    content_insets: EdgeInsets,
    sections: Vec<SectionLayout>,
    /// Sections to rebuild on the next pass.
    stale_sections: BTreeSet<usize>,
    prepared: bool,
}

impl Default for WaterfallLayout {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl WaterfallLayout {
    /// Creates an unprepared layout for a container of the given width.
    pub fn new(container_width: f32) -> Self {
        Self {
            container_width: sanitize_width(container_width),
            content_insets: EdgeInsets::ZERO,
            sections: Vec::new(),
            stale_sections: BTreeSet::new(),
            prepared: false,
        }
    }

    /// Sets padding applied once around all sections.
    pub fn with_content_insets(mut self, insets: EdgeInsets) -> Self {
        self.set_content_insets(insets);
        self
    }

    #[inline]
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    #[inline]
    pub fn content_insets(&self) -> EdgeInsets {
        self.content_insets
    }

    /// Whether cached frames are valid for querying.
    #[inline]
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Updates the container width. Returns true if the layout was invalidated.
    pub fn set_container_width(&mut self, width: f32) -> bool {
        let width = sanitize_width(width);
        if width == self.container_width {
            return false;
        }
        log::debug!(
            "WaterfallLayout: container width {} -> {}, invalidating",
            self.container_width,
            width
        );
        self.container_width = width;
        self.invalidate_layout();
        true
    }

    /// Updates the content insets. Returns true if the layout was invalidated.
    pub fn set_content_insets(&mut self, insets: EdgeInsets) -> bool {
        let insets = insets.clamped_non_negative();
        if insets == self.content_insets {
            return false;
        }
        self.content_insets = insets;
        self.invalidate_layout();
        true
    }

    /// Drops all cached state. The next pass recomputes everything.
    pub fn invalidate_layout(&mut self) {
        self.sections.clear();
        self.stale_sections.clear();
        self.prepared = false;
    }

    /// Marks one section for rebuilding.
    ///
    /// The next pass re-queries that section's config, header and item
    /// heights, and restacks later sections without re-querying them.
    /// Sections that were never laid out are ignored.
    pub fn invalidate_section(&mut self, section: usize) {
        if section < self.sections.len() {
            self.stale_sections.insert(section);
            self.prepared = false;
        }
    }

    /// Computes frames for every section and item the delegate reports.
    ///
    /// On a clean, prepared layout only new items and sections are queried.
    /// A section whose item count shrank, or that was invalidated, is rebuilt.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidItemHeight`] or
    /// [`LayoutError::InvalidHeaderHeight`] when the delegate violates its
    /// contract. The layout is left fully invalidated in that case.
    pub fn prepare_layout<D>(&mut self, delegate: &D) -> Result<(), LayoutError>
    where
        D: WaterfallDelegate + ?Sized,
    {
        match self.layout_sections(delegate) {
            Ok(placed) => {
                self.stale_sections.clear();
                self.prepared = true;
                log::debug!(
                    "WaterfallLayout: prepared {} sections ({} items placed), content height {}",
                    self.sections.len(),
                    placed,
                    self.content_extent().height
                );
                Ok(())
            }
            Err(err) => {
                log::error!("WaterfallLayout: layout pass aborted: {err}");
                self.invalidate_layout();
                Err(err)
            }
        }
    }

    /// Runs one pass and returns the number of items placed.
    fn layout_sections<D>(&mut self, delegate: &D) -> Result<usize, LayoutError>
    where
        D: WaterfallDelegate + ?Sized,
    {
        let section_count = delegate.number_of_sections();
        self.sections.truncate(section_count);

        let origin_x = self.content_insets.left;
        let available_width =
            (self.container_width - self.content_insets.horizontal_sum()).max(0.0);
        let mut placed = 0;

        for section in 0..section_count {
            let item_count = delegate.number_of_items(section);
            let rebuild = match self.sections.get(section) {
                None => true,
                Some(existing) => {
                    self.stale_sections.contains(&section) || existing.item_count() > item_count
                }
            };

            if rebuild {
                let layout = build_section(delegate, section, origin_x, available_width)?;
                if section < self.sections.len() {
                    self.sections[section] = layout;
                } else {
                    self.sections.push(layout);
                }
            }

            let layout = &mut self.sections[section];
            for item in layout.item_count()..item_count {
                let height = item_height(delegate, IndexPath::new(section, item))?;
                layout.append_item(height);
                placed += 1;
            }
        }

        self.restack();
        Ok(placed)
    }

    fn restack(&mut self) {
        let mut top = self.content_insets.top;
        for section in &mut self.sections {
            section.set_top(top);
            top = section.bottom();
        }
    }

    fn section_layout(&self, section: usize) -> Result<&SectionLayout, LayoutError> {
        if !self.prepared {
            return Err(LayoutError::NotPrepared);
        }
        self.sections
            .get(section)
            .ok_or(LayoutError::SectionOutOfRange {
                section,
                section_count: self.sections.len(),
            })
    }

    /// Number of sections laid out by the last pass.
    pub fn number_of_sections(&self) -> Result<usize, LayoutError> {
        if !self.prepared {
            return Err(LayoutError::NotPrepared);
        }
        Ok(self.sections.len())
    }

    /// Number of items laid out in `section` by the last pass.
    pub fn number_of_items(&self, section: usize) -> Result<usize, LayoutError> {
        Ok(self.section_layout(section)?.item_count())
    }

    /// Width of one column in `section`.
    pub fn column_width(&self, section: usize) -> Result<f32, LayoutError> {
        Ok(self.section_layout(section)?.column_width())
    }

    /// Cached frame of the item at `index_path`.
    pub fn layout_attributes(
        &self,
        index_path: IndexPath,
    ) -> Result<ItemLayoutAttributes, LayoutError> {
        let layout = self.section_layout(index_path.section)?;
        layout
            .item(index_path.item)
            .ok_or(LayoutError::ItemOutOfRange {
                index_path,
                item_count: layout.item_count(),
            })
    }

    /// Frame of the header above `section`'s items.
    pub fn header_attributes(&self, section: usize) -> Result<HeaderLayoutAttributes, LayoutError> {
        self.section_layout(section)?
            .header()
            .ok_or(LayoutError::NoHeader { section })
    }

    /// Vertical span `(top, bottom)` of `section`, header and insets included.
    pub fn section_bounds(&self, section: usize) -> Result<(f32, f32), LayoutError> {
        let layout = self.section_layout(section)?;
        Ok((layout.top(), layout.bottom()))
    }

    /// Every header and item whose frame intersects `rect`.
    ///
    /// Sections entirely above or below `rect` are skipped. Results are in
    /// layout order, each section's header before its items. Returns nothing
    /// while the layout is not prepared.
    pub fn layout_attributes_in_rect(&self, rect: Rect) -> Vec<LayoutElement> {
        let mut elements = Vec::new();
        if !self.prepared {
            return elements;
        }

        for section in &self.sections {
            if section.top() >= rect.max_y() {
                break;
            }
            if !rect.overlaps_vertically(section.top(), section.bottom()) {
                continue;
            }
            if let Some(header) = section.header() {
                if header.frame.intersects(&rect) {
                    elements.push(LayoutElement::Header(header));
                }
            }
            elements.extend(
                section
                    .items()
                    .filter(|item| item.frame.intersects(&rect))
                    .map(LayoutElement::Item),
            );
        }
        elements
    }

    /// Total scrollable size.
    ///
    /// Width is the container width. Height runs to the bottom of the last
    /// section plus the bottom content inset. Zero height while unprepared.
    pub fn content_extent(&self) -> Size {
        if !self.prepared {
            return Size::new(self.container_width, 0.0);
        }
        let bottom = self
            .sections
            .last()
            .map_or(self.content_insets.top, SectionLayout::bottom);
        Size::new(self.container_width, bottom + self.content_insets.bottom)
    }
}

fn build_section<D>(
    delegate: &D,
    section: usize,
    origin_x: f32,
    available_width: f32,
) -> Result<SectionLayout, LayoutError>
where
    D: WaterfallDelegate + ?Sized,
{
    let config = delegate
        .config_for_section(section)
        .unwrap_or_default()
        .normalized();
    let header_height = match delegate.height_for_supplementary_view(IndexPath::new(section, 0)) {
        Some(height) if !is_valid_height(height) => {
            return Err(LayoutError::InvalidHeaderHeight { section, height });
        }
        header => header,
    };
    Ok(SectionLayout::new(
        section,
        config,
        origin_x,
        available_width,
        header_height,
    ))
}

fn item_height<D>(delegate: &D, index_path: IndexPath) -> Result<f32, LayoutError>
where
    D: WaterfallDelegate + ?Sized,
{
    let height = delegate.height_for_item(index_path);
    if is_valid_height(height) {
        Ok(height)
    } else {
        Err(LayoutError::InvalidItemHeight { index_path, height })
    }
}

#[inline]
fn is_valid_height(height: f32) -> bool {
    height.is_finite() && height >= 0.0
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width >= 0.0 {
        width
    } else {
        log::warn!("WaterfallLayout: invalid container width {width}, using 0");
        0.0
    }
}

#[cfg(test)]
#[path = "tests/waterfall_layout_tests.rs"]
mod tests;
