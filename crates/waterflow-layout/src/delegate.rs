//! Host callbacks consumed by the waterfall layout.
//!
//! This module defines the [`WaterfallDelegate`] trait which supplies counts,
//! item heights, optional header heights and per-section configuration.

use crate::{IndexPath, SectionConfig};

/// Provides everything the layout needs to know about the host's items.
///
/// All methods are pure queries. Within one
/// [`prepare_layout`](crate::WaterfallLayout::prepare_layout) pass every
/// height is queried at most once, so hosts that generate heights on the fly
/// still see a consistent snapshot per pass.
///
/// Optional capabilities return `Option`; the default implementations report
/// "not implemented" and the layout falls back to defaults.
pub trait WaterfallDelegate {
    /// Number of sections. Defaults to a single section.
    fn number_of_sections(&self) -> usize {
        1
    }

    /// Number of items in `section`.
    fn number_of_items(&self, section: usize) -> usize;

    /// Height of the item at `index_path`.
    ///
    /// Must be finite and non-negative. Anything else aborts the layout pass
    /// with [`LayoutError::InvalidItemHeight`](crate::LayoutError::InvalidItemHeight).
    fn height_for_item(&self, index_path: IndexPath) -> f32;

    /// Height of the header above a section's items.
    ///
    /// Queried with item index 0. `None` means the section has no header.
    fn height_for_supplementary_view(&self, index_path: IndexPath) -> Option<f32> {
        let _ = index_path;
        None
    }

    /// Column and spacing configuration for `section`.
    ///
    /// `None` uses [`SectionConfig::default`].
    fn config_for_section(&self, section: usize) -> Option<SectionConfig> {
        let _ = section;
        None
    }
}

impl<T: WaterfallDelegate + ?Sized> WaterfallDelegate for &T {
    fn number_of_sections(&self) -> usize {
        (**self).number_of_sections()
    }

    fn number_of_items(&self, section: usize) -> usize {
        (**self).number_of_items(section)
    }

    fn height_for_item(&self, index_path: IndexPath) -> f32 {
        (**self).height_for_item(index_path)
    }

    fn height_for_supplementary_view(&self, index_path: IndexPath) -> Option<f32> {
        (**self).height_for_supplementary_view(index_path)
    }

    fn config_for_section(&self, section: usize) -> Option<SectionConfig> {
        (**self).config_for_section(section)
    }
}
