//! Errors reported by the waterfall layout.

use crate::IndexPath;

/// Failure of a layout query or a layout pass.
///
/// Lookup failures ([`is_not_found`](Self::is_not_found)) are recoverable:
/// the host should treat them as "nothing to draw here". Invalid heights are
/// delegate contract violations and abort the pass that hit them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has not been prepared since the last invalidation")]
    NotPrepared,

    #[error("section {section} is out of range ({section_count} sections)")]
    SectionOutOfRange {
        section: usize,
        section_count: usize,
    },

    #[error("item {index_path} is out of range ({item_count} items in section)")]
    ItemOutOfRange {
        index_path: IndexPath,
        item_count: usize,
    },

    #[error("section {section} has no header")]
    NoHeader { section: usize },

    #[error("delegate returned invalid height {height} for item {index_path}")]
    InvalidItemHeight { index_path: IndexPath, height: f32 },

    #[error("delegate returned invalid header height {height} for section {section}")]
    InvalidHeaderHeight { section: usize, height: f32 },
}

impl LayoutError {
    /// True for lookups that simply found nothing at the requested position.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LayoutError::NotPrepared
                | LayoutError::SectionOutOfRange { .. }
                | LayoutError::ItemOutOfRange { .. }
                | LayoutError::NoHeader { .. }
        )
    }
}
