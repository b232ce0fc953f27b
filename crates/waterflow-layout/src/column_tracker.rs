//! Running column heights for one section.

use smallvec::{smallvec, SmallVec};

/// Inline capacity for column heights.
/// Waterfall sections rarely use more than four columns, so this avoids a
/// heap allocation per section in the common case.
pub type ColumnHeights = SmallVec<[f32; 4]>;

/// Tracks the filled height of every column in a section.
///
/// Heights start at the section's top inset and only grow as items are
/// placed. A tracker is never shrunk; the section is rebuilt instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnTracker {
    heights: ColumnHeights,
}

impl ColumnTracker {
    /// Creates `column_count` columns, all at `top_inset`.
    ///
    /// # Panics
    /// Panics if `column_count` is zero.
    pub fn new(column_count: usize, top_inset: f32) -> Self {
        assert!(
            column_count >= 1,
            "ColumnTracker requires at least one column"
        );
        Self {
            heights: smallvec![top_inset; column_count],
        }
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.heights.len()
    }

    /// Current height of every column, in column order.
    #[inline]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Index of the shortest column. Ties resolve to the lowest index.
    pub fn shortest_column_index(&self) -> usize {
        let mut shortest = 0;
        for (index, &height) in self.heights.iter().enumerate().skip(1) {
            if height < self.heights[shortest] {
                shortest = index;
            }
        }
        shortest
    }

    /// Places an item in `column_index` and returns its top Y.
    ///
    /// The column then grows by `item_height + y_spacing`. Negative or NaN
    /// values count as zero, so a column never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if `column_index` is not below [`Self::column_count`].
    pub fn place(&mut self, column_index: usize, item_height: f32, y_spacing: f32) -> f32 {
        let column = &mut self.heights[column_index];
        let top = *column;
        *column += item_height.max(0.0) + y_spacing.max(0.0);
        top
    }

    /// Tallest column height.
    pub fn max_height(&self) -> f32 {
        self.heights.iter().copied().fold(self.heights[0], f32::max)
    }
}

#[cfg(test)]
#[path = "tests/column_tracker_tests.rs"]
mod tests;
