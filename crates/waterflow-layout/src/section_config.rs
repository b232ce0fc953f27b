//! Per-section column and spacing configuration.

use waterflow_ui_graphics::EdgeInsets;

/// Column count, spacing and padding for one section of a waterfall layout.
///
/// Hosts return one of these from
/// [`WaterfallDelegate::config_for_section`](crate::WaterfallDelegate::config_for_section).
/// Values are normalized before use, so a zero column count or a negative
/// spacing never reaches placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionConfig {
    /// Number of columns items are distributed over.
    pub columns: usize,

    /// Horizontal gap between adjacent columns.
    pub x_spacing: f32,

    /// Vertical gap below every item in a column.
    pub y_spacing: f32,

    /// Padding around the section's content.
    pub insets: EdgeInsets,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            x_spacing: 0.0,
            y_spacing: 0.0,
            insets: EdgeInsets::ZERO,
        }
    }
}

impl SectionConfig {
    /// Creates a config with the given column count and no spacing.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_x_spacing(mut self, x_spacing: f32) -> Self {
        self.x_spacing = x_spacing;
        self
    }

    pub fn with_y_spacing(mut self, y_spacing: f32) -> Self {
        self.y_spacing = y_spacing;
        self
    }

    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Returns a copy that is safe to lay out with.
    ///
    /// A column count of zero becomes one; negative or non-finite spacing and
    /// insets become zero. Never fails.
    pub fn normalized(self) -> Self {
        let normalized = Self {
            columns: self.columns.max(1),
            x_spacing: non_negative(self.x_spacing),
            y_spacing: non_negative(self.y_spacing),
            insets: self.insets.clamped_non_negative(),
        };
        if normalized != self {
            log::debug!("SectionConfig: normalized {:?} to {:?}", self, normalized);
        }
        normalized
    }

    /// Width of a single column when the section spans `available_width`.
    ///
    /// Clamped at zero when insets and spacing consume the whole width.
    pub fn column_width(&self, available_width: f32) -> f32 {
        let columns = self.columns.max(1) as f32;
        let gaps = (columns - 1.0) * self.x_spacing;
        ((self.inner_width(available_width) - gaps) / columns).max(0.0)
    }

    /// Gap actually left between adjacent columns.
    ///
    /// Equals `x_spacing` unless the gaps alone would overflow the section,
    /// in which case they shrink to share the inner width evenly.
    pub fn effective_x_spacing(&self, available_width: f32) -> f32 {
        let columns = self.columns.max(1);
        if columns == 1 {
            return self.x_spacing;
        }
        let share = self.inner_width(available_width) / (columns - 1) as f32;
        self.x_spacing.min(share)
    }

    /// X offset of `column` relative to the section's left edge.
    pub fn column_x(&self, column: usize, available_width: f32) -> f32 {
        let spacing = self.effective_x_spacing(available_width);
        self.insets.left + column as f32 * (self.column_width(available_width) + spacing)
    }

    fn inner_width(&self, available_width: f32) -> f32 {
        (available_width - self.insets.horizontal_sum()).max(0.0)
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "tests/section_config_tests.rs"]
mod tests;
