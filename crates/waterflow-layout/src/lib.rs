//! Waterfall layout engine for Waterflow.
//!
//! Arranges variable-height items into fixed-width columns, section by
//! section, always placing the next item into the currently shortest column.
//!
//! # Architecture
//!
//! - [`WaterfallDelegate`] - Host callbacks: counts, heights, headers, configs
//! - [`SectionConfig`] - Column count, spacing and insets for one section
//! - [`ColumnTracker`] - Running column heights and shortest-column choice
//! - [`WaterfallLayout`] - Runs layout passes and answers frame queries
//!
//! # Example
//!
//! ```rust
//! use waterflow_layout::{IndexPath, SectionConfig, WaterfallDelegate, WaterfallLayout};
//!
//! struct Photos;
//!
//! impl WaterfallDelegate for Photos {
//!     fn number_of_items(&self, _section: usize) -> usize {
//!         3
//!     }
//!
//!     fn height_for_item(&self, index_path: IndexPath) -> f32 {
//!         [10.0, 20.0, 30.0][index_path.item]
//!     }
//!
//!     fn config_for_section(&self, _section: usize) -> Option<SectionConfig> {
//!         Some(SectionConfig::new(2).with_y_spacing(5.0))
//!     }
//! }
//!
//! let mut layout = WaterfallLayout::new(200.0);
//! layout.prepare_layout(&Photos).unwrap();
//! assert_eq!(layout.content_extent().height, 50.0);
//! let third = layout.layout_attributes(IndexPath::new(0, 2)).unwrap();
//! assert_eq!(third.column, 0);
//! assert_eq!(third.frame.y, 15.0);
//! ```

mod attributes;
mod column_tracker;
mod delegate;
mod error;
mod index_path;
mod section_config;
mod section_layout;
mod waterfall_layout;

pub use attributes::*;
pub use column_tracker::*;
pub use delegate::*;
pub use error::*;
pub use index_path::*;
pub use section_config::*;
pub use waterfall_layout::*;

pub mod prelude {
    pub use crate::attributes::{HeaderLayoutAttributes, ItemLayoutAttributes, LayoutElement};
    pub use crate::delegate::WaterfallDelegate;
    pub use crate::error::LayoutError;
    pub use crate::index_path::IndexPath;
    pub use crate::section_config::SectionConfig;
    pub use crate::waterfall_layout::WaterfallLayout;
}
