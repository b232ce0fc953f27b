//! Pure geometry data for Waterflow
//!
//! Points, sizes, rectangles and edge insets shared by the layout engine,
//! its test fixtures and host applications.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
