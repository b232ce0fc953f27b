//! Testing utilities for Waterflow layouts

pub mod fixtures;
pub mod layout_assertions;

pub use fixtures::*;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::layout_assertions;
    pub use crate::layout_assertions::{
        assert_approx_eq, assert_no_column_overlap, assert_rect_approx_eq, assert_within_columns,
    };
}
