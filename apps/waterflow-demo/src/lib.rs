//! Waterflow demo host.
//!
//! Plays the role of a view controller: it owns the data, answers the
//! layout's delegate queries and scrolls a viewport over the result.

pub mod app;
pub mod controller;
pub mod options;
pub mod scroll_view;

pub use app::{run, DemoSummary};
pub use options::DemoOptions;
