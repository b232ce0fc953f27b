//! Command line options for the demo.
//!
//! Defaults give the three-section demo screen.

use clap::Parser;

/// Lays out seeded waterfall sections and scrolls a viewport over them.
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(name = "waterflow-demo", version, about)]
pub struct DemoOptions {
    /// Seed for item heights and cell colors.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,

    /// Number of sections.
    #[arg(long, default_value_t = 3)]
    pub sections: usize,

    /// Items per section.
    #[arg(long, default_value_t = 30)]
    pub items: usize,

    /// Container (viewport) width.
    #[arg(long, default_value_t = 375.0)]
    pub width: f32,

    /// Viewport height used for the simulated scroll.
    #[arg(long, default_value_t = 667.0)]
    pub viewport: f32,

    /// Header height above each section. Zero disables headers.
    #[arg(long, default_value_t = 20.0)]
    pub header_height: f32,

    /// Items appended to the last section after the first reload.
    #[arg(long, default_value_t = 30)]
    pub append: usize,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            seed: 2024,
            sections: 3,
            items: 30,
            width: 375.0,
            viewport: 667.0,
            header_height: 20.0,
            append: 30,
        }
    }
}
