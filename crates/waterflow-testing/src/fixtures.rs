//! Delegates for driving layouts in tests and benchmarks.
//!
//! - [`ScriptedDelegate`] returns exactly the heights it was given.
//! - [`SeededDelegate`] draws heights from a seeded PRNG, so "random" data
//!   is reproducible run to run.
//! - [`CountingDelegate`] wraps another delegate and counts queries.

use std::cell::Cell;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waterflow_layout::{IndexPath, SectionConfig, WaterfallDelegate};

/// One section of a [`ScriptedDelegate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedSection {
    pub heights: Vec<f32>,
    pub config: Option<SectionConfig>,
    pub header: Option<f32>,
}

/// Delegate backed by explicit per-section data.
///
/// Fields are public so tests can edit heights between passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedDelegate {
    pub sections: Vec<ScriptedSection>,
}

impl ScriptedDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section with default config and no header.
    pub fn section(self, heights: &[f32]) -> Self {
        self.push(heights, None)
    }

    /// Adds a section with an explicit config.
    pub fn section_with(self, heights: &[f32], config: SectionConfig) -> Self {
        self.push(heights, Some(config))
    }

    /// Gives the most recently added section a header.
    pub fn header(mut self, height: f32) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.header = Some(height);
        }
        self
    }

    fn push(mut self, heights: &[f32], config: Option<SectionConfig>) -> Self {
        self.sections.push(ScriptedSection {
            heights: heights.to_vec(),
            config,
            header: None,
        });
        self
    }
}

impl WaterfallDelegate for ScriptedDelegate {
    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.sections[section].heights.len()
    }

    fn height_for_item(&self, index_path: IndexPath) -> f32 {
        self.sections[index_path.section].heights[index_path.item]
    }

    fn height_for_supplementary_view(&self, index_path: IndexPath) -> Option<f32> {
        self.sections[index_path.section].header
    }

    fn config_for_section(&self, section: usize) -> Option<SectionConfig> {
        self.sections[section].config
    }
}

/// Delegate whose item heights come from a seeded [`StdRng`].
///
/// Heights are drawn when data is (re)loaded, never during a query, so a
/// layout pass always sees a fixed snapshot.
#[derive(Clone, Debug)]
pub struct SeededDelegate {
    rng: StdRng,
    height_range: RangeInclusive<u32>,
    heights: Vec<Vec<f32>>,
    config: Option<fn(usize) -> SectionConfig>,
    header_height: Option<f32>,
}

impl SeededDelegate {
    /// Default height range: `20 + random(3..=50)`, as in the demo app.
    pub const DEFAULT_HEIGHT_RANGE: RangeInclusive<u32> = 23..=70;

    pub fn new(seed: u64, section_count: usize, items_per_section: usize) -> Self {
        let mut delegate = Self {
            rng: StdRng::seed_from_u64(seed),
            height_range: Self::DEFAULT_HEIGHT_RANGE,
            heights: vec![Vec::new(); section_count],
            config: None,
            header_height: None,
        };
        for section in 0..section_count {
            delegate.append_items(section, items_per_section);
        }
        delegate
    }

    /// Redraws every height from `range`, keeping item counts.
    pub fn with_height_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.height_range = range;
        self.reload();
        self
    }

    pub fn with_config(mut self, config: fn(usize) -> SectionConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = Some(height);
        self
    }

    /// Draws fresh heights for every existing item.
    pub fn reload(&mut self) {
        for section in 0..self.heights.len() {
            let count = self.heights[section].len();
            self.heights[section].clear();
            self.append_items(section, count);
        }
    }

    /// Appends `count` items with fresh heights to `section`.
    pub fn append_items(&mut self, section: usize, count: usize) {
        for _ in 0..count {
            let height = self.rng.gen_range(self.height_range.clone()) as f32;
            self.heights[section].push(height);
        }
    }

    /// Appends an empty section and returns its index.
    pub fn append_section(&mut self) -> usize {
        self.heights.push(Vec::new());
        self.heights.len() - 1
    }

    /// Height that will be reported for `index_path`.
    pub fn height(&self, index_path: IndexPath) -> f32 {
        self.heights[index_path.section][index_path.item]
    }
}

impl WaterfallDelegate for SeededDelegate {
    fn number_of_sections(&self) -> usize {
        self.heights.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.heights[section].len()
    }

    fn height_for_item(&self, index_path: IndexPath) -> f32 {
        self.height(index_path)
    }

    fn height_for_supplementary_view(&self, _index_path: IndexPath) -> Option<f32> {
        self.header_height
    }

    fn config_for_section(&self, section: usize) -> Option<SectionConfig> {
        self.config.map(|config| config(section))
    }
}

/// Wraps a delegate and counts the queries the layout makes.
#[derive(Debug, Default)]
pub struct CountingDelegate<D> {
    pub inner: D,
    height_queries: Cell<usize>,
    config_queries: Cell<usize>,
}

impl<D> CountingDelegate<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            height_queries: Cell::new(0),
            config_queries: Cell::new(0),
        }
    }

    pub fn height_queries(&self) -> usize {
        self.height_queries.get()
    }

    pub fn config_queries(&self) -> usize {
        self.config_queries.get()
    }

    pub fn reset(&self) {
        self.height_queries.set(0);
        self.config_queries.set(0);
    }
}

impl<D: WaterfallDelegate> WaterfallDelegate for CountingDelegate<D> {
    fn number_of_sections(&self) -> usize {
        self.inner.number_of_sections()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.inner.number_of_items(section)
    }

    fn height_for_item(&self, index_path: IndexPath) -> f32 {
        self.height_queries.set(self.height_queries.get() + 1);
        self.inner.height_for_item(index_path)
    }

    fn height_for_supplementary_view(&self, index_path: IndexPath) -> Option<f32> {
        self.inner.height_for_supplementary_view(index_path)
    }

    fn config_for_section(&self, section: usize) -> Option<SectionConfig> {
        self.config_queries.set(self.config_queries.get() + 1);
        self.inner.config_for_section(section)
    }
}
