//! The demo's data source: counts, heights, headers and section configs.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waterflow_layout::{IndexPath, SectionConfig, WaterfallDelegate};

/// Background of a demo cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellColor {
    Red,
    Green,
    Purple,
    Blue,
}

impl CellColor {
    pub const ALL: [CellColor; 4] = [
        CellColor::Red,
        CellColor::Green,
        CellColor::Purple,
        CellColor::Blue,
    ];
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellColor::Red => "red",
            CellColor::Green => "green",
            CellColor::Purple => "purple",
            CellColor::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// What a host would draw inside one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellContent {
    pub label: String,
    pub color: CellColor,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DemoItem {
    height: f32,
    color: CellColor,
}

/// Delegate for the demo screen.
///
/// Heights and colors are drawn from a seeded PRNG whenever data is loaded,
/// so the layout always queries a stable snapshot.
#[derive(Clone, Debug)]
pub struct DemoController {
    rng: StdRng,
    header_height: Option<f32>,
    sections: Vec<Vec<DemoItem>>,
}

impl DemoController {
    pub fn new(seed: u64, section_count: usize, items_per_section: usize) -> Self {
        let mut controller = Self {
            rng: StdRng::seed_from_u64(seed),
            header_height: None,
            sections: vec![Vec::new(); section_count],
        };
        for section in 0..section_count {
            controller.append_items(section, items_per_section);
        }
        controller
    }

    /// Headers of zero height are treated as absent.
    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = (height > 0.0).then_some(height);
        self
    }

    /// Draws new heights and colors for every item, keeping counts.
    pub fn reload_data(&mut self) {
        for section in 0..self.sections.len() {
            let count = self.sections[section].len();
            self.sections[section].clear();
            self.append_items(section, count);
        }
        log::info!("DemoController: reloaded {} items", self.total_items());
    }

    pub fn append_items(&mut self, section: usize, count: usize) {
        for _ in 0..count {
            let item = DemoItem {
                height: (self.rng.gen_range(3..=50) + 20) as f32,
                color: CellColor::ALL[self.rng.gen_range(0..CellColor::ALL.len())],
            };
            self.sections[section].push(item);
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn total_items(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    pub fn cell_content(&self, index_path: IndexPath) -> Option<CellContent> {
        let item = self
            .sections
            .get(index_path.section)?
            .get(index_path.item)?;
        Some(CellContent {
            label: index_path.to_string(),
            color: item.color,
        })
    }
}

impl WaterfallDelegate for DemoController {
    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.sections[section].len()
    }

    fn height_for_item(&self, index_path: IndexPath) -> f32 {
        self.sections[index_path.section][index_path.item].height
    }

    fn height_for_supplementary_view(&self, _index_path: IndexPath) -> Option<f32> {
        self.header_height
    }

    fn config_for_section(&self, section: usize) -> Option<SectionConfig> {
        Some(
            SectionConfig::default()
                .with_columns(section + 2)
                .with_x_spacing(5.0 * section as f32)
                .with_y_spacing(10.0),
        )
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
