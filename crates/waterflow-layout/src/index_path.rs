//! Two-level item addressing: section, then item within the section.

use std::fmt;

/// Address of an item inside a sectioned layout.
///
/// Ordering is section-major, so sorting index paths yields layout order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.section, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_section_then_item() {
        let mut paths = vec![
            IndexPath::new(1, 0),
            IndexPath::new(0, 5),
            IndexPath::new(0, 1),
        ];
        paths.sort();
        assert_eq!(
            paths,
            vec![
                IndexPath::new(0, 1),
                IndexPath::new(0, 5),
                IndexPath::new(1, 0)
            ]
        );
    }

    #[test]
    fn displays_as_cell_label() {
        assert_eq!(IndexPath::new(2, 17).to_string(), "2 - 17");
    }
}
