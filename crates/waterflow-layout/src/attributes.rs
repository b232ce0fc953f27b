//! Layout results handed to the host.
//!
//! All attributes are plain `Copy` values; the host never sees or mutates
//! the engine's internal column state.

use crate::IndexPath;
use waterflow_ui_graphics::Rect;

/// Placement of a single item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemLayoutAttributes {
    /// Which item this is.
    pub index_path: IndexPath,

    /// Column the item was placed in.
    pub column: usize,

    /// Absolute frame inside the content area.
    pub frame: Rect,
}

impl ItemLayoutAttributes {
    pub fn new(index_path: IndexPath, column: usize, frame: Rect) -> Self {
        Self {
            index_path,
            column,
            frame,
        }
    }

    pub(crate) fn translated(self, dy: f32) -> Self {
        Self {
            frame: self.frame.translate(0.0, dy),
            ..self
        }
    }
}

/// Placement of a section header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderLayoutAttributes {
    pub section: usize,
    pub frame: Rect,
}

/// Anything the layout positions: an item or a section header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutElement {
    Header(HeaderLayoutAttributes),
    Item(ItemLayoutAttributes),
}

impl LayoutElement {
    pub fn frame(&self) -> Rect {
        match self {
            LayoutElement::Header(header) => header.frame,
            LayoutElement::Item(item) => item.frame,
        }
    }

    pub fn section(&self) -> usize {
        match self {
            LayoutElement::Header(header) => header.section,
            LayoutElement::Item(item) => item.index_path.section,
        }
    }

    pub fn as_item(&self) -> Option<&ItemLayoutAttributes> {
        match self {
            LayoutElement::Item(item) => Some(item),
            LayoutElement::Header(_) => None,
        }
    }

    pub fn as_header(&self) -> Option<&HeaderLayoutAttributes> {
        match self {
            LayoutElement::Header(header) => Some(header),
            LayoutElement::Item(_) => None,
        }
    }
}
