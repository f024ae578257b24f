//! Box layout for element trees.
//!
//! Block boxes stack their in-flow children vertically; `position: absolute`
//! children are placed against their parent box using `top`/`right`/
//! `bottom`/`left`. Tables get a column grid where every column is as wide as
//! its widest cell and every row as tall as its tallest cell.

mod flow;
mod rect;
mod table;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::Element;

/// Laid-out border boxes by element id.
pub type LayoutResult = HashMap<String, Rect>;

/// Text and cell metrics used to size content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Advance of one display column of text.
    pub char_width: f32,
    pub line_height: f32,
    /// Horizontal padding on each side of a table cell.
    pub cell_padding_x: f32,
    /// Vertical padding on each side of a table cell.
    pub cell_padding_y: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 20.0,
            cell_padding_x: 4.0,
            cell_padding_y: 2.0,
        }
    }
}

impl LayoutMetrics {
    /// Metrics without cell padding, so a cell is exactly as wide as its text.
    pub fn unpadded(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
            cell_padding_x: 0.0,
            cell_padding_y: 0.0,
        }
    }
}

/// Lay out `root` inside `viewport`.
pub fn layout(root: &Element, viewport: Rect, metrics: &LayoutMetrics) -> LayoutResult {
    let mut result = LayoutResult::new();
    flow::layout_root(root, viewport, metrics, &mut result);
    result
}

/// Size an element would take with unconstrained available space.
pub fn intrinsic_size(element: &Element, metrics: &LayoutMetrics) -> (f32, f32) {
    flow::intrinsic_size(element, metrics)
}
