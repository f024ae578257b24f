//! The pinned header copy and its column width sync.

use tabledom::element::find_element;
use tabledom::{query, BoxSizing, Element, Host, Style, Tag};

/// Attribute marking the two tables rendered by the container.
pub const MARKER_ATTR: &str = "data-rtc-id";
pub const MAIN_TABLE_MARKER: &str = "main-table";
pub const HEADER_TABLE_MARKER: &str = "header-table";

/// Appended to every id inside the header copy.
pub const COPY_SUFFIX: &str = "~header";

/// Whether a direct table child belongs in the pinned header.
pub fn is_header_element(element: &Element, custom_header: &[String]) -> bool {
    match &element.tag {
        Tag::Colgroup | Tag::Thead => true,
        Tag::Custom(name) => custom_header.iter().any(|h| h.eq_ignore_ascii_case(name)),
        _ => false,
    }
}

/// A copy of `table` keeping only its header children, with ids suffixed
/// by [`COPY_SUFFIX`].
pub fn header_copy(table: &Element, custom_header: &[String]) -> Element {
    let children = table
        .child_elements()
        .iter()
        .filter(|child| is_header_element(child, custom_header))
        .map(|child| child.with_id_suffix(COPY_SUFFIX));

    table.clone_shallow().id(format!("{}{COPY_SUFFIX}", table.id)).children(children)
}

/// Widths of the main table's first header row, paired with the header
/// copy cells they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderWidths {
    cells: Vec<(String, f32)>,
}

impl HeaderWidths {
    /// Read every header cell width. `None` if either table lacks a
    /// `thead > tr:first-child`.
    pub fn read(host: &impl Host, main_table_id: &str, header_table_id: &str) -> Option<Self> {
        let root = host.root()?;
        let main_row = query::first_header_row(find_element(root, main_table_id)?)?;
        let copy_row = query::first_header_row(find_element(root, header_table_id)?)?;

        let copy_cells = copy_row.child_elements().iter().filter(|el| el.tag.is_cell());
        let cells = main_row
            .child_elements()
            .iter()
            .filter(|el| el.tag.is_cell())
            .zip(copy_cells)
            .map(|(cell, copy)| {
                let width = host.bounding_rect(&cell.id).map_or(0.0, |r| r.width);
                (copy.id.clone(), width)
            })
            .collect();

        Some(Self { cells })
    }

    pub fn widths(&self) -> Vec<f32> {
        self.cells.iter().map(|(_, width)| *width).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Pin each copy cell to its measured width. Returns the number of
    /// cells written.
    pub fn write(&self, host: &mut impl Host) -> usize {
        let mut written = 0;
        for (id, width) in &self.cells {
            let patch = Style::new()
                .box_sizing(BoxSizing::BorderBox)
                .min_width(*width);
            if host.patch_style(id, &patch) {
                written += 1;
            }
        }
        written
    }
}
