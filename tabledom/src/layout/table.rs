use super::flow::{intrinsic_size, place};
use super::{LayoutMetrics, LayoutResult, Rect};
use crate::element::{Element, Tag};
use crate::text::{line_count, max_line_width};
use crate::types::CssSize;

/// Column grid of one table, built from its row groups.
pub(super) struct TableGrid<'a> {
    columns: Vec<f32>,
    spacing: f32,
    items: Vec<GridItem<'a>>,
}

enum GridItem<'a> {
    /// `colgroup`: no height, one box per `col`.
    Columns(&'a Element),
    /// `thead`/`tbody`/`tfoot`, or a custom element holding rows.
    Group(&'a Element, Vec<Row<'a>>),
    /// A `tr` placed directly in the table.
    Row(Row<'a>),
    /// Anything else (`caption`, custom blocks) spans the full table width.
    Block(&'a Element, f32),
    Hidden(&'a Element),
}

struct Row<'a> {
    element: &'a Element,
    height: f32,
    cells: Vec<&'a Element>,
}

impl<'a> TableGrid<'a> {
    pub(super) fn build(table: &'a Element, metrics: &LayoutMetrics) -> Self {
        let spacing = table.style.border_spacing.unwrap_or(0.0);
        let mut columns: Vec<f32> = Vec::new();
        let mut items = Vec::new();

        for child in table.child_elements() {
            if child.style.is_hidden() {
                items.push(GridItem::Hidden(child));
                continue;
            }

            match &child.tag {
                Tag::Colgroup => {
                    for (i, col) in child.child_elements().iter().enumerate() {
                        if let Some(CssSize::Px(width)) = col.style.width {
                            widen(&mut columns, i, width);
                        }
                    }
                    items.push(GridItem::Columns(child));
                }
                Tag::Tr => {
                    let row = Row::measure(child, &mut columns, metrics);
                    items.push(GridItem::Row(row));
                }
                tag if tag.is_row_group() || holds_rows(child) => {
                    let rows = child
                        .child_elements()
                        .iter()
                        .filter(|el| el.tag == Tag::Tr && !el.style.is_hidden())
                        .map(|el| Row::measure(el, &mut columns, metrics))
                        .collect();
                    items.push(GridItem::Group(child, rows));
                }
                _ => {
                    let (_, height) = intrinsic_size(child, metrics);
                    items.push(GridItem::Block(child, height));
                }
            }
        }

        Self {
            columns,
            spacing,
            items,
        }
    }

    /// Border-box size of the table.
    pub(super) fn size(&self) -> (f32, f32) {
        let columns_width = if self.columns.is_empty() {
            0.0
        } else {
            self.columns.iter().sum::<f32>() + self.spacing * (self.columns.len() + 1) as f32
        };

        let mut rows = 0usize;
        let mut height = 0.0;
        for item in &self.items {
            match item {
                GridItem::Group(_, group) => {
                    rows += group.len();
                    height += group.iter().map(|r| r.height).sum::<f32>();
                }
                GridItem::Row(row) => {
                    rows += 1;
                    height += row.height;
                }
                GridItem::Block(_, h) => height += h,
                GridItem::Columns(_) | GridItem::Hidden(_) => {}
            }
        }
        if rows > 0 {
            height += self.spacing * (rows + 1) as f32;
        }

        (columns_width, height)
    }

    /// Lay out rows and cells inside the table's border box.
    pub(super) fn place(mut self, rect: Rect, metrics: &LayoutMetrics, result: &mut LayoutResult) {
        let (natural_width, _) = self.size();
        let extra = rect.width - natural_width;
        if extra > 0.0 && !self.columns.is_empty() {
            let share = extra / self.columns.len() as f32;
            for width in &mut self.columns {
                *width += share;
            }
        }

        let mut cursor_y = rect.y + self.spacing;
        for item in &self.items {
            match item {
                GridItem::Columns(colgroup) => {
                    result.insert(colgroup.id.clone(), Rect::new(rect.x, rect.y, rect.width, 0.0));
                    let mut x = rect.x + self.spacing;
                    for (col, width) in colgroup.child_elements().iter().zip(&self.columns) {
                        result.insert(col.id.clone(), Rect::new(x, rect.y, *width, rect.height));
                        x += width + self.spacing;
                    }
                }
                GridItem::Group(group, rows) => {
                    let start = cursor_y;
                    for row in rows {
                        self.place_row(row, rect.x, cursor_y, rect.width, metrics, result);
                        cursor_y += row.height + self.spacing;
                    }
                    let height = (cursor_y - start - self.spacing).max(0.0);
                    result.insert(group.id.clone(), Rect::new(rect.x, start, rect.width, height));
                }
                GridItem::Row(row) => {
                    self.place_row(row, rect.x, cursor_y, rect.width, metrics, result);
                    cursor_y += row.height + self.spacing;
                }
                GridItem::Block(block, height) => {
                    place(block, Rect::new(rect.x, cursor_y, rect.width, *height), metrics, result);
                    cursor_y += height;
                }
                GridItem::Hidden(hidden) => {
                    place(hidden, Rect::new(rect.x, cursor_y, 0.0, 0.0), metrics, result);
                }
            }
        }
    }

    fn place_row(
        &self,
        row: &Row<'_>,
        x: f32,
        y: f32,
        width: f32,
        metrics: &LayoutMetrics,
        result: &mut LayoutResult,
    ) {
        result.insert(row.element.id.clone(), Rect::new(x, y, width, row.height));

        let mut cell_x = x + self.spacing;
        for (i, cell) in row.cells.iter().enumerate() {
            let cell_width = self.columns.get(i).copied().unwrap_or(0.0);
            let cell_rect = Rect::new(cell_x, y, cell_width, row.height);
            if cell.child_elements().is_empty() {
                result.insert(cell.id.clone(), cell_rect);
            } else {
                place(cell, cell_rect, metrics, result);
            }
            cell_x += cell_width + self.spacing;
        }
    }
}

impl<'a> Row<'a> {
    fn measure(row: &'a Element, columns: &mut Vec<f32>, metrics: &LayoutMetrics) -> Self {
        let cells: Vec<&Element> = row
            .child_elements()
            .iter()
            .filter(|el| el.tag.is_cell())
            .collect();

        let mut height: f32 = 0.0;
        for (i, cell) in cells.iter().enumerate() {
            let (width, cell_height) = cell_size(cell, metrics);
            widen(columns, i, width);
            height = height.max(cell_height);
        }

        Self {
            element: row,
            height,
            cells,
        }
    }
}

/// Border-box size a cell needs.
fn cell_size(cell: &Element, metrics: &LayoutMetrics) -> (f32, f32) {
    let pad_x = metrics.cell_padding_x * 2.0;
    let pad_y = metrics.cell_padding_y * 2.0;

    let (content_w, content_h) = match cell.text_content() {
        Some(text) => (
            max_line_width(text) as f32 * metrics.char_width,
            line_count(text) as f32 * metrics.line_height,
        ),
        None => intrinsic_size(cell, metrics),
    };
    let mut width = content_w + pad_x;
    let mut height = content_h + pad_y;

    // `min-width` and `width` refer to the content box unless border-box is set.
    let box_extra = if cell.style.is_border_box() { 0.0 } else { pad_x };
    if let Some(CssSize::Px(px)) = cell.style.width {
        width = width.max(px + box_extra);
    }
    if let Some(min) = cell.style.min_width {
        width = width.max(min + box_extra);
    }
    if let Some(CssSize::Px(px)) = cell.style.height {
        let box_extra = if cell.style.is_border_box() { 0.0 } else { pad_y };
        height = height.max(px + box_extra);
    }

    (width, height)
}

fn widen(columns: &mut Vec<f32>, index: usize, width: f32) {
    if columns.len() <= index {
        columns.resize(index + 1, 0.0);
    }
    columns[index] = columns[index].max(width);
}

fn holds_rows(element: &Element) -> bool {
    matches!(element.tag, Tag::Custom(_))
        && element
            .child_elements()
            .iter()
            .any(|child| child.tag == Tag::Tr)
}
