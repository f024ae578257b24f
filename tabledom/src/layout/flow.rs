use super::table::TableGrid;
use super::{LayoutMetrics, LayoutResult, Rect};
use crate::element::{Content, Element, Tag};
use crate::text::{line_count, max_line_width};
use crate::types::{CssSize, Display};

pub(super) fn layout_root(
    element: &Element,
    viewport: Rect,
    metrics: &LayoutMetrics,
    result: &mut LayoutResult,
) {
    let (width, height) = resolve_box(element, viewport.width, viewport.height, metrics);
    let x = viewport.x + element.style.margin_left.unwrap_or(0.0);
    let y = viewport.y + element.style.margin_top.unwrap_or(0.0);
    place(element, Rect::new(x, y, width, height), metrics, result);
}

/// Assign `rect` to `element` and lay out its subtree.
pub(super) fn place(
    element: &Element,
    rect: Rect,
    metrics: &LayoutMetrics,
    result: &mut LayoutResult,
) {
    if element.style.is_hidden() {
        insert_hidden(element, rect.x, rect.y, result);
        return;
    }

    result.insert(element.id.clone(), rect);

    if element.tag == Tag::Table {
        TableGrid::build(element, metrics).place(rect, metrics, result);
        return;
    }

    let mut cursor_y = rect.y;
    for child in element.child_elements() {
        if child.style.is_absolute() {
            continue;
        }
        if child.style.is_hidden() {
            insert_hidden(child, rect.x, cursor_y, result);
            continue;
        }

        let (width, height) = resolve_box(child, rect.width, rect.height, metrics);
        let x = rect.x + child.style.margin_left.unwrap_or(0.0);
        let y = cursor_y + child.style.margin_top.unwrap_or(0.0);
        place(child, Rect::new(x, y, width, height), metrics, result);
        cursor_y = y + height;
    }

    for child in element.child_elements() {
        if child.style.is_absolute() {
            place_absolute(child, rect, metrics, result);
        }
    }
}

/// Place an absolutely positioned element against its containing box.
fn place_absolute(
    element: &Element,
    containing: Rect,
    metrics: &LayoutMetrics,
    result: &mut LayoutResult,
) {
    let style = &element.style;
    if style.is_hidden() {
        insert_hidden(element, containing.x, containing.y, result);
        return;
    }

    let (intrinsic_w, intrinsic_h) = intrinsic_size(element, metrics);

    let width = match (style.width, style.left, style.right) {
        (Some(size), _, _) if !size.is_auto() => size.resolve(containing.width, intrinsic_w),
        (_, Some(left), Some(right)) if element.tag != Tag::Table => {
            (containing.width - left - right).max(0.0)
        }
        _ => intrinsic_w,
    };
    let height = match (style.height, style.top, style.bottom) {
        (Some(size), _, _) if !size.is_auto() => size.resolve(containing.height, intrinsic_h),
        (_, Some(top), Some(bottom)) if element.tag != Tag::Table => {
            (containing.height - top - bottom).max(0.0)
        }
        _ => intrinsic_h,
    };
    let width = apply_min_width(element, width);
    let height = apply_max_height(element, containing.height, height);

    let x = match (style.left, style.right) {
        (Some(left), _) => containing.x + left,
        (None, Some(right)) => containing.right() - right - width,
        (None, None) => containing.x,
    };
    let y = match (style.top, style.bottom) {
        (Some(top), _) => containing.y + top,
        (None, Some(bottom)) => containing.bottom() - bottom - height,
        (None, None) => containing.y,
    };

    let x = x + style.margin_left.unwrap_or(0.0);
    let y = y + style.margin_top.unwrap_or(0.0);
    place(element, Rect::new(x, y, width, height), metrics, result);
}

/// Used size of an in-flow element given its containing block size.
pub(super) fn resolve_box(
    element: &Element,
    available_w: f32,
    available_h: f32,
    metrics: &LayoutMetrics,
) -> (f32, f32) {
    let style = &element.style;
    if style.is_hidden() {
        return (0.0, 0.0);
    }

    let (intrinsic_w, intrinsic_h) = intrinsic_size(element, metrics);
    let shrink_to_fit =
        element.tag == Tag::Table || style.display == Some(Display::InlineBlock);

    let width = match style.width {
        Some(size) if !size.is_auto() => size.resolve(available_w, intrinsic_w),
        _ if shrink_to_fit => intrinsic_w,
        _ => available_w,
    };
    // Tables never shrink below their content.
    let width = if element.tag == Tag::Table {
        width.max(intrinsic_w)
    } else {
        width
    };

    let height = match style.height {
        Some(size) => size.resolve(available_h, intrinsic_h),
        None => intrinsic_h,
    };

    (
        apply_min_width(element, width),
        apply_max_height(element, available_h, height),
    )
}

/// Size of the content of `element`, ignoring percentage sizes.
pub(super) fn intrinsic_size(element: &Element, metrics: &LayoutMetrics) -> (f32, f32) {
    if element.style.is_hidden() {
        return (0.0, 0.0);
    }

    if element.tag == Tag::Table {
        let grid = TableGrid::build(element, metrics);
        let (width, height) = grid.size();
        let width = match element.style.width {
            Some(CssSize::Px(px)) => width.max(px),
            _ => width,
        };
        return (width, height);
    }

    let (width, height) = match &element.content {
        Content::None => (0.0, 0.0),
        Content::Text(text) => (
            max_line_width(text) as f32 * metrics.char_width,
            line_count(text) as f32 * metrics.line_height,
        ),
        Content::Children(children) => {
            let mut width = 0.0f32;
            let mut height = 0.0f32;
            for child in children.iter().filter(|c| !c.style.is_absolute()) {
                let (w, h) = preferred_size(child, metrics);
                width = width.max(w + child.style.margin_left.unwrap_or(0.0));
                height += h + child.style.margin_top.unwrap_or(0.0);
            }
            (width.max(0.0), height.max(0.0))
        }
    };

    (apply_min_width(element, width), height)
}

/// Size an in-flow child asks for when its parent shrinks to fit.
fn preferred_size(element: &Element, metrics: &LayoutMetrics) -> (f32, f32) {
    let (intrinsic_w, intrinsic_h) = intrinsic_size(element, metrics);
    let width = match element.style.width {
        Some(CssSize::Px(px)) => px,
        _ => intrinsic_w,
    };
    let height = match element.style.height {
        Some(CssSize::Px(px)) => px,
        _ => intrinsic_h,
    };
    (apply_min_width(element, width), height)
}

fn apply_min_width(element: &Element, width: f32) -> f32 {
    element.style.min_width.map_or(width, |min| width.max(min))
}

fn apply_max_height(element: &Element, available_h: f32, height: f32) -> f32 {
    match element.style.max_height {
        Some(max) => height.min(max.resolve(available_h, height)),
        None => height,
    }
}

/// Hidden subtrees keep an empty box so lookups by id still succeed.
fn insert_hidden(element: &Element, x: f32, y: f32, result: &mut LayoutResult) {
    result.insert(element.id.clone(), Rect::new(x, y, 0.0, 0.0));
    for child in element.child_elements() {
        insert_hidden(child, x, y, result);
    }
}
