use crate::element::Element;
use crate::layout::{LayoutResult, Rect};
use crate::types::Overflow;

/// Find the deepest element at the given coordinates.
///
/// Children with a higher `z-index` are on top; among equal `z-index`,
/// later children are on top. `overflow: hidden` clips descendants and
/// hidden elements are never hit.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: f32, y: f32) -> Option<String> {
    hit_test_element(layout, root, x, y, None)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: f32,
    y: f32,
    clip: Option<Rect>,
) -> Option<String> {
    if element.style.is_hidden() {
        return None;
    }

    let rect = *layout.get(&element.id)?;
    if let Some(clip) = clip {
        if !clip.contains(x, y) {
            return None;
        }
    }

    let child_clip = if element.style.overflow == Some(Overflow::Hidden) {
        Some(clip.map_or(rect, |c| c.intersection(rect)))
    } else {
        clip
    };

    // Topmost first: by z-index, then last rendered
    let mut children: Vec<(usize, &Element)> =
        element.child_elements().iter().enumerate().collect();
    children.sort_by_key(|(order, child)| (child.style.z_index.unwrap_or(0), *order));
    for (_, child) in children.iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, child_clip) {
            return Some(id);
        }
    }

    rect.contains(x, y).then(|| element.id.clone())
}
