//! Selector helpers over element trees.

use crate::element::{Element, Tag};

/// Pre-order search for the first element matching `predicate`.
pub fn find<'a>(root: &'a Element, predicate: &impl Fn(&Element) -> bool) -> Option<&'a Element> {
    if predicate(root) {
        return Some(root);
    }
    root.child_elements()
        .iter()
        .find_map(|child| find(child, predicate))
}

pub fn find_by_tag<'a>(root: &'a Element, tag: &Tag) -> Option<&'a Element> {
    find(root, &|el| &el.tag == tag)
}

/// First element whose attribute `key` equals `value`.
pub fn find_by_attr<'a>(root: &'a Element, key: &str, value: &str) -> Option<&'a Element> {
    find(root, &|el| el.get_attr(key) == Some(value))
}

/// `thead > tr:first-child`: the first `thead` in document order whose first
/// child is a row.
pub fn first_header_row(root: &Element) -> Option<&Element> {
    find(root, &|el| {
        el.tag == Tag::Thead
            && el
                .child_elements()
                .first()
                .is_some_and(|first| first.tag == Tag::Tr)
    })
    .and_then(|thead| thead.child_elements().first())
}

/// Whether `id` is `root` or one of its descendants.
pub fn contains_id(root: &Element, id: &str) -> bool {
    find(root, &|el| el.id == id).is_some()
}
