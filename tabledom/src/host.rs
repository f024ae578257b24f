use crate::element::Element;
use crate::layout::Rect;
use crate::types::Style;

/// The environment a component renders into.
///
/// Reads (`root`, `bounding_rect`) observe the last committed tree with its
/// current layout. Writes (`patch_style`, `scroll_window_by`, `commit`)
/// invalidate layout; the next read lays out again.
pub trait Host {
    /// Root of the last committed component tree.
    fn root(&self) -> Option<&Element>;

    /// Border box of the element with `id`, if it is in the committed tree.
    fn bounding_rect(&self, id: &str) -> Option<Rect>;

    /// Merge `patch` into the inline style of element `id`. The patch
    /// survives later commits. Returns false if no such element exists.
    fn patch_style(&mut self, id: &str, patch: &Style) -> bool;

    /// Scroll the page that contains the component.
    fn scroll_window_by(&mut self, dx: f32, dy: f32);

    /// Replace the component tree.
    fn commit(&mut self, root: Element);
}
