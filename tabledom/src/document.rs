//! In-memory host: holds the committed tree, lays it out on demand and
//! records page scrolling.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::element::{find_element, find_element_mut, Element};
use crate::hit::hit_test;
use crate::host::Host;
use crate::layout::{layout, LayoutMetrics, LayoutResult, Rect};
use crate::types::Style;

/// Id of the box the component tree is mounted into.
pub const APP_ID: &str = "app";

/// A page with one mount point (`#app`) and a viewport.
///
/// Layout runs lazily: any write marks it stale and the next read lays the
/// whole page out again. [`Document::layout_passes`] counts those passes, so
/// interleaved reads and writes show up as extra passes.
#[derive(Debug)]
pub struct Document {
    viewport: (f32, f32),
    app: Element,
    metrics: LayoutMetrics,
    /// Inline styles written through `patch_style`, reapplied on commit.
    patches: HashMap<String, Style>,
    layout: RefCell<Option<LayoutResult>>,
    layout_passes: Cell<usize>,
    /// Page scroll offset. Not clamped: the page is assumed to be tall enough.
    window_scroll: (f32, f32),
    commits: usize,
}

impl Document {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: (width, height),
            app: Element::div().id(APP_ID),
            metrics: LayoutMetrics::default(),
            patches: HashMap::new(),
            layout: RefCell::new(None),
            layout_passes: Cell::new(0),
            window_scroll: (0.0, 0.0),
            commits: 0,
        }
    }

    /// Style of the `#app` mount point.
    pub fn with_app_style(mut self, style: Style) -> Self {
        self.app.style = style;
        self.invalidate();
        self
    }

    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self.invalidate();
        self
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Resize the viewport. Components learn about it through an
    /// [`crate::Event::Resize`] dispatched by the caller.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("[document] viewport resized to {width}x{height}");
        self.viewport = (width, height);
        self.invalidate();
    }

    /// Replace the style of the `#app` mount point, e.g. to grow the parent box.
    pub fn set_app_style(&mut self, style: Style) {
        self.app.style = style;
        self.invalidate();
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.app, id)
    }

    /// Effective inline style of `id`, including patches.
    pub fn style_of(&self, id: &str) -> Option<&Style> {
        self.element(id).map(|el| &el.style)
    }

    pub fn window_scroll(&self) -> (f32, f32) {
        self.window_scroll
    }

    pub fn layout_passes(&self) -> usize {
        self.layout_passes.get()
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Deepest element under a viewport point.
    pub fn target_at(&self, x: f32, y: f32) -> Option<String> {
        self.ensure_layout();
        let layout = self.layout.borrow();
        layout.as_ref().and_then(|l| hit_test(l, &self.app, x, y))
    }

    fn invalidate(&self) {
        self.layout.replace(None);
    }

    fn ensure_layout(&self) {
        if self.layout.borrow().is_some() {
            return;
        }
        let (width, height) = self.viewport;
        let result = layout(&self.app, Rect::from_size(width, height), &self.metrics);
        self.layout_passes.set(self.layout_passes.get() + 1);
        log::trace!(
            "[document] layout pass {} ({} boxes)",
            self.layout_passes.get(),
            result.len()
        );
        self.layout.replace(Some(result));
    }
}

impl Host for Document {
    fn root(&self) -> Option<&Element> {
        self.app.child_elements().first()
    }

    fn bounding_rect(&self, id: &str) -> Option<Rect> {
        self.ensure_layout();
        let layout = self.layout.borrow();
        layout.as_ref().and_then(|l| l.get(id).copied())
    }

    fn patch_style(&mut self, id: &str, patch: &Style) -> bool {
        let Some(element) = find_element_mut(&mut self.app, id) else {
            return false;
        };
        element.style = element.style.merge(patch);

        let entry = self.patches.entry(id.to_string()).or_default();
        *entry = entry.merge(patch);
        self.invalidate();
        true
    }

    fn scroll_window_by(&mut self, dx: f32, dy: f32) {
        self.window_scroll.0 += dx;
        self.window_scroll.1 += dy;
        log::debug!(
            "[document] window scrolled by ({dx}, {dy}) to {:?}",
            self.window_scroll
        );
    }

    fn commit(&mut self, mut root: Element) {
        // Imperative inline styles outlive re-renders of the same element.
        self.patches.retain(|id, patch| match find_element_mut(&mut root, id) {
            Some(element) => {
                element.style = element.style.merge(patch);
                true
            }
            None => false,
        });

        self.app = std::mem::replace(&mut self.app, Element::div())
            .clone_shallow()
            .child(root);
        self.commits += 1;
        self.invalidate();
    }
}
