//! The table container: scroll state, event wiring and rendering.

use std::time::{Duration, Instant};

use tabledom::element::find_element;
use tabledom::{
    query, BoxSizing, Debounce, DeltaMode, Display, Element, Event, EventKind, EventResult, Host,
    MouseButton, Overflow, Position, Style, Tag,
};

use crate::config::ContainerConfig;
use crate::error::{ConfigError, Result};
use crate::geometry::{Dimensions, ScrollState, LINE_DELTA_SCALE};
use crate::header::{self, HeaderWidths, HEADER_TABLE_MARKER, MAIN_TABLE_MARKER, MARKER_ATTR};
use crate::lifecycle::{DragPhase, Lifecycle, Listeners, CONTAINER_EVENTS, SCROLLBAR_EVENTS};
use crate::scrollbar::{Orientation, ScrollbarTrack};

/// Quiet period after the last window resize before re-measuring.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(16);

/// Upper bound on render/commit rounds in one [`Container::flush`].
const MAX_FLUSH_PASSES: usize = 8;

/// Ids of the elements the container renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub container: String,
    pub main_table: String,
    pub header_table: String,
    pub vertical_track: String,
    pub vertical_thumb: String,
    pub horizontal_track: String,
    pub horizontal_thumb: String,
}

impl ElementIds {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            container: format!("{prefix}-container"),
            main_table: format!("{prefix}-main-table"),
            header_table: format!("{prefix}-header-table"),
            vertical_track: format!("{prefix}-vscroll"),
            vertical_thumb: format!("{prefix}-vscroll-thumb"),
            horizontal_track: format!("{prefix}-hscroll"),
            horizontal_thumb: format!("{prefix}-hscroll-thumb"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct TouchState {
    previous_x: f32,
    previous_y: f32,
}

/// A fixed-size viewport over one table, with a pinned header and custom
/// scrollbars.
///
/// The table is shifted by negative margins instead of native scrolling.
/// A copy of its header children is drawn on top, pinned to the top edge
/// and following the horizontal offset only.
#[derive(Debug)]
pub struct Container {
    config: ContainerConfig,
    children: Vec<Element>,
    ids: ElementIds,
    dimensions: Dimensions,
    scroll: ScrollState,
    lifecycle: Lifecycle,
    listeners: Listeners,
    touch: TouchState,
    resize: Debounce,
    vertical: ScrollbarTrack,
    horizontal: ScrollbarTrack,
    dirty: bool,
}

impl Container {
    pub fn new(config: ContainerConfig, table: Element) -> Self {
        Self::with_children(config, vec![table])
    }

    /// Build from raw children. Anything but a single `table` is rejected
    /// by [`Container::render`].
    pub fn with_children(config: ContainerConfig, children: Vec<Element>) -> Self {
        let ids = ElementIds::with_prefix(&config.id_prefix);
        let vertical =
            ScrollbarTrack::new(Orientation::Vertical, &ids, config.scrollbar_style.clone());
        let horizontal =
            ScrollbarTrack::new(Orientation::Horizontal, &ids, config.scrollbar_style.clone());

        Self {
            config,
            children,
            ids,
            dimensions: Dimensions::default(),
            scroll: ScrollState::default(),
            lifecycle: Lifecycle::Unmounted,
            listeners: Listeners::default(),
            touch: TouchState::default(),
            resize: Debounce::new(RESIZE_DEBOUNCE),
            vertical,
            horizontal,
            dirty: true,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    pub fn vertical_scrollbar(&self) -> &ScrollbarTrack {
        &self.vertical
    }

    pub fn horizontal_scrollbar(&self) -> &ScrollbarTrack {
        &self.horizontal
    }

    pub fn listens(&self, kind: EventKind) -> bool {
        self.listeners.contains(kind)
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Whether state changed since the last render.
    pub fn needs_render(&self) -> bool {
        self.dirty || self.vertical.is_dirty() || self.horizontal.is_dirty()
    }

    /// Replace the wrapped content, e.g. after rows were added.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.children = children;
        self.dirty = true;
    }

    fn table(&self) -> std::result::Result<&Element, ConfigError> {
        match self.children.as_slice() {
            [table] if table.tag == Tag::Table => Ok(table),
            [other] => Err(ConfigError::NotATable {
                tag: other.tag.to_string(),
            }),
            children => Err(ConfigError::ChildCount {
                found: children.len(),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    pub fn render(&self) -> Result<Element> {
        let table = self.table()?;
        let config = &self.config;
        let ScrollState {
            margin_top,
            margin_left,
            ..
        } = self.scroll;

        let mut internal = Style::new()
            .box_sizing(BoxSizing::BorderBox)
            .position(Position::Relative)
            .display(Display::InlineBlock)
            .overflow(Overflow::Hidden)
            .width(config.width)
            .height(config.height);
        if let Some(max_height) = config.max_height {
            internal = internal.max_height(max_height);
        }
        let wrapper_style = match &config.style {
            Some(style) => style.merge(&internal),
            None => internal,
        };

        let header_table = header::header_copy(table, &config.custom_header)
            .id(&self.ids.header_table)
            .attr(MARKER_ATTR, HEADER_TABLE_MARKER)
            .attr("role", "presentation")
            .attr("aria-hidden", "true")
            .style(
                table.style.merge(
                    &Style::new()
                        .border_spacing(0.0)
                        .position(Position::Absolute)
                        .top(0.0)
                        .left(-margin_left)
                        .z_index(1),
                ),
            );

        let main_table = table
            .clone()
            .id(&self.ids.main_table)
            .attr(MARKER_ATTR, MAIN_TABLE_MARKER)
            .style(
                table.style.merge(
                    &Style::new()
                        .border_spacing(0.0)
                        .margin_top(-margin_top)
                        .margin_left(-margin_left),
                ),
            );

        let mut wrapper = Element::div().id(&self.ids.container).style(wrapper_style);
        if let Some(class_name) = &config.class_name {
            wrapper = wrapper.class(class_name);
        }

        Ok(wrapper
            .child(header_table)
            .child(main_table)
            .child(self.vertical.render())
            .child(self.horizontal.render()))
    }

    fn clear_dirty(&mut self) {
        self.dirty = false;
        self.vertical.clear_dirty();
        self.horizontal.clear_dirty();
    }

    /// First render, commit and mount.
    pub fn attach(&mut self, host: &mut impl Host) -> Result<()> {
        let tree = self.render()?;
        self.clear_dirty();
        host.commit(tree);
        self.mount(&*host);
        self.on_committed(host);
        self.flush(host)?;
        Ok(())
    }

    /// Render and commit until nothing changes. Returns the number of
    /// commits made.
    pub fn flush(&mut self, host: &mut impl Host) -> Result<usize> {
        let mut passes = 0;
        while self.needs_render() {
            if passes == MAX_FLUSH_PASSES {
                log::warn!("[container] still dirty after {passes} commits, deferring");
                break;
            }
            let tree = self.render()?;
            self.clear_dirty();
            host.commit(tree);
            self.on_committed(host);
            passes += 1;
        }
        Ok(passes)
    }

    /// Post-commit work. All layout reads happen before the header writes.
    pub fn on_committed(&mut self, host: &mut impl Host) {
        let widths = HeaderWidths::read(&*host, &self.ids.main_table, &self.ids.header_table);
        let measured = self.measure(&*host);
        self.vertical.on_committed(&*host);
        self.horizontal.on_committed(&*host);

        if let Some(widths) = widths {
            widths.write(host);
        }
        if let Some(dimensions) = measured {
            if dimensions != self.dimensions {
                self.apply_dimensions(dimensions);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Take the first measurements and start listening. Call after the first
    /// commit.
    pub fn mount(&mut self, host: &impl Host) {
        if self.is_mounted() {
            log::warn!("[container] {} mounted twice", self.ids.container);
            return;
        }

        self.listeners.register(CONTAINER_EVENTS);
        self.listeners.register(SCROLLBAR_EVENTS);
        self.lifecycle = Lifecycle::Mounted(DragPhase::Idle);
        log::debug!("[container] {} mounted", self.ids.container);

        let dimensions = self.measure(host).unwrap_or_else(|| {
            log::warn!("[container] {} not found in host, using zero sizes", self.ids.container);
            Dimensions::default()
        });
        self.apply_dimensions(dimensions);
        self.vertical.calculate_dimensions(host);
        self.horizontal.calculate_dimensions(host);
    }

    /// Stop listening and drop any pending resize.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.listeners.remove_all();
        self.resize.cancel();
        self.touch = TouchState::default();
        self.vertical.on_pointer_up();
        self.horizontal.on_pointer_up();
        self.lifecycle = Lifecycle::Unmounted;
        log::debug!("[container] {} unmounted", self.ids.container);
    }

    // -------------------------------------------------------------------------
    // Dimensions
    // -------------------------------------------------------------------------

    fn measure(&self, host: &impl Host) -> Option<Dimensions> {
        let container = host.bounding_rect(&self.ids.container)?;
        let table = host.bounding_rect(&self.ids.main_table)?;
        Some(Dimensions::new(
            container.width,
            container.height,
            table.width,
            table.height,
        ))
    }

    /// Store new dimensions and pull the scroll position back into range.
    pub fn apply_dimensions(&mut self, dimensions: Dimensions) {
        if dimensions != self.dimensions {
            log::debug!(
                "[container] dimensions {}x{} over table {}x{}",
                dimensions.container_width,
                dimensions.container_height,
                dimensions.table_width,
                dimensions.table_height,
            );
            self.dimensions = dimensions;
            self.dirty = true;
        }
        self.set_scroll(self.scroll.clamped_to(&dimensions));
    }

    /// Re-measure and apply if anything changed. Returns whether it did.
    pub fn reevaluate_dimensions(&mut self, host: &impl Host) -> bool {
        match self.measure(host) {
            Some(dimensions) if dimensions != self.dimensions => {
                self.apply_dimensions(dimensions);
                true
            }
            _ => false,
        }
    }

    /// Copy header cell widths onto the pinned header. Returns the number of
    /// cells updated.
    pub fn refresh_headers(&mut self, host: &mut impl Host) -> usize {
        HeaderWidths::read(&*host, &self.ids.main_table, &self.ids.header_table)
            .map_or(0, |widths| widths.write(host))
    }

    fn set_scroll(&mut self, state: ScrollState) {
        if state != self.scroll {
            self.scroll = state;
            self.dirty = true;
        }
        self.vertical.set_fraction(state.vertical_fraction);
        self.horizontal.set_fraction(state.horizontal_fraction);
    }

    // -------------------------------------------------------------------------
    // Scroll input
    // -------------------------------------------------------------------------

    /// Scroll by a wheel delta. Movement past either end goes to the page.
    pub fn on_wheel(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        mode: DeltaMode,
        host: &mut impl Host,
    ) -> EventResult {
        let (dx, dy) = match mode {
            DeltaMode::Line => (delta_x * LINE_DELTA_SCALE, delta_y * LINE_DELTA_SCALE),
            DeltaMode::Pixel | DeltaMode::Page => (delta_x, delta_y),
        };
        self.scroll_by(dx, dy, host);
        EventResult::Consumed
    }

    pub fn on_touch_start(&mut self, x: f32, y: f32) -> EventResult {
        if !self.is_mounted() {
            return EventResult::Ignored;
        }
        self.touch = TouchState {
            previous_x: x,
            previous_y: y,
        };
        self.lifecycle = Lifecycle::Mounted(DragPhase::Dragging);
        log::trace!("[container] touch drag started at ({x}, {y})");
        EventResult::Ignored
    }

    pub fn on_touch_move(&mut self, x: f32, y: f32, host: &mut impl Host) -> EventResult {
        if !self.lifecycle.is_dragging() {
            return EventResult::Ignored;
        }
        let dx = self.touch.previous_x - x;
        let dy = self.touch.previous_y - y;
        self.touch = TouchState {
            previous_x: x,
            previous_y: y,
        };
        self.scroll_by(dx, dy, host);
        EventResult::Consumed
    }

    pub fn on_touch_end(&mut self) -> EventResult {
        if self.lifecycle.is_dragging() {
            self.lifecycle = Lifecycle::Mounted(DragPhase::Idle);
            log::trace!("[container] touch drag ended");
        }
        self.touch = TouchState::default();
        EventResult::Ignored
    }

    fn scroll_by(&mut self, dx: f32, dy: f32, host: &mut impl Host) {
        let scrolled = self.scroll.scrolled_by(dx, dy, &self.dimensions);
        if scrolled.has_overflow() {
            log::trace!(
                "[container] passing ({}, {}) to the page",
                scrolled.overflow_x,
                scrolled.overflow_y
            );
            host.scroll_window_by(scrolled.overflow_x, scrolled.overflow_y);
        }
        self.set_scroll(scrolled.state);
    }

    pub fn on_vertical_scroll(&mut self, fraction: f32) {
        self.set_scroll(self.scroll.with_vertical_fraction(fraction, &self.dimensions));
    }

    pub fn on_horizontal_scroll(&mut self, fraction: f32) {
        self.set_scroll(self.scroll.with_horizontal_fraction(fraction, &self.dimensions));
    }

    pub fn on_window_resize(&mut self, now: Instant) {
        self.resize.trigger(now);
    }

    /// Fire the debounced resize once its quiet period has passed. Returns
    /// whether dimensions changed.
    pub fn tick(&mut self, now: Instant, host: &impl Host) -> bool {
        if !self.resize.poll(now) {
            return false;
        }
        log::debug!("[container] resize settled, re-measuring");
        self.reevaluate_dimensions(host)
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Route a host event. Events without a registered listener are ignored.
    pub fn handle_event(&mut self, event: &Event, now: Instant, host: &mut impl Host) -> EventResult {
        if !self.listeners.contains(event.kind()) {
            return EventResult::Ignored;
        }

        match event {
            Event::Wheel {
                target,
                delta_x,
                delta_y,
                mode,
            } => {
                if !self.targets_table(&*host, target.as_deref()) {
                    return EventResult::Ignored;
                }
                self.on_wheel(*delta_x, *delta_y, *mode, host)
            }
            Event::TouchStart { target, x, y } => {
                if !self.targets_table(&*host, target.as_deref()) {
                    return EventResult::Ignored;
                }
                self.on_touch_start(*x, *y)
            }
            Event::TouchMove { x, y, .. } => self.on_touch_move(*x, *y, host),
            Event::TouchEnd { .. } | Event::TouchCancel { .. } => self.on_touch_end(),
            Event::Resize { .. } => {
                self.on_window_resize(now);
                EventResult::Ignored
            }
            Event::PointerDown {
                target: Some(target),
                x,
                y,
                button: MouseButton::Left,
            } => {
                if *target == self.vertical.thumb_id() {
                    self.vertical.on_pointer_down(*x, *y)
                } else if *target == self.horizontal.thumb_id() {
                    self.horizontal.on_pointer_down(*x, *y)
                } else {
                    EventResult::Ignored
                }
            }
            Event::PointerDown { .. } => EventResult::Ignored,
            Event::PointerMove { x, y } => {
                if let Some(fraction) = self.vertical.on_pointer_move(*x, *y) {
                    self.on_vertical_scroll(fraction);
                    EventResult::Consumed
                } else if let Some(fraction) = self.horizontal.on_pointer_move(*x, *y) {
                    self.on_horizontal_scroll(fraction);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::PointerUp { .. } => {
                let vertical = self.vertical.on_pointer_up();
                let horizontal = self.horizontal.on_pointer_up();
                if vertical.is_consumed() || horizontal.is_consumed() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::PointerOver { target } => {
                self.hover(target, true);
                EventResult::Ignored
            }
            Event::PointerOut { target } => {
                self.hover(target, false);
                EventResult::Ignored
            }
        }
    }

    fn hover(&mut self, target: &str, hovered: bool) {
        for track in [&mut self.vertical, &mut self.horizontal] {
            if target == track.track_id() || target == track.thumb_id() {
                track.set_hovered(hovered);
            }
        }
    }

    /// Whether `target` is the main table or inside it.
    fn targets_table(&self, host: &impl Host, target: Option<&str>) -> bool {
        let Some(target) = target else {
            return false;
        };
        host.root()
            .and_then(|root| find_element(root, &self.ids.main_table))
            .is_some_and(|table| query::contains_id(table, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabledom::CssSize;

    fn config() -> ContainerConfig {
        ContainerConfig::new(CssSize::Px(100.0), CssSize::Px(100.0))
    }

    #[test]
    fn test_render_rejects_child_count() {
        let empty = Container::with_children(config(), Vec::new());
        let err = empty.table().unwrap_err();
        assert_eq!(err, ConfigError::ChildCount { found: 0 });

        let two = Container::with_children(config(), vec![Element::table(), Element::table()]);
        assert_eq!(two.table().unwrap_err(), ConfigError::ChildCount { found: 2 });
    }

    #[test]
    fn test_render_rejects_non_table() {
        let container = Container::new(config(), Element::div());
        assert_eq!(
            container.table().unwrap_err(),
            ConfigError::NotATable { tag: "div".into() }
        );
    }

    #[test]
    fn test_ids_follow_prefix() {
        let ids = ElementIds::with_prefix("orders");
        assert_eq!(ids.container, "orders-container");
        assert_eq!(ids.vertical_thumb, "orders-vscroll-thumb");
        assert_eq!(ids.horizontal_track, "orders-hscroll");
    }
}
