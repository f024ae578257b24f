use tabledom::element::find_element;
use tabledom::{query, CssSize, Display, Element, EventResult, Host, Position, Style, Tag};

use super::style::{default_thumb, default_track, ScrollbarStyle, THICKNESS};
use crate::container::ElementIds;

/// Smallest thumb length in px, even when the track itself is shorter.
pub const MIN_THUMB_SIZE: f32 = 15.0;

/// Thumb length for a track of `container` px over `content` px of content:
/// `clamp(container² / content, 15, container)`, or `0` without content.
pub fn thumb_size(container: f32, content: f32) -> f32 {
    if content <= 0.0 {
        return 0.0;
    }
    (container * container / content)
        .min(container)
        .max(MIN_THUMB_SIZE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Pointer coordinate along this axis.
    fn along(self, x: f32, y: f32) -> f32 {
        match self {
            Self::Vertical => y,
            Self::Horizontal => x,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// Sizes read from the host along the track axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Measurement {
    container: f32,
    content: f32,
    /// Height of the main table's `thead`. Always 0 for horizontal tracks.
    header: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct DragState {
    is_moving: bool,
    previous: f32,
}

/// One scrollbar: a track along a container edge and a thumb inside it.
///
/// The container owns the scroll position; the track only turns pointer
/// drags into a new fraction ([`ScrollbarTrack::on_pointer_move`]) and
/// draws the fraction it is given.
#[derive(Debug, Clone)]
pub struct ScrollbarTrack {
    orientation: Orientation,
    track_id: String,
    thumb_id: String,
    container_id: String,
    table_id: String,
    style: ScrollbarStyle,
    measured: Measurement,
    thumb_size: f32,
    fraction: f32,
    focused: bool,
    drag: DragState,
    dirty: bool,
}

impl ScrollbarTrack {
    pub fn new(orientation: Orientation, ids: &ElementIds, style: Option<ScrollbarStyle>) -> Self {
        let (track_id, thumb_id) = match orientation {
            Orientation::Vertical => (&ids.vertical_track, &ids.vertical_thumb),
            Orientation::Horizontal => (&ids.horizontal_track, &ids.horizontal_thumb),
        };
        Self {
            orientation,
            track_id: track_id.clone(),
            thumb_id: thumb_id.clone(),
            container_id: ids.container.clone(),
            table_id: ids.main_table.clone(),
            style: style.unwrap_or_default(),
            measured: Measurement::default(),
            thumb_size: 0.0,
            fraction: 0.0,
            focused: false,
            drag: DragState::default(),
            dirty: true,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn track_id(&self) -> &str {
        &self.track_id
    }

    pub fn thumb_id(&self) -> &str {
        &self.thumb_id
    }

    /// Visible length along the axis (minus the header for vertical tracks).
    pub fn container_size(&self) -> f32 {
        self.measured.container
    }

    /// Content length along the axis (minus the header for vertical tracks).
    pub fn content_size(&self) -> f32 {
        self.measured.content
    }

    pub fn header_size(&self) -> f32 {
        self.measured.header
    }

    pub fn thumb_size(&self) -> f32 {
        self.thumb_size
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_moving
    }

    /// The track is drawn only when content strictly exceeds the container.
    pub fn is_scrollable(&self) -> bool {
        self.measured.content > self.measured.container
    }

    /// Distance the thumb can travel inside the track.
    pub fn moveable_distance(&self) -> f32 {
        (self.measured.container - self.thumb_size).max(0.0)
    }

    pub fn thumb_offset(&self) -> f32 {
        self.moveable_distance() * self.fraction
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // -------------------------------------------------------------------------
    // Measurement
    // -------------------------------------------------------------------------

    /// Re-measure and recompute the thumb length.
    pub fn calculate_dimensions(&mut self, host: &impl Host) {
        let measured = self.measure(host);
        self.apply_measurement(measured);
    }

    /// Run after every commit; recomputes only when a size changed.
    pub fn on_committed(&mut self, host: &impl Host) {
        let measured = self.measure(host);
        if measured != self.measured {
            self.apply_measurement(measured);
        }
    }

    fn measure(&self, host: &impl Host) -> Measurement {
        let container = host.bounding_rect(&self.container_id);
        let table = host.bounding_rect(&self.table_id);

        match self.orientation {
            Orientation::Vertical => {
                let header = self.header_height(host);
                Measurement {
                    container: container.map_or(0.0, |r| r.height) - header,
                    content: table.map_or(0.0, |r| r.height) - header,
                    header,
                }
            }
            Orientation::Horizontal => Measurement {
                container: container.map_or(0.0, |r| r.width),
                content: table.map_or(0.0, |r| r.width),
                header: 0.0,
            },
        }
    }

    fn header_height(&self, host: &impl Host) -> f32 {
        let thead_id = host
            .root()
            .and_then(|root| find_element(root, &self.table_id))
            .and_then(|table| query::find_by_tag(table, &Tag::Thead))
            .map(|thead| thead.id.clone());

        thead_id
            .and_then(|id| host.bounding_rect(&id))
            .map_or(0.0, |r| r.height)
    }

    fn apply_measurement(&mut self, measured: Measurement) {
        let thumb = thumb_size(measured.container, measured.content);
        log::debug!(
            "[scrollbar] {} track {}/{} px, thumb {thumb} px",
            self.orientation.name(),
            measured.container,
            measured.content,
        );
        if measured != self.measured || thumb != self.thumb_size {
            self.dirty = true;
        }
        self.measured = measured;
        self.thumb_size = thumb;
    }

    // -------------------------------------------------------------------------
    // State from the container
    // -------------------------------------------------------------------------

    /// Fraction to draw; set by the container after each scroll change.
    pub fn set_fraction(&mut self, fraction: f32) {
        if fraction != self.fraction {
            self.fraction = fraction;
            self.dirty = true;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered != self.focused {
            self.focused = hovered;
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Pointer drag
    // -------------------------------------------------------------------------

    /// Start dragging the thumb from pointer position `(x, y)`.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> EventResult {
        self.drag = DragState {
            is_moving: true,
            previous: self.orientation.along(x, y),
        };
        log::debug!("[scrollbar] {} drag started", self.orientation.name());
        EventResult::Consumed
    }

    /// Returns the new fraction while dragging, `None` otherwise.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<f32> {
        if !self.drag.is_moving {
            return None;
        }

        let position = self.orientation.along(x, y);
        let delta = position - self.drag.previous;
        let moveable = self.moveable_distance();
        let step = if moveable > 0.0 { delta / moveable } else { 0.0 };

        self.drag.previous = position;
        let fraction = (self.fraction + step).clamp(0.0, 1.0);
        self.set_fraction(fraction);
        log::trace!(
            "[scrollbar] {} drag by {delta} px to {fraction}",
            self.orientation.name()
        );
        Some(fraction)
    }

    /// End a drag. Consumes the event only if a drag was active.
    pub fn on_pointer_up(&mut self) -> EventResult {
        if !self.drag.is_moving {
            return EventResult::Ignored;
        }
        self.drag = DragState::default();
        log::debug!("[scrollbar] {} drag ended", self.orientation.name());
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    pub fn render(&self) -> Element {
        let track_geometry = match self.orientation {
            Orientation::Vertical => Style::new()
                .top(self.measured.header)
                .right(0.0)
                .bottom(0.0)
                .width(CssSize::Px(THICKNESS)),
            Orientation::Horizontal => Style::new()
                .left(0.0)
                .right(0.0)
                .bottom(0.0)
                .height(CssSize::Px(THICKNESS)),
        };
        let thumb_geometry = match self.orientation {
            Orientation::Vertical => Style::new()
                .top(self.thumb_offset())
                .left(0.0)
                .width(CssSize::Px(THICKNESS))
                .height(CssSize::Px(self.thumb_size)),
            Orientation::Horizontal => Style::new()
                .left(self.thumb_offset())
                .top(0.0)
                .width(CssSize::Px(self.thumb_size))
                .height(CssSize::Px(THICKNESS)),
        };

        // Caller records override the geometry. Only a hidden track overrides them.
        let mut track_style = default_track()
            .merge(&track_geometry.position(Position::Absolute))
            .merge(self.style.track(self.focused));
        if !self.is_scrollable() {
            track_style = track_style.display(Display::None);
        }
        let thumb_style = default_thumb()
            .merge(&thumb_geometry.position(Position::Absolute))
            .merge(self.style.thumb(self.focused));

        Element::div()
            .id(&self.track_id)
            .class(format!("rtc-scrollbar rtc-scrollbar-{}", self.orientation.name()))
            .style(track_style)
            .child(Element::div().id(&self.thumb_id).style(thumb_style))
    }
}
