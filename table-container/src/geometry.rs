//! Scroll range math shared by the container and its scrollbars.

/// Wheel deltas reported in lines are multiplied by this to get pixels.
pub const LINE_DELTA_SCALE: f32 = 10.0;

/// Measured sizes of the container box and the wrapped table, in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub container_width: f32,
    pub container_height: f32,
    pub table_width: f32,
    pub table_height: f32,
}

impl Dimensions {
    pub fn new(container_width: f32, container_height: f32, table_width: f32, table_height: f32) -> Self {
        Self {
            container_width,
            container_height,
            table_width,
            table_height,
        }
    }

    pub fn max_scroll_top(&self) -> f32 {
        max_scrollable(self.table_height, self.container_height)
    }

    pub fn max_scroll_left(&self) -> f32 {
        max_scrollable(self.table_width, self.container_width)
    }
}

/// How far content of size `content` can move inside `viewport`. Never negative.
pub fn max_scrollable(content: f32, viewport: f32) -> f32 {
    (content - viewport).max(0.0)
}

/// Part of `unclamped` that falls outside `[0, max]`: negative below the
/// range, positive above it, zero inside.
pub fn overflow(unclamped: f32, max: f32) -> f32 {
    if unclamped < 0.0 {
        unclamped
    } else if unclamped > max {
        unclamped - max
    } else {
        0.0
    }
}

/// Offset and fraction of one axis. Always built together so they agree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axis {
    pub margin: f32,
    pub fraction: f32,
}

impl Axis {
    /// Clamp `margin` into `[0, max]` and derive the fraction.
    pub fn at_margin(margin: f32, max: f32) -> Self {
        let max = max.max(0.0);
        let margin = if margin.is_nan() { 0.0 } else { margin.clamp(0.0, max) };
        let fraction = if max > 0.0 { margin / max } else { 0.0 };
        Self { margin, fraction }
    }

    pub fn at_fraction(fraction: f32, max: f32) -> Self {
        Self::at_margin(fraction * max, max)
    }
}

/// Scroll position of the table inside the container.
///
/// Margins are the px the table is shifted up and left. `0 <= margin <= max`
/// and `fraction = margin / max` (or `0` when `max == 0`) hold for every value
/// produced by the methods below.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub margin_top: f32,
    pub margin_left: f32,
    pub vertical_fraction: f32,
    pub horizontal_fraction: f32,
}

/// Result of moving a [`ScrollState`] by a delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrolled {
    pub state: ScrollState,
    /// Horizontal movement that did not fit in the range.
    pub overflow_x: f32,
    /// Vertical movement that did not fit in the range.
    pub overflow_y: f32,
}

impl Scrolled {
    pub fn has_overflow(&self) -> bool {
        self.overflow_x != 0.0 || self.overflow_y != 0.0
    }
}

impl ScrollState {
    fn from_axes(vertical: Axis, horizontal: Axis) -> Self {
        Self {
            margin_top: vertical.margin,
            margin_left: horizontal.margin,
            vertical_fraction: vertical.fraction,
            horizontal_fraction: horizontal.fraction,
        }
    }

    pub fn vertical(&self) -> Axis {
        Axis {
            margin: self.margin_top,
            fraction: self.vertical_fraction,
        }
    }

    pub fn horizontal(&self) -> Axis {
        Axis {
            margin: self.margin_left,
            fraction: self.horizontal_fraction,
        }
    }

    /// Same margins, pulled back into the ranges of `dimensions`.
    pub fn clamped_to(&self, dimensions: &Dimensions) -> Self {
        Self::from_axes(
            Axis::at_margin(self.margin_top, dimensions.max_scroll_top()),
            Axis::at_margin(self.margin_left, dimensions.max_scroll_left()),
        )
    }

    /// Move by `(dx, dy)` px, reporting what did not fit.
    pub fn scrolled_by(&self, dx: f32, dy: f32, dimensions: &Dimensions) -> Scrolled {
        let max_top = dimensions.max_scroll_top();
        let max_left = dimensions.max_scroll_left();
        let top = self.margin_top + dy;
        let left = self.margin_left + dx;

        Scrolled {
            state: Self::from_axes(Axis::at_margin(top, max_top), Axis::at_margin(left, max_left)),
            overflow_x: overflow(left, max_left),
            overflow_y: overflow(top, max_top),
        }
    }

    pub fn with_vertical_fraction(&self, fraction: f32, dimensions: &Dimensions) -> Self {
        Self::from_axes(
            Axis::at_fraction(fraction, dimensions.max_scroll_top()),
            self.horizontal(),
        )
    }

    pub fn with_horizontal_fraction(&self, fraction: f32, dimensions: &Dimensions) -> Self {
        Self::from_axes(
            self.vertical(),
            Axis::at_fraction(fraction, dimensions.max_scroll_left()),
        )
    }
}
