use serde::{Deserialize, Serialize};

use super::{BoxSizing, Color, CssSize, Display, Overflow, Position};

/// Inline style of an element.
///
/// Every property is optional; unset properties fall back to the layout
/// engine's defaults. Deserializes from a camelCase map of CSS properties,
/// e.g. `{"backgroundColor": "#E3E5EB", "borderRadius": 4}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    pub display: Option<Display>,
    pub position: Option<Position>,
    pub box_sizing: Option<BoxSizing>,
    pub overflow: Option<Overflow>,

    pub width: Option<CssSize>,
    pub height: Option<CssSize>,
    pub min_width: Option<f32>,
    pub max_height: Option<CssSize>,

    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub z_index: Option<i32>,

    pub margin_top: Option<f32>,
    pub margin_left: Option<f32>,
    pub border_spacing: Option<f32>,

    #[serde(alias = "background")]
    pub background_color: Option<Color>,
    #[serde(alias = "foreground")]
    pub color: Option<Color>,
    pub border_radius: Option<f32>,
    pub opacity: Option<f32>,
}

macro_rules! overlay {
    ($base:expr, $over:expr, $($field:ident),+ $(,)?) => {
        Style {
            $($field: $over.$field.clone().or_else(|| $base.$field.clone()),)+
        }
    };
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine two styles; properties set on `over` win.
    pub fn merge(&self, over: &Style) -> Style {
        overlay!(
            self,
            over,
            display,
            position,
            box_sizing,
            overflow,
            width,
            height,
            min_width,
            max_height,
            top,
            right,
            bottom,
            left,
            z_index,
            margin_top,
            margin_left,
            border_spacing,
            background_color,
            color,
            border_radius,
            opacity,
        )
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Some(Display::None)
    }

    pub fn is_absolute(&self) -> bool {
        self.position == Some(Position::Absolute)
    }

    pub fn is_border_box(&self) -> bool {
        self.box_sizing == Some(BoxSizing::BorderBox)
    }

    // Box
    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn box_sizing(mut self, box_sizing: BoxSizing) -> Self {
        self.box_sizing = Some(box_sizing);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    // Size
    pub fn width(mut self, width: CssSize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: CssSize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn max_height(mut self, max_height: CssSize) -> Self {
        self.max_height = Some(max_height);
        self
    }

    // Offsets
    pub fn top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn bottom(mut self, bottom: f32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn left(mut self, left: f32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn margin_top(mut self, margin_top: f32) -> Self {
        self.margin_top = Some(margin_top);
        self
    }

    pub fn margin_left(mut self, margin_left: f32) -> Self {
        self.margin_left = Some(margin_left);
        self
    }

    pub fn border_spacing(mut self, spacing: f32) -> Self {
        self.border_spacing = Some(spacing);
        self
    }

    // Visual
    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}
