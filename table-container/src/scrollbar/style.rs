use serde::Deserialize;
use tabledom::{Color, Style};

/// Track color when no caller style is given (`#E3E5EB`).
pub const DEFAULT_TRACK_COLOR: Color = Color::rgb(0xE3, 0xE5, 0xEB);
/// Thumb color when no caller style is given (`#888C97`).
pub const DEFAULT_THUMB_COLOR: Color = Color::rgb(0x88, 0x8C, 0x97);
/// Track and thumb thickness in px.
pub const THICKNESS: f32 = 8.0;
pub const RADIUS: f32 = 4.0;

/// Caller overrides for the scrollbar look.
///
/// `background` styles the track, `foreground` the thumb. While the pointer
/// is over the track the `_focus` records are used instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollbarStyle {
    pub background: Style,
    pub background_focus: Style,
    pub foreground: Style,
    pub foreground_focus: Style,
}

impl ScrollbarStyle {
    pub fn track(&self, focused: bool) -> &Style {
        if focused {
            &self.background_focus
        } else {
            &self.background
        }
    }

    pub fn thumb(&self, focused: bool) -> &Style {
        if focused {
            &self.foreground_focus
        } else {
            &self.foreground
        }
    }
}

pub(super) fn default_track() -> Style {
    Style::new()
        .background(DEFAULT_TRACK_COLOR)
        .border_radius(RADIUS)
}

pub(super) fn default_thumb() -> Style {
    Style::new()
        .background(DEFAULT_THUMB_COLOR)
        .border_radius(RADIUS)
}
