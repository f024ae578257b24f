//! Custom scrollbar tracks drawn over the container edges.

mod style;
mod track;

pub use style::{ScrollbarStyle, DEFAULT_THUMB_COLOR, DEFAULT_TRACK_COLOR, RADIUS, THICKNESS};
pub use track::{thumb_size, Orientation, ScrollbarTrack, MIN_THUMB_SIZE};
