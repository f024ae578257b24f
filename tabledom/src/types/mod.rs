mod color;
mod enums;
mod size;
mod style;

pub use color::Color;
pub use enums::{BoxSizing, Display, Overflow, Position};
pub use size::CssSize;
pub use style::Style;
