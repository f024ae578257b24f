//! A table viewport that keeps its header row pinned while the body scrolls,
//! with custom-drawn scrollbars in place of native ones.
//!
//! The [`Container`] renders into any [`tabledom::Host`]. Each frame is:
//!
//! ```ignore
//! let mut doc = Document::new(1280.0, 720.0);
//! let mut container = Container::new(config, table);
//! container.attach(&mut doc)?;
//!
//! // for every input event
//! container.handle_event(&event, Instant::now(), &mut doc);
//! container.tick(Instant::now(), &mut doc);
//! container.flush(&mut doc)?;
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod geometry;
pub mod header;
pub mod lifecycle;
pub mod scrollbar;

pub use config::ContainerConfig;
pub use container::{Container, ElementIds};
pub use error::{ConfigError, Error, Result};
pub use geometry::{Dimensions, ScrollState};
pub use lifecycle::{DragPhase, Lifecycle};
pub use scrollbar::{Orientation, ScrollbarStyle, ScrollbarTrack};
