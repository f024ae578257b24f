pub mod debounce;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod host;
pub mod layout;
pub mod query;
pub mod text;
pub mod types;

pub use debounce::Debounce;
pub use document::Document;
pub use element::{Content, Element, Tag};
pub use error::ParseError;
pub use event::{DeltaMode, Event, EventKind, EventResult, MouseButton};
pub use hit::hit_test;
pub use host::Host;
pub use layout::{LayoutMetrics, LayoutResult, Rect};
pub use types::*;
