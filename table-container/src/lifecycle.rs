//! Mount state and listener bookkeeping.

use std::collections::HashSet;

use tabledom::EventKind;

/// Events the container listens to on its table and the window.
pub const CONTAINER_EVENTS: [EventKind; 6] = [
    EventKind::Wheel,
    EventKind::TouchStart,
    EventKind::TouchMove,
    EventKind::TouchEnd,
    EventKind::TouchCancel,
    EventKind::Resize,
];

/// Events the scrollbar tracks listen to.
pub const SCROLLBAR_EVENTS: [EventKind; 5] = [
    EventKind::PointerDown,
    EventKind::PointerMove,
    EventKind::PointerUp,
    EventKind::PointerOver,
    EventKind::PointerOut,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Unmounted,
    Mounted(DragPhase),
}

/// Touch drag sub-state of a mounted container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

impl Lifecycle {
    pub fn is_mounted(self) -> bool {
        matches!(self, Self::Mounted(_))
    }

    pub fn is_dragging(self) -> bool {
        self == Self::Mounted(DragPhase::Dragging)
    }
}

/// Registered event listeners.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    registered: HashSet<EventKind>,
}

impl Listeners {
    pub fn register(&mut self, kinds: impl IntoIterator<Item = EventKind>) {
        self.registered.extend(kinds);
    }

    pub fn remove_all(&mut self) {
        self.registered.clear();
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.registered.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_remove() {
        let mut listeners = Listeners::default();
        listeners.register(CONTAINER_EVENTS);
        listeners.register(SCROLLBAR_EVENTS);
        assert_eq!(listeners.len(), 11);
        assert!(listeners.contains(EventKind::Resize));

        listeners.remove_all();
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_lifecycle_predicates() {
        assert!(!Lifecycle::Unmounted.is_mounted());
        assert!(Lifecycle::Mounted(DragPhase::Idle).is_mounted());
        assert!(!Lifecycle::Mounted(DragPhase::Idle).is_dragging());
        assert!(Lifecycle::Mounted(DragPhase::Dragging).is_dragging());
    }
}
