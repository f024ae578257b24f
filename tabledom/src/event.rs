/// Input events with element targeting.
///
/// Coordinates are viewport pixels. `target` is the deepest element under the
/// pointer when the event was dispatched (see [`crate::hit_test`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse wheel or trackpad scroll.
    Wheel {
        target: Option<String>,
        delta_x: f32,
        delta_y: f32,
        mode: DeltaMode,
    },
    TouchStart {
        target: Option<String>,
        x: f32,
        y: f32,
    },
    TouchMove {
        target: Option<String>,
        x: f32,
        y: f32,
    },
    TouchEnd {
        target: Option<String>,
        x: f32,
        y: f32,
    },
    TouchCancel {
        target: Option<String>,
    },
    /// Mouse button pressed.
    PointerDown {
        target: Option<String>,
        x: f32,
        y: f32,
        button: MouseButton,
    },
    /// Pointer moved, with or without a button held.
    PointerMove { x: f32, y: f32 },
    /// Mouse button released.
    PointerUp {
        x: f32,
        y: f32,
        button: MouseButton,
    },
    /// Pointer entered an element.
    PointerOver { target: String },
    /// Pointer left an element.
    PointerOut { target: String },
    /// Window resized.
    Resize { width: f32, height: f32 },
}

/// Unit of wheel deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// Event type, used for listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Wheel,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerOver,
    PointerOut,
    Resize,
}

/// Outcome of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; the host must not run its default action.
    Consumed,
    /// Not handled; the host may run its default action.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Wheel { .. } => EventKind::Wheel,
            Self::TouchStart { .. } => EventKind::TouchStart,
            Self::TouchMove { .. } => EventKind::TouchMove,
            Self::TouchEnd { .. } => EventKind::TouchEnd,
            Self::TouchCancel { .. } => EventKind::TouchCancel,
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp { .. } => EventKind::PointerUp,
            Self::PointerOver { .. } => EventKind::PointerOver,
            Self::PointerOut { .. } => EventKind::PointerOut,
            Self::Resize { .. } => EventKind::Resize,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Wheel { target, .. }
            | Self::TouchStart { target, .. }
            | Self::TouchMove { target, .. }
            | Self::TouchEnd { target, .. }
            | Self::TouchCancel { target }
            | Self::PointerDown { target, .. } => target.as_deref(),
            Self::PointerOver { target } | Self::PointerOut { target } => Some(target),
            Self::PointerMove { .. } | Self::PointerUp { .. } | Self::Resize { .. } => None,
        }
    }

    /// Translate a terminal event, mapping one cell to `cell_width` x
    /// `cell_height` pixels. Wheel ticks arrive in line mode.
    ///
    /// Targets are left empty; resolve them with [`crate::hit_test`].
    pub fn from_crossterm(
        event: &crossterm::event::Event,
        cell_width: f32,
        cell_height: f32,
    ) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, MouseEventKind};

        match event {
            CtEvent::Resize(cols, rows) => Some(Self::Resize {
                width: *cols as f32 * cell_width,
                height: *rows as f32 * cell_height,
            }),
            CtEvent::Mouse(mouse) => {
                let x = mouse.column as f32 * cell_width;
                let y = mouse.row as f32 * cell_height;
                let wheel = |delta_x: f32, delta_y: f32| Self::Wheel {
                    target: None,
                    delta_x,
                    delta_y,
                    mode: DeltaMode::Line,
                };
                match mouse.kind {
                    MouseEventKind::ScrollDown => Some(wheel(0.0, 1.0)),
                    MouseEventKind::ScrollUp => Some(wheel(0.0, -1.0)),
                    MouseEventKind::ScrollRight => Some(wheel(1.0, 0.0)),
                    MouseEventKind::ScrollLeft => Some(wheel(-1.0, 0.0)),
                    MouseEventKind::Down(button) => Some(Self::PointerDown {
                        target: None,
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Up(button) => Some(Self::PointerUp {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        Some(Self::PointerMove { x, y })
                    }
                }
            }
            _ => None,
        }
    }

    /// Fill in the target of a pointer-positioned event.
    pub fn with_target(self, target: Option<String>) -> Self {
        match self {
            Self::Wheel {
                delta_x,
                delta_y,
                mode,
                ..
            } => Self::Wheel {
                target,
                delta_x,
                delta_y,
                mode,
            },
            Self::TouchStart { x, y, .. } => Self::TouchStart { target, x, y },
            Self::TouchMove { x, y, .. } => Self::TouchMove { target, x, y },
            Self::TouchEnd { x, y, .. } => Self::TouchEnd { target, x, y },
            Self::TouchCancel { .. } => Self::TouchCancel { target },
            Self::PointerDown { x, y, button, .. } => Self::PointerDown {
                target,
                x,
                y,
                button,
            },
            other => other,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
