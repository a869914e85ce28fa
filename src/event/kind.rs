//! Typed events delivered to widgets.

use crate::geometry::Point;

use super::input::{Key, Modifiers, MouseButton};

/// Pointer payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseData {
    pub button: Option<MouseButton>,
    /// Pointer position in screen space.
    pub position: Point,
    /// Pointer position in the receiving widget's local space.
    pub local: Point,
    /// Movement since the previous pointer sample.
    pub delta: Point,
    pub modifiers: Modifiers,
}

/// Keyboard payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyData {
    pub key: Key,
    pub modifiers: Modifiers,
}

/// Scroll payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollData {
    pub amount: f32,
    pub position: Point,
    pub modifiers: Modifiers,
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    MouseMoved(MouseData),
    MousePressed(MouseData),
    MouseReleased(MouseData),
    MouseDoubleClicked(MouseData),
    KeyPressed(KeyData),
    KeyReleased(KeyData),
    Scroll(ScrollData),
    /// Pointer entered the widget, screen position.
    Enter(Point),
    /// Pointer left the widget, screen position.
    Exit(Point),
    FocusGained,
    FocusLost,
}

/// Which listener registry an event kind is reported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFamily {
    Keyboard,
    Mouse,
    Focus,
}

impl EventKind {
    pub fn family(&self) -> EventFamily {
        match self {
            EventKind::KeyPressed(_) | EventKind::KeyReleased(_) => EventFamily::Keyboard,
            EventKind::FocusGained | EventKind::FocusLost => EventFamily::Focus,
            EventKind::MouseMoved(_)
            | EventKind::MousePressed(_)
            | EventKind::MouseReleased(_)
            | EventKind::MouseDoubleClicked(_)
            | EventKind::Scroll(_)
            | EventKind::Enter(_)
            | EventKind::Exit(_) => EventFamily::Mouse,
        }
    }

    /// The pointer payload, for pointer button/move events.
    pub fn mouse(&self) -> Option<&MouseData> {
        match self {
            EventKind::MouseMoved(m)
            | EventKind::MousePressed(m)
            | EventKind::MouseReleased(m)
            | EventKind::MouseDoubleClicked(m) => Some(m),
            _ => None,
        }
    }

    pub(crate) fn mouse_mut(&mut self) -> Option<&mut MouseData> {
        match self {
            EventKind::MouseMoved(m)
            | EventKind::MousePressed(m)
            | EventKind::MouseReleased(m)
            | EventKind::MouseDoubleClicked(m) => Some(m),
            _ => None,
        }
    }
}

/// An event plus its accepted flag.
///
/// Once accepted, an event stays accepted: dispatch stops bubbling it and
/// controls treat it as consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    kind: EventKind,
    accepted: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self { kind, accepted: false }
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut EventKind {
        &mut self.kind
    }

    /// Mark the event consumed. Idempotent.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

impl From<EventKind> for Event {
    fn from(kind: EventKind) -> Self {
        Event::new(kind)
    }
}
