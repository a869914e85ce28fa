//! Raw platform input, decoupled from any windowing or terminal backend.
//!
//! Defines [`RawInput`], [`KeyInput`] and supporting types. The canvas turns
//! raw input into typed [`Event`](super::Event)s. With the `crossterm`
//! feature, terminal events convert via `TryFrom` so the rest of the crate
//! never depends on crossterm directly.

use std::ops::{BitAnd, BitOr};

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    pub fn ctrl(self) -> bool {
        self.contains(Modifiers::CTRL)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyInput
// ---------------------------------------------------------------------------

/// A key with the modifiers held when it changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self { key, modifiers: Modifiers::NONE }
    }
}

// ---------------------------------------------------------------------------
// MouseButton
// ---------------------------------------------------------------------------

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// ---------------------------------------------------------------------------
// RawInput
// ---------------------------------------------------------------------------

/// One unit of platform input, positions in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    MouseMoved { position: Point, modifiers: Modifiers },
    MouseDown { button: MouseButton, position: Point, modifiers: Modifiers },
    MouseUp { button: MouseButton, position: Point, modifiers: Modifiers },
    /// Positive amounts scroll down.
    Scroll { amount: f32, position: Point, modifiers: Modifiers },
    KeyDown(KeyInput),
    KeyUp(KeyInput),
    Resize { width: f32, height: f32 },
}

impl RawInput {
    /// The pointer position carried by this input, if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            RawInput::MouseMoved { position, .. }
            | RawInput::MouseDown { position, .. }
            | RawInput::MouseUp { position, .. }
            | RawInput::Scroll { position, .. } => Some(position),
            RawInput::KeyDown(_) | RawInput::KeyUp(_) | RawInput::Resize { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// TryFrom<crossterm> conversions
// ---------------------------------------------------------------------------

#[cfg(feature = "crossterm")]
mod crossterm_input {
    use super::*;
    use crossterm::event as ct;

    fn convert_modifiers(m: ct::KeyModifiers) -> Modifiers {
        let mut out = Modifiers::NONE;
        if m.contains(ct::KeyModifiers::SHIFT) {
            out = out | Modifiers::SHIFT;
        }
        if m.contains(ct::KeyModifiers::CONTROL) {
            out = out | Modifiers::CTRL;
        }
        if m.contains(ct::KeyModifiers::ALT) {
            out = out | Modifiers::ALT;
        }
        out
    }

    fn convert_key(code: ct::KeyCode) -> Option<Key> {
        let key = match code {
            ct::KeyCode::Char(c) => Key::Char(c),
            ct::KeyCode::Enter => Key::Enter,
            ct::KeyCode::Esc => Key::Escape,
            ct::KeyCode::Tab => Key::Tab,
            ct::KeyCode::BackTab => Key::BackTab,
            ct::KeyCode::Backspace => Key::Backspace,
            ct::KeyCode::Delete => Key::Delete,
            ct::KeyCode::Left => Key::Left,
            ct::KeyCode::Right => Key::Right,
            ct::KeyCode::Up => Key::Up,
            ct::KeyCode::Down => Key::Down,
            ct::KeyCode::Home => Key::Home,
            ct::KeyCode::End => Key::End,
            ct::KeyCode::PageUp => Key::PageUp,
            ct::KeyCode::PageDown => Key::PageDown,
            ct::KeyCode::F(n) => Key::F(n),
            _ => return None,
        };
        Some(key)
    }

    fn convert_button(b: ct::MouseButton) -> MouseButton {
        match b {
            ct::MouseButton::Left => MouseButton::Left,
            ct::MouseButton::Right => MouseButton::Right,
            ct::MouseButton::Middle => MouseButton::Middle,
        }
    }

    /// Terminal events with no counterpart (focus, paste, unsupported keys).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
    #[error("terminal event has no raw input equivalent")]
    pub struct Unsupported;

    impl TryFrom<ct::Event> for RawInput {
        type Error = Unsupported;

        /// Terminal cells map to one unit each; drags become pointer moves.
        fn try_from(event: ct::Event) -> Result<Self, Self::Error> {
            match event {
                ct::Event::Key(ke) => {
                    let key = convert_key(ke.code).ok_or(Unsupported)?;
                    let input = KeyInput::new(key, convert_modifiers(ke.modifiers));
                    Ok(match ke.kind {
                        ct::KeyEventKind::Release => RawInput::KeyUp(input),
                        ct::KeyEventKind::Press | ct::KeyEventKind::Repeat => {
                            RawInput::KeyDown(input)
                        }
                    })
                }
                ct::Event::Mouse(me) => {
                    let position = Point::new(f32::from(me.column), f32::from(me.row));
                    let modifiers = convert_modifiers(me.modifiers);
                    Ok(match me.kind {
                        ct::MouseEventKind::Down(b) => {
                            RawInput::MouseDown { button: convert_button(b), position, modifiers }
                        }
                        ct::MouseEventKind::Up(b) => {
                            RawInput::MouseUp { button: convert_button(b), position, modifiers }
                        }
                        ct::MouseEventKind::Drag(_) | ct::MouseEventKind::Moved => {
                            RawInput::MouseMoved { position, modifiers }
                        }
                        ct::MouseEventKind::ScrollUp => {
                            RawInput::Scroll { amount: -1.0, position, modifiers }
                        }
                        ct::MouseEventKind::ScrollDown => {
                            RawInput::Scroll { amount: 1.0, position, modifiers }
                        }
                        _ => return Err(Unsupported),
                    })
                }
                ct::Event::Resize(w, h) => {
                    Ok(RawInput::Resize { width: f32::from(w), height: f32::from(h) })
                }
                _ => Err(Unsupported),
            }
        }
    }

}

#[cfg(feature = "crossterm")]
pub use crossterm_input::Unsupported;

// ===========================================================================
// Tests
// ===========================================================================
