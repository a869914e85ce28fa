//! Event system: raw platform input, typed widget events, listener registries.

pub mod input;
pub mod kind;
pub mod listener;

#[cfg(feature = "crossterm")]
pub use input::Unsupported;
pub use input::{Key, KeyInput, Modifiers, MouseButton, RawInput};
pub use kind::{Event, EventFamily, EventKind, KeyData, MouseData, ScrollData};
pub use listener::{ListenerId, ListenerSet, Listeners, WidgetNotice};
