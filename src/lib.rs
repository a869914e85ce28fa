//! # kreativity-ui
//!
//! A retained-mode widget toolkit for games and tools that draw their own UI.
//!
//! Widgets live in a slotmap-backed tree. Geometry changes invalidate a node
//! and every ancestor; the next frame re-runs layout only where needed. The
//! canvas turns raw platform input into typed events, routes them by hit
//! test or keyboard focus, bubbles what nobody accepts, and keeps exactly one
//! focus holder.
//!
//! Rendering, text measurement, clipboard and cursor are supplied by the host
//! through the [`Backend`](backend::Backend) and [`Renderer`](render::Renderer)
//! traits.
//!
//! ## Core Systems
//!
//! - **[`widget`]**: `WidgetTree` arena, node attributes, invalidation, size negotiation
//! - **[`layout`]**: pluggable layout strategy trait and the absolute default
//! - **[`event`]**: raw input, typed events with an accepted flag, listener registries
//! - **[`canvas`]**: focus ownership, hit testing, input routing, per-frame update
//! - **[`document`]**: text buffer with caret, selection and undo history
//! - **[`widgets`]**: Label, IconPanel, TextField, Spinner
//! - **[`render`]**: colors, fonts, drawables, `FontMetrics` and `Renderer` traits
//! - **[`backend`]**: platform services and input sources
//! - **[`skin`]**: default styles for the built-in widgets
//! - **[`testing`]**: headless backend, recording renderer, `Pilot`, snapshot text
//! - **[`geometry`]**: Point, Size, Rect, Padding, Alignment primitives

// Foundation
pub mod geometry;

// Text model
pub mod document;

// Widget system
pub mod layout;
pub mod widget;
pub mod widgets;

// Events and routing
pub mod canvas;
pub mod event;

// Rendering and platform
pub mod backend;
pub mod render;
pub mod skin;

// Headless tooling
pub mod testing;

pub use canvas::{Canvas, CanvasConfig};
pub use widget::{TreeError, WidgetId, WidgetNode, WidgetTree};
