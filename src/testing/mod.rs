//! Headless testing framework: backend, recorder, Pilot, snapshot helpers.
//!
//! [`HeadlessBackend`] measures every glyph as 8×16 px and keeps the cursor
//! and clipboard in memory. [`RecordingRenderer`] captures draw calls. Use
//! the [`Pilot`] to drive a [`Canvas`](crate::canvas::Canvas) with scripted
//! input, and [`render_to_string`] to turn a frame into snapshot text.

pub mod backend;
pub mod pilot;
pub mod recorder;
pub mod snapshot;

pub use backend::{HeadlessBackend, HeadlessMetrics};
pub use pilot::Pilot;
pub use recorder::{DrawCommand, RecordingRenderer};
pub use snapshot::{commands_to_string, render_to_string, render_widget_to_string};
