//! Spinner: a numeric text field adjusted by dragging.
//!
//! Left-dragging changes the value by `increment` per pixel of horizontal
//! movement. Right-clicking resets it to zero. A left click without a drag
//! focuses the field for typing; Enter or Escape commits the typed text.
//!
//! Edits are reported through [`SpinnerEdit`] listeners. A drag, a reset or
//! a click-then-type session is bracketed by `Started` and `Stopped`.
//! `ValueChanged` fires only when the value actually changes.

use crate::event::{Event, EventKind, Key, ListenerId, Listeners, MouseButton};
use crate::geometry::Padding;
use crate::render::Renderer;
use crate::skin::Skin;
use crate::widget::{ControlContext, DrawContext};

use super::text_field::TextField;

/// Edit lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinnerEdit {
    Started,
    ValueChanged(f32),
    Stopped,
}

/// Drag-adjustable number field.
#[derive(Debug)]
pub struct Spinner {
    field: TextField,
    value: f32,
    increment: f32,
    listeners: Listeners<SpinnerEdit>,
    drag_started: bool,
    was_dragged: bool,
}

impl Spinner {
    /// Default padding. The right side leaves room for the drag arrows.
    pub const PADDING: Padding = Padding::new(0.0, 17.0, 0.0, 4.0);

    pub const DEFAULT_INCREMENT: f32 = 0.1;

    pub fn new(skin: &Skin) -> Self {
        Self {
            field: TextField::from_style(skin.spinner.clone()).with_text(format_value(0.0)),
            value: 0.0,
            increment: Self::DEFAULT_INCREMENT,
            listeners: Listeners::new(),
            drag_started: false,
            was_dragged: false,
        }
    }

    /// Set the per-pixel drag increment (builder pattern).
    pub fn with_increment(mut self, increment: f32) -> Self {
        self.increment = increment;
        self
    }

    /// Set the starting value (builder pattern). Fires no listeners.
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self.field.set_text(format_value(value));
        self
    }

    /// The text field showing the value.
    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Change the value, refresh the text and notify `ValueChanged`.
    ///
    /// Setting the current value again does nothing.
    pub fn set_value(&mut self, value: f32) {
        if value == self.value {
            return;
        }
        self.value = value;
        self.field.set_text(format_value(value));
        tracing::trace!(target: "kreativity_ui::spinner", value, "value changed");
        self.listeners.notify(&SpinnerEdit::ValueChanged(value));
    }

    pub fn increment(&self) -> f32 {
        self.increment
    }

    pub fn set_increment(&mut self, increment: f32) {
        self.increment = increment;
    }

    /// Register an edit listener.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&SpinnerEdit) + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Parse `text` as the new value.
    ///
    /// Surrounding whitespace is ignored. On success the value is set and
    /// `true` returned; either way the field ends up showing the formatted
    /// current value.
    pub fn commit_text(&mut self, text: &str) -> bool {
        let parsed = text.trim().parse::<f32>().ok().filter(|v| v.is_finite());
        match parsed {
            Some(value) => self.set_value(value),
            None => {
                tracing::debug!(target: "kreativity_ui::spinner", text, "rejected spinner input");
            }
        }
        self.field.set_text(format_value(self.value));
        parsed.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_started
    }

    pub(crate) fn handle(&mut self, ctx: &mut ControlContext<'_>, event: &mut Event) {
        match *event.kind() {
            EventKind::MousePressed(mouse) => {
                ctx.clear_focus();
                match mouse.button {
                    Some(MouseButton::Right) => {
                        self.listeners.notify(&SpinnerEdit::Started);
                        self.set_value(0.0);
                        self.listeners.notify(&SpinnerEdit::Stopped);
                    }
                    Some(MouseButton::Left) => {
                        self.drag_started = true;
                        self.was_dragged = false;
                        self.listeners.notify(&SpinnerEdit::Started);
                    }
                    _ => {}
                }
                event.accept();
            }
            EventKind::MouseMoved(mouse) if self.drag_started => {
                self.was_dragged = true;
                self.set_value(self.value + self.increment * mouse.delta.x);
                event.accept();
            }
            EventKind::MouseReleased(mouse) => {
                if self.drag_started {
                    self.drag_started = false;
                    if self.was_dragged {
                        self.listeners.notify(&SpinnerEdit::Stopped);
                    } else if mouse.button == Some(MouseButton::Left) {
                        // The edit stays open until the typed text is committed.
                        ctx.request_focus();
                        self.field.document_mut().select_all();
                    }
                }
                event.accept();
            }
            EventKind::KeyPressed(key) if matches!(key.key, Key::Enter | Key::Escape) => {
                let text = self.field.text().to_owned();
                self.commit_text(&text);
                self.listeners.notify(&SpinnerEdit::Stopped);
                ctx.clear_focus();
                event.accept();
            }
            _ => self.field.handle(ctx, event),
        }
    }

    pub(crate) fn draw(&self, ctx: &DrawContext<'_>, renderer: &mut dyn Renderer) {
        self.field.draw(ctx, renderer);
    }
}

/// Format with at most two decimals, trimming trailing zeros.
pub fn format_value(value: f32) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
