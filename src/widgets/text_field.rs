//! Text field: a single-line editor over a [`Document`].
//!
//! Keyboard input maps onto document operations. Shift extends the
//! selection, Ctrl moves by word and triggers the clipboard and history
//! shortcuts (A, C, X, V, Z, Y). Pressing the pointer requests focus and
//! places the caret under it; dragging selects.
//!
//! The text scrolls horizontally so the caret stays inside the padded area.

use crate::backend::Cursor;
use crate::document::Document;
use crate::event::{Event, EventKind, Key, KeyData, MouseButton};
use crate::geometry::{Alignment, Padding, Point, Rect, Size};
use crate::render::{FontMetrics, Renderer};
use crate::skin::{Skin, TextFieldStyle};
use crate::widget::{ControlContext, DrawContext};

/// Editable single-line text.
#[derive(Debug, Clone)]
pub struct TextField {
    document: Document,
    style: TextFieldStyle,
    /// Horizontal scroll, always `<= 0`.
    text_offset: f32,
    hovered: bool,
    mouse_selecting: bool,
}

impl TextField {
    /// Default padding: 4 px left and right.
    pub const PADDING: Padding = Padding::horizontal_only(4.0, 4.0);

    pub fn new(skin: &Skin) -> Self {
        Self::from_style(skin.text_field.clone())
    }

    pub(crate) fn from_style(style: TextFieldStyle) -> Self {
        Self {
            document: Document::new(),
            style,
            text_offset: 0.0,
            hovered: false,
            mouse_selecting: false,
        }
    }

    /// Set the initial text (builder pattern).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> &str {
        self.document.text()
    }

    /// Replace the text. Caret returns to the start, history is dropped.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.document.set_text(text);
        self.text_offset = 0.0;
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn style(&self) -> &TextFieldStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TextFieldStyle) {
        self.style = style;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn text_offset(&self) -> f32 {
        self.text_offset
    }

    pub(crate) fn content_size(&self, metrics: &dyn FontMetrics) -> Size {
        let width = metrics.text_bounds(&self.style.font, self.document.text()).width;
        Size::new(width, metrics.line_height(&self.style.font))
    }

    // -----------------------------------------------------------------------
    // Event handling
    // -----------------------------------------------------------------------

    pub(crate) fn handle(&mut self, ctx: &mut ControlContext<'_>, event: &mut Event) {
        match *event.kind() {
            EventKind::MousePressed(mouse) => {
                ctx.request_focus();
                if mouse.button == Some(MouseButton::Left) {
                    let index = self.index_at(ctx.metrics(), ctx.padding(), ctx.size(), mouse.local.x);
                    if mouse.modifiers.shift() {
                        self.begin_extending();
                        self.document.set_caret_position(index);
                    } else {
                        self.document.end_selection();
                        self.document.set_caret_position(index);
                        self.document.clear_selection();
                        self.document.begin_selection();
                    }
                    self.mouse_selecting = true;
                }
                event.accept();
            }
            EventKind::MouseMoved(mouse) if self.mouse_selecting => {
                let index = self.index_at(ctx.metrics(), ctx.padding(), ctx.size(), mouse.local.x);
                self.document.set_caret_position(index);
                event.accept();
            }
            EventKind::MouseReleased(_) if self.mouse_selecting => {
                self.mouse_selecting = false;
                self.document.end_selection();
                event.accept();
            }
            EventKind::MouseDoubleClicked(_) => {
                self.mouse_selecting = false;
                self.document.end_selection();
                self.document.select_all();
                event.accept();
            }
            EventKind::Enter(_) => {
                self.hovered = true;
                ctx.backend().set_cursor(Cursor::IBeam);
            }
            EventKind::Exit(_) => {
                self.hovered = false;
                ctx.backend().set_cursor(Cursor::Arrow);
            }
            EventKind::KeyPressed(key) => {
                if self.handle_key(ctx, key) {
                    event.accept();
                }
            }
            EventKind::FocusLost => {
                self.mouse_selecting = false;
                self.document.end_selection();
            }
            _ => {}
        }
        self.ensure_caret_visible(ctx.metrics(), ctx.padding(), ctx.size());
    }

    /// Apply one key press. Returns whether the key was consumed.
    pub(crate) fn handle_key(&mut self, ctx: &mut ControlContext<'_>, data: KeyData) -> bool {
        let shift = data.modifiers.shift();
        let ctrl = data.modifiers.ctrl();
        match data.key {
            Key::Char(c) if ctrl => return self.shortcut(ctx, c),
            Key::Char(c) if !c.is_control() => self.document.insert_char(c),
            Key::Backspace => self.document.delete_char_before_caret(),
            Key::Delete => self.document.delete_char_after_caret(),
            Key::Left if ctrl => self.navigate(shift, Document::move_caret_previous_word),
            Key::Right if ctrl => self.navigate(shift, Document::move_caret_next_word),
            Key::Left => self.navigate(shift, Document::move_caret_left),
            Key::Right => self.navigate(shift, Document::move_caret_right),
            Key::Home => self.navigate(shift, Document::move_caret_home),
            Key::End => self.navigate(shift, Document::move_caret_end),
            _ => return false,
        }
        true
    }

    fn shortcut(&mut self, ctx: &mut ControlContext<'_>, c: char) -> bool {
        match c.to_ascii_lowercase() {
            'a' => self.document.select_all(),
            'c' => self.copy(ctx),
            'x' => {
                self.copy(ctx);
                self.document.delete_selection();
            }
            'v' => {
                if let Some(text) = ctx.backend().read_clipboard() {
                    let line: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
                    self.document.insert_text(&line);
                }
            }
            'z' => {
                self.document.undo();
            }
            'y' => {
                self.document.redo();
            }
            _ => return false,
        }
        true
    }

    fn copy(&self, ctx: &ControlContext<'_>) {
        if self.document.has_selection() {
            ctx.backend().write_clipboard(self.document.selected_text());
        }
    }

    /// Run a caret move. With `extend` the selection grows from its far edge,
    /// otherwise it collapses at the new caret.
    fn navigate(&mut self, extend: bool, step: fn(&mut Document)) {
        if extend {
            self.begin_extending();
            step(&mut self.document);
            self.document.end_selection();
        } else {
            self.document.end_selection();
            step(&mut self.document);
            self.document.clear_selection();
        }
    }

    fn begin_extending(&mut self) {
        let doc = &self.document;
        if doc.is_selecting() {
            return;
        }
        let anchor = if !doc.has_selection() {
            doc.caret_position()
        } else if doc.caret_position() == doc.selection_begin() {
            doc.selection_end()
        } else {
            doc.selection_begin()
        };
        self.document.begin_selection_at(anchor);
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Width of the first `chars` characters.
    fn prefix_width(&self, metrics: &dyn FontMetrics, chars: usize) -> f32 {
        let text = self.document.text();
        let end = text.char_indices().nth(chars).map(|(b, _)| b).unwrap_or(text.len());
        metrics.text_bounds(&self.style.font, &text[..end]).width
    }

    /// Top-left of the text in local space, scroll applied.
    fn text_origin(&self, metrics: &dyn FontMetrics, padding: Padding, size: Size) -> Point {
        let mut origin = Alignment::MiddleLeft.align(self.content_size(metrics), size.to_rect());
        origin.x += padding.left + self.text_offset;
        origin
    }

    /// Caret index nearest to local x coordinate `x`.
    fn index_at(&self, metrics: &dyn FontMetrics, padding: Padding, size: Size, x: f32) -> usize {
        let x = x - self.text_origin(metrics, padding, size).x;
        let text = self.document.text();
        let boundaries = text.char_indices().map(|(b, _)| b).chain(std::iter::once(text.len()));
        let mut best = (0, f32::INFINITY);
        for (index, byte) in boundaries.enumerate() {
            let distance = (metrics.text_bounds(&self.style.font, &text[..byte]).width - x).abs();
            if distance < best.1 {
                best = (index, distance);
            }
        }
        best.0
    }

    fn ensure_caret_visible(&mut self, metrics: &dyn FontMetrics, padding: Padding, size: Size) {
        let visible = size.width - padding.horizontal();
        if visible <= 0.0 {
            return;
        }
        let text_width = self.content_size(metrics).width;
        if text_width + self.text_offset < visible {
            self.text_offset = (visible - text_width).min(0.0);
        }
        let caret_x = self.prefix_width(metrics, self.document.caret_position());
        if caret_x + self.text_offset > visible {
            self.text_offset = visible - caret_x;
        }
        if caret_x + self.text_offset < 0.0 {
            self.text_offset = -caret_x;
        }
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    pub(crate) fn draw(&self, ctx: &DrawContext<'_>, renderer: &mut dyn Renderer) {
        let style = &self.style;
        let background = if ctx.focused {
            &style.background_focused
        } else if self.hovered {
            &style.background_hovered
        } else {
            &style.background_normal
        };
        renderer.draw_drawable(background, ctx.bounds());

        let origin = self.text_origin(ctx.metrics, ctx.padding, ctx.size);
        let line_height = ctx.metrics.line_height(&style.font);
        let doc = &self.document;

        if doc.has_selection() {
            let x0 = origin.x + self.prefix_width(ctx.metrics, doc.selection_begin());
            let x1 = origin.x + self.prefix_width(ctx.metrics, doc.selection_end());
            renderer.draw_drawable(&style.selection, Rect::new(x0, origin.y, x1 - x0, line_height));
        }

        renderer.set_font(&style.font);
        renderer.set_foreground(style.foreground);
        renderer.draw_text(doc.text(), origin);

        if ctx.focused {
            let caret_x = origin.x + self.prefix_width(ctx.metrics, doc.caret_position());
            renderer.set_foreground(style.caret);
            renderer.draw_line(
                Point::new(caret_x, origin.y),
                Point::new(caret_x, origin.y + line_height),
            );
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
