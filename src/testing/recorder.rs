//! A [`Renderer`] that records every call.

use crate::geometry::{Point, Rect};
use crate::render::{Color, Drawable, Font, Renderer};

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Translate(Point),
    BeginClip(Rect),
    EndClip,
    Drawable { drawable: Drawable, rect: Rect },
    Text { text: String, position: Point },
    Line { from: Point, to: Point },
    SetFont(Font),
    SetForeground(Color),
}

/// Records commands verbatim and tracks the translation and clip stack.
///
/// Clips narrower than zero in either dimension are refused, the way a real
/// scissor stack would.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    translation: Point,
    clip_depth: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Accumulated translation. Zero again after a balanced draw.
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Open clips. Zero again after a balanced draw.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Every drawn string, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn translate(&mut self, offset: Point) {
        self.translation = self.translation + offset;
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn begin_clip(&mut self, rect: Rect) -> bool {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return false;
        }
        self.clip_depth += 1;
        self.commands.push(DrawCommand::BeginClip(rect));
        true
    }

    fn end_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::EndClip);
    }

    fn draw_drawable(&mut self, drawable: &Drawable, rect: Rect) {
        self.commands.push(DrawCommand::Drawable { drawable: drawable.clone(), rect });
    }

    fn draw_text(&mut self, text: &str, position: Point) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), position });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn set_font(&mut self, font: &Font) {
        self.commands.push(DrawCommand::SetFont(font.clone()));
    }

    fn set_foreground(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetForeground(color));
    }
}
