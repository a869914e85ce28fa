//! Drawing collaborators.
//!
//! The toolkit never rasterises anything itself. Widgets describe what to
//! paint through a [`Renderer`], and measure text through [`FontMetrics`].
//! Both are supplied by the embedding backend.

use crate::geometry::{Point, Rect, Size};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

// ---------------------------------------------------------------------------
// Font / Drawable
// ---------------------------------------------------------------------------

/// A font reference. Backends resolve `family` to real glyph data.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size }
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::new("sans", 14.0)
    }
}

/// Something that fills a rectangle: a flat color or a named skin image.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Drawable {
    #[default]
    Empty,
    Solid(Color),
    /// Nine-patch or texture region, resolved by the backend.
    Image(String),
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Text measurement.
pub trait FontMetrics {
    /// Bounding size of `text` laid out on one line.
    fn text_bounds(&self, font: &Font, text: &str) -> Size;

    /// Height of one line of text, including for empty strings.
    fn line_height(&self, font: &Font) -> f32;
}

/// Immediate-mode drawing sink.
///
/// Coordinates are relative to the current translation, which the widget
/// tree pushes and pops around each node.
pub trait Renderer {
    fn translate(&mut self, offset: Point);

    /// Start clipping to `rect`. Returns `false` when the clip region is
    /// empty, in which case no matching [`end_clip`](Self::end_clip) is
    /// expected.
    fn begin_clip(&mut self, rect: Rect) -> bool;

    fn end_clip(&mut self);

    fn draw_drawable(&mut self, drawable: &Drawable, rect: Rect);

    fn draw_text(&mut self, text: &str, position: Point);

    fn draw_line(&mut self, from: Point, to: Point);

    fn set_font(&mut self, font: &Font);

    fn set_foreground(&mut self, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::TRANSPARENT.a, 0);
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn drawable_defaults_to_empty() {
        assert_eq!(Drawable::default(), Drawable::Empty);
    }
}
