//! In-memory backend with fixed-width metrics.

use std::cell::{Cell, RefCell};

use crate::backend::{Backend, Cursor};
use crate::geometry::Size;
use crate::render::{Font, FontMetrics};

/// Monospaced metrics: every character is 8 px wide, every line 16 px tall.
///
/// The font is ignored, which keeps test expectations simple arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessMetrics;

impl HeadlessMetrics {
    pub const CHAR_WIDTH: f32 = 8.0;
    pub const LINE_HEIGHT: f32 = 16.0;
}

impl FontMetrics for HeadlessMetrics {
    fn text_bounds(&self, _font: &Font, text: &str) -> Size {
        Size::new(text.chars().count() as f32 * Self::CHAR_WIDTH, Self::LINE_HEIGHT)
    }

    fn line_height(&self, _font: &Font) -> f32 {
        Self::LINE_HEIGHT
    }
}

/// A [`Backend`] that keeps the cursor and clipboard in memory.
#[derive(Debug)]
pub struct HeadlessBackend {
    screen: Cell<Size>,
    cursor: Cell<Cursor>,
    clipboard: RefCell<Option<String>>,
}

impl HeadlessBackend {
    pub fn new(screen: Size) -> Self {
        Self {
            screen: Cell::new(screen),
            cursor: Cell::new(Cursor::Arrow),
            clipboard: RefCell::new(None),
        }
    }

    /// Pretend the host window changed size.
    pub fn set_screen_size(&self, size: Size) {
        self.screen.set(size);
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl Backend for HeadlessBackend {
    fn metrics(&self) -> &dyn FontMetrics {
        &HeadlessMetrics
    }

    fn cursor(&self) -> Cursor {
        self.cursor.get()
    }

    fn set_cursor(&self, cursor: Cursor) {
        self.cursor.set(cursor);
    }

    fn read_clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone().filter(|text| !text.is_empty())
    }

    fn write_clipboard(&self, text: &str) {
        *self.clipboard.borrow_mut() = Some(text.to_owned());
    }

    fn screen_size(&self) -> Size {
        self.screen.get()
    }
}
