//! Platform boundary.
//!
//! A [`Backend`] supplies text metrics, the mouse cursor, the clipboard and
//! the screen size. An [`InputSource`] yields [`RawInput`] for the canvas to
//! route. The headless implementation lives in [`crate::testing`].

use crate::event::RawInput;
use crate::geometry::Size;
use crate::render::FontMetrics;

/// Mouse cursor shapes the toolkit asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    #[default]
    Arrow,
    IBeam,
    Hand,
    HorizontalResize,
}

/// Services the toolkit needs from the host platform.
pub trait Backend {
    fn metrics(&self) -> &dyn FontMetrics;

    fn cursor(&self) -> Cursor;

    fn set_cursor(&self, cursor: Cursor);

    /// Current clipboard text, `None` when empty or unavailable.
    fn read_clipboard(&self) -> Option<String>;

    fn write_clipboard(&self, text: &str);

    fn screen_size(&self) -> Size;
}

/// Polled source of platform input.
pub trait InputSource {
    /// Next pending input, `None` when drained.
    fn poll(&mut self) -> Option<RawInput>;
}

impl InputSource for std::collections::VecDeque<RawInput> {
    fn poll(&mut self) -> Option<RawInput> {
        self.pop_front()
    }
}

impl InputSource for std::vec::IntoIter<RawInput> {
    fn poll(&mut self) -> Option<RawInput> {
        self.next()
    }
}
