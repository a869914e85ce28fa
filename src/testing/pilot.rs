//! Pilot: programmatic interaction with a headless canvas.
//!
//! The `Pilot` owns a [`Canvas`] on top of a [`HeadlessBackend`] and provides
//! methods to simulate user input (key presses, clicks, drags, resize),
//! advance frames and render to text for snapshot testing.

use std::rc::Rc;

use crate::canvas::{Canvas, CanvasConfig};
use crate::event::{Key, KeyInput, Modifiers, MouseButton, RawInput};
use crate::geometry::{Point, Size};
use crate::widget::{TreeError, WidgetId, WidgetNode, WidgetTree};

use super::backend::HeadlessBackend;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless canvas driver for testing.
///
/// # Examples
///
/// ```ignore
/// use kreativity_ui::testing::Pilot;
/// use kreativity_ui::event::Key;
///
/// let mut pilot = Pilot::new(320.0, 200.0);
/// pilot.press_key(Key::Tab);
/// pilot.tick();
/// ```
pub struct Pilot {
    backend: Rc<HeadlessBackend>,
    canvas: Canvas,
}

impl Pilot {
    /// Frame time used by [`tick`](Self::tick), in seconds.
    pub const FRAME: f32 = 1.0 / 60.0;

    /// Create a headless canvas with the given screen size.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, CanvasConfig::default())
    }

    pub fn with_config(width: f32, height: f32, config: CanvasConfig) -> Self {
        let backend = Rc::new(HeadlessBackend::new(Size::new(width, height)));
        let canvas = Canvas::with_config(backend.clone(), config);
        Self { backend, canvas }
    }

    // ── Building ─────────────────────────────────────────────────────

    /// Create `node` and attach it under `parent`.
    pub fn spawn(&mut self, parent: WidgetId, node: WidgetNode) -> Result<WidgetId, TreeError> {
        let tree = self.canvas.tree_mut();
        let id = tree.create(node);
        tree.add(parent, id)?;
        Ok(id)
    }

    /// Create `node` and attach it to the canvas root.
    ///
    /// # Panics
    ///
    /// Never in practice: a freshly created node has no parent and cannot
    /// be an ancestor of the root.
    pub fn spawn_root(&mut self, node: WidgetNode) -> WidgetId {
        let root = self.canvas.root();
        self.spawn(root, node).expect("fresh node attaches to root")
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Feed a raw input. Returns whether a widget accepted it.
    pub fn feed(&mut self, input: RawInput) -> bool {
        self.canvas.feed(input)
    }

    /// Simulate a key press and release with no modifiers.
    pub fn press_key(&mut self, key: Key) -> bool {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press and release with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let input = KeyInput::new(key, modifiers);
        let accepted = self.feed(RawInput::KeyDown(input));
        self.feed(RawInput::KeyUp(input));
        accepted
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Move the pointer to `(x, y)`.
    pub fn hover(&mut self, x: f32, y: f32) -> bool {
        self.feed(RawInput::MouseMoved { position: Point::new(x, y), modifiers: Modifiers::NONE })
    }

    /// Simulate a left click at `(x, y)`.
    pub fn click(&mut self, x: f32, y: f32) {
        self.click_with(MouseButton::Left, x, y);
    }

    pub fn click_with(&mut self, button: MouseButton, x: f32, y: f32) {
        let position = Point::new(x, y);
        let modifiers = Modifiers::NONE;
        self.hover(x, y);
        self.feed(RawInput::MouseDown { button, position, modifiers });
        self.feed(RawInput::MouseUp { button, position, modifiers });
    }

    /// Press the left button at `from`, move to `to` in one step, release.
    pub fn drag(&mut self, from: Point, to: Point) {
        let modifiers = Modifiers::NONE;
        let button = MouseButton::Left;
        self.hover(from.x, from.y);
        self.feed(RawInput::MouseDown { button, position: from, modifiers });
        self.feed(RawInput::MouseMoved { position: to, modifiers });
        self.feed(RawInput::MouseUp { button, position: to, modifiers });
    }

    /// Simulate a host window resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.backend.set_screen_size(Size::new(width, height));
        self.feed(RawInput::Resize { width, height });
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Advance one frame: validate and settle pending requests.
    pub fn tick(&mut self) {
        self.canvas.update(Self::FRAME);
    }

    /// Advance the clock by `seconds` in one step.
    pub fn advance(&mut self, seconds: f32) {
        self.canvas.update(seconds);
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn tree(&self) -> &WidgetTree {
        self.canvas.tree()
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        self.canvas.tree_mut()
    }

    pub fn backend(&self) -> &HeadlessBackend {
        &self.backend
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.canvas.focused()
    }

    // ── Render helpers ───────────────────────────────────────────────

    /// Draw the canvas and return the transcript.
    pub fn render_to_text(&self) -> String {
        super::snapshot::render_to_string(&self.canvas)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Backend, Cursor};
    use crate::geometry::Rect;
    use crate::skin::Skin;
    use crate::widgets::{Label, TextField};

    fn field(pilot: &mut Pilot, rect: Rect) -> WidgetId {
        let node = WidgetNode::new(TextField::new(&Skin::default())).with_geometry(rect);
        pilot.spawn_root(node)
    }

    fn text_of(pilot: &Pilot, id: WidgetId) -> String {
        pilot.tree().control(id).unwrap().as_text_field().unwrap().text().to_owned()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_sizes_root_to_screen() {
        let pilot = Pilot::new(320.0, 200.0);
        let root = pilot.canvas().root();
        assert_eq!(pilot.tree().geometry(root).unwrap().size(), Size::new(320.0, 200.0));
        assert_eq!(pilot.focused(), None);
    }

    #[test]
    fn resize_updates_backend_and_root() {
        let mut pilot = Pilot::new(320.0, 200.0);
        pilot.resize(640.0, 480.0);
        assert_eq!(pilot.backend().screen_size(), Size::new(640.0, 480.0));
        let root = pilot.canvas().root();
        assert_eq!(pilot.tree().geometry(root).unwrap().size(), Size::new(640.0, 480.0));
    }

    #[test]
    fn spawn_root_attaches_under_root() {
        let mut pilot = Pilot::new(320.0, 200.0);
        let id = pilot.spawn_root(WidgetNode::panel());
        let root = pilot.canvas().root();
        assert_eq!(pilot.tree().parent(id), Some(root));
        assert!(pilot.tree().is_attached(id));
    }

    // ── Typing ───────────────────────────────────────────────────────

    #[test]
    fn click_then_type() {
        let mut pilot = Pilot::new(320.0, 200.0);
        let id = field(&mut pilot, Rect::new(10.0, 10.0, 120.0, 20.0));
        pilot.click(20.0, 20.0);
        pilot.type_text("hello");
        assert_eq!(text_of(&pilot, id), "hello");
    }

    #[test]
    fn type_text_without_focus_changes_nothing() {
        let mut pilot = Pilot::new(320.0, 200.0);
        let id = field(&mut pilot, Rect::new(10.0, 10.0, 120.0, 20.0));
        pilot.type_text("hello");
        assert_eq!(text_of(&pilot, id), "");
    }

    #[test]
    fn tab_moves_between_fields() {
        let mut pilot = Pilot::new(320.0, 200.0);
        let a = field(&mut pilot, Rect::new(0.0, 0.0, 100.0, 20.0));
        let b = field(&mut pilot, Rect::new(0.0, 30.0, 100.0, 20.0));
        pilot.press_key(Key::Tab);
        pilot.type_text("a");
        pilot.press_key(Key::Tab);
        pilot.type_text("b");
        assert_eq!(text_of(&pilot, a), "a");
        assert_eq!(text_of(&pilot, b), "b");
    }

    // ── Pointer ──────────────────────────────────────────────────────

    #[test]
    fn hover_sets_ibeam_over_field() {
        let mut pilot = Pilot::new(320.0, 200.0);
        field(&mut pilot, Rect::new(0.0, 0.0, 100.0, 20.0));
        pilot.hover(5.0, 5.0);
        assert_eq!(pilot.backend().cursor(), Cursor::IBeam);
        pilot.hover(200.0, 150.0);
        assert_eq!(pilot.backend().cursor(), Cursor::Arrow);
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn render_to_text_lists_labels() {
        let mut pilot = Pilot::new(100.0, 50.0);
        let label = Label::new("Hi", &Skin::default());
        pilot.spawn_root(WidgetNode::new(label).with_position(Point::new(4.0, 4.0)));
        let text = pilot.render_to_text();
        assert!(text.contains("text \"Hi\" @ 4,4"), "{text}");
    }
}
