//! Canvas: the root of a widget hierarchy and the owner of focus.
//!
//! The [`Canvas`] turns [`RawInput`] from the platform into typed events and
//! routes them:
//!
//! - pointer input goes to the front-most widget under the pointer, or to
//!   the widget that captured the press until the button is released;
//! - keyboard input goes to the focus holder;
//! - an event nobody accepts bubbles up through the ancestors.
//!
//! Focus lives here and nowhere else. Widgets ask for it through the tree's
//! request queue, which the canvas drains after every dispatch and every
//! frame. Moving focus always delivers `FocusLost` to the old holder before
//! `FocusGained` reaches the new one.

pub mod config;
pub mod focus;
pub mod hit;

use std::rc::Rc;

pub use config::CanvasConfig;
pub use focus::FocusChain;
pub use hit::HitMap;

use crate::backend::{Backend, InputSource};
use crate::event::{
    Event, EventKind, Key, KeyData, KeyInput, Modifiers, MouseButton, MouseData, RawInput,
    ScrollData,
};
use crate::geometry::{Point, Size};
use crate::render::Renderer;
use crate::widget::{Request, WidgetId, WidgetTree};

/// A press remembered for double-click detection.
#[derive(Debug, Clone, Copy)]
struct Click {
    target: WidgetId,
    button: MouseButton,
    time: f32,
}

/// Root orchestrator: tree, focus, hover, capture and the frame clock.
#[derive(Debug)]
pub struct Canvas {
    tree: WidgetTree,
    config: CanvasConfig,
    focus_chain: FocusChain,
    focused: Option<WidgetId>,
    hovered: Option<WidgetId>,
    captured: Option<(WidgetId, MouseButton)>,
    pointer: Point,
    last_click: Option<Click>,
    clock: f32,
}

impl Canvas {
    pub fn new(backend: Rc<dyn Backend>) -> Self {
        Self::with_config(backend, CanvasConfig::default())
    }

    pub fn with_config(backend: Rc<dyn Backend>, config: CanvasConfig) -> Self {
        Self {
            tree: WidgetTree::new(backend),
            config,
            focus_chain: FocusChain::new(),
            focused: None,
            hovered: None,
            captured: None,
            pointer: Point::ZERO,
            last_click: None,
            clock: 0.0,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Mutable access to the tree. Structural changes made here are
    /// reconciled with focus and hover on the next `feed` or `update`.
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    pub fn root(&self) -> WidgetId {
        self.tree.root()
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    pub fn hovered(&self) -> Option<WidgetId> {
        self.hovered
    }

    /// The widget holding the pointer while a button is down.
    pub fn captured(&self) -> Option<WidgetId> {
        self.captured.map(|(id, _)| id)
    }

    /// Last known pointer position in screen space.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    /// Give keyboard focus to `id`.
    ///
    /// Returns `false` when the widget is unknown, detached or disabled.
    /// Re-requesting the current holder succeeds without any events.
    pub fn request_focus(&mut self, id: WidgetId) -> bool {
        if !self.tree.can_take_focus(id) {
            tracing::trace!(target: "kreativity_ui::canvas", ?id, "focus refused");
            return false;
        }
        if self.focused == Some(id) {
            return true;
        }
        if let Some(previous) = self.focused.take() {
            self.tree.handle(previous, &mut Event::new(EventKind::FocusLost));
        }
        self.focused = Some(id);
        self.tree.handle(id, &mut Event::new(EventKind::FocusGained));
        tracing::debug!(target: "kreativity_ui::canvas", ?id, "focus moved");
        true
    }

    /// Drop keyboard focus. Idempotent.
    pub fn clear_focus(&mut self) {
        if let Some(previous) = self.focused.take() {
            self.tree.handle(previous, &mut Event::new(EventKind::FocusLost));
            tracing::debug!(target: "kreativity_ui::canvas", ?previous, "focus cleared");
        }
    }

    /// Move focus along the tab order. Returns the new holder.
    pub fn focus_next(&mut self) -> Option<WidgetId> {
        self.focus_chain.rebuild(&self.tree, self.focused);
        let next = self.focus_chain.focus_next()?;
        self.request_focus(next).then_some(next)
    }

    /// Move focus backwards along the tab order. Returns the new holder.
    pub fn focus_previous(&mut self) -> Option<WidgetId> {
        self.focus_chain.rebuild(&self.tree, self.focused);
        let previous = self.focus_chain.focus_previous()?;
        self.request_focus(previous).then_some(previous)
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Route one platform input. Returns whether any widget accepted it.
    ///
    /// Tree changes made since the last call are settled first, so input
    /// never reaches a widget that already left the canvas.
    pub fn feed(&mut self, input: RawInput) -> bool {
        self.process_requests();
        let accepted = match input {
            RawInput::MouseMoved { position, modifiers } => self.mouse_moved(position, modifiers),
            RawInput::MouseDown { button, position, modifiers } => {
                self.mouse_down(button, position, modifiers)
            }
            RawInput::MouseUp { button, position, modifiers } => {
                self.mouse_up(button, position, modifiers)
            }
            RawInput::Scroll { amount, position, modifiers } => {
                self.move_pointer(position);
                match self.hovered {
                    Some(target) => {
                        let data = ScrollData { amount, position, modifiers };
                        self.bubble(target, EventKind::Scroll(data))
                    }
                    None => false,
                }
            }
            RawInput::KeyDown(key) => self.key_down(key),
            RawInput::KeyUp(KeyInput { key, modifiers }) => match self.focused {
                Some(target) => self.bubble(target, EventKind::KeyReleased(KeyData { key, modifiers })),
                None => false,
            },
            RawInput::Resize { width, height } => {
                self.resize(width, height);
                true
            }
        };
        self.process_requests();
        accepted
    }

    /// Feed every pending input from `source`. Returns how many were routed.
    pub fn pump(&mut self, source: &mut dyn InputSource) -> usize {
        let mut count = 0;
        while let Some(input) = source.poll() {
            self.feed(input);
            count += 1;
        }
        count
    }

    fn mouse_moved(&mut self, position: Point, modifiers: Modifiers) -> bool {
        let delta = position - self.pointer;
        self.move_pointer(position);
        let target = self.captured().or(self.hovered);
        match target {
            Some(target) => {
                let data = Self::mouse_data(None, position, delta, modifiers);
                self.bubble(target, EventKind::MouseMoved(data))
            }
            None => false,
        }
    }

    fn mouse_down(&mut self, button: MouseButton, position: Point, modifiers: Modifiers) -> bool {
        let delta = position - self.pointer;
        self.move_pointer(position);
        let Some(target) = self.hovered else {
            self.last_click = None;
            if self.config.clear_focus_on_empty_click {
                self.clear_focus();
            }
            return false;
        };
        self.captured = Some((target, button));

        let data = Self::mouse_data(Some(button), position, delta, modifiers);
        let mut accepted = self.bubble(target, EventKind::MousePressed(data));

        if self.is_double_click(target, button) {
            self.last_click = None;
            accepted |= self.bubble(target, EventKind::MouseDoubleClicked(data));
        } else {
            self.last_click = Some(Click { target, button, time: self.clock });
        }

        if !accepted && self.config.clear_focus_on_empty_click {
            self.clear_focus();
        }
        accepted
    }

    fn mouse_up(&mut self, button: MouseButton, position: Point, modifiers: Modifiers) -> bool {
        let delta = position - self.pointer;
        self.move_pointer(position);
        let target = match self.captured {
            Some((id, held)) if held == button => {
                self.captured = None;
                Some(id)
            }
            _ => self.hovered,
        };
        let Some(target) = target else { return false };
        let data = Self::mouse_data(Some(button), position, delta, modifiers);
        self.bubble(target, EventKind::MouseReleased(data))
    }

    fn key_down(&mut self, input: KeyInput) -> bool {
        let KeyInput { key, modifiers } = input;
        let is_tab = matches!(key, Key::Tab | Key::BackTab);
        let holder_wants_tab = self
            .focused
            .and_then(|id| self.tree.node(id))
            .is_some_and(|node| node.accepts_tab_input());

        if is_tab && self.config.tab_navigation && !holder_wants_tab {
            let backwards = key == Key::BackTab || modifiers.shift();
            let moved = if backwards { self.focus_previous() } else { self.focus_next() };
            return moved.is_some();
        }

        match self.focused {
            Some(target) => self.bubble(target, EventKind::KeyPressed(KeyData { key, modifiers })),
            None => false,
        }
    }

    fn is_double_click(&self, target: WidgetId, button: MouseButton) -> bool {
        self.last_click.is_some_and(|click| {
            click.target == target
                && click.button == button
                && self.clock - click.time <= self.config.double_click_interval
        })
    }

    /// Record the pointer position and deliver Enter/Exit when the widget
    /// under it changes.
    fn move_pointer(&mut self, position: Point) {
        self.pointer = position;
        let under = HitMap::build(&self.tree).node_at(position);
        self.set_hovered(under);
    }

    fn set_hovered(&mut self, under: Option<WidgetId>) {
        if under == self.hovered {
            return;
        }
        let position = self.pointer;
        if let Some(old) = self.hovered.take() {
            self.tree.handle(old, &mut Event::new(EventKind::Exit(position)));
        }
        self.hovered = under;
        if let Some(new) = under {
            self.tree.handle(new, &mut Event::new(EventKind::Enter(position)));
        }
        tracing::trace!(target: "kreativity_ui::canvas", ?under, "hover changed");
    }

    fn mouse_data(
        button: Option<MouseButton>,
        position: Point,
        delta: Point,
        modifiers: Modifiers,
    ) -> MouseData {
        MouseData { button, position, local: position, delta, modifiers }
    }

    /// Deliver `kind` to `target`, then to each ancestor until accepted.
    ///
    /// Pointer payloads get their local position rewritten for every
    /// receiver.
    fn bubble(&mut self, target: WidgetId, kind: EventKind) -> bool {
        let mut event = Event::new(kind);
        for id in self.tree.bubble_path(target) {
            if let Some(mouse) = event.kind_mut().mouse_mut() {
                mouse.local = self.tree.screen_to_local(id, mouse.position);
            }
            if self.tree.handle(id, &mut event) {
                tracing::trace!(target: "kreativity_ui::canvas", ?id, "event accepted");
                return true;
            }
        }
        false
    }

    // -----------------------------------------------------------------------
    // Requests
    // -----------------------------------------------------------------------

    /// Carry out everything widgets queued, then drop references to
    /// widgets that left the canvas.
    fn process_requests(&mut self) {
        loop {
            let requests = self.tree.drain_requests();
            if requests.is_empty() {
                break;
            }
            for request in requests {
                match request {
                    Request::Focus(id) => {
                        self.request_focus(id);
                    }
                    Request::ClearFocus => self.clear_focus(),
                    Request::Detached(id) => {
                        tracing::debug!(target: "kreativity_ui::canvas", ?id, "subtree detached");
                    }
                }
            }
        }
        self.forget_detached();
    }

    fn forget_detached(&mut self) {
        if self.focused.is_some_and(|id| !self.tree.is_attached(id)) {
            self.clear_focus();
        }
        if self.hovered.is_some_and(|id| !self.tree.is_attached(id)) {
            self.hovered = None;
        }
        if self.captured.is_some_and(|(id, _)| !self.tree.is_attached(id)) {
            self.captured = None;
        }
        if self.last_click.is_some_and(|click| !self.tree.is_attached(click.target)) {
            self.last_click = None;
        }
    }

    // -----------------------------------------------------------------------
    // Frame
    // -----------------------------------------------------------------------

    /// Advance the clock, validate invalid widgets, then settle requests.
    pub fn update(&mut self, dt: f32) {
        self.clock += dt;
        let root = self.tree.root();
        self.tree.update(root, dt);
        self.process_requests();
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.tree.draw(self.tree.root(), renderer);
    }

    /// Resize the root to the new screen size.
    pub fn resize(&mut self, width: f32, height: f32) {
        let root = self.tree.root();
        self.tree.set_size(root, Size::new(width, height));
        tracing::debug!(target: "kreativity_ui::canvas", width, height, "canvas resized");
    }

    /// Seconds accumulated through [`update`](Self::update).
    pub fn clock(&self) -> f32 {
        self.clock
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::Rect;
    use crate::skin::Skin;
    use crate::testing::HeadlessBackend;
    use crate::widget::WidgetNode;
    use crate::widgets::TextField;

    type Log = Rc<RefCell<Vec<(WidgetId, &'static str)>>>;

    fn canvas() -> Canvas {
        Canvas::new(Rc::new(HeadlessBackend::default()))
    }

    fn add(canvas: &mut Canvas, parent: WidgetId, node: WidgetNode) -> WidgetId {
        let tree = canvas.tree_mut();
        let id = tree.create(node);
        tree.add(parent, id).unwrap();
        id
    }

    fn watch(canvas: &mut Canvas, id: WidgetId, log: &Log) {
        let set = canvas.tree_mut().listeners_mut(id).unwrap();
        let l = log.clone();
        set.focus.subscribe(move |e| {
            let name = match e.kind() {
                EventKind::FocusGained => "gained",
                _ => "lost",
            };
            l.borrow_mut().push((id, name));
        });
        let l = log.clone();
        set.mouse.subscribe(move |e| {
            let name = match e.kind() {
                EventKind::Enter(_) => "enter",
                EventKind::Exit(_) => "exit",
                EventKind::MousePressed(_) => "pressed",
                EventKind::MouseReleased(_) => "released",
                EventKind::MouseDoubleClicked(_) => "double",
                EventKind::MouseMoved(_) => "moved",
                _ => "other",
            };
            l.borrow_mut().push((id, name));
        });
    }

    fn down(x: f32, y: f32) -> RawInput {
        RawInput::MouseDown { button: MouseButton::Left, position: Point::new(x, y), modifiers: Modifiers::NONE }
    }

    fn up(x: f32, y: f32) -> RawInput {
        RawInput::MouseUp { button: MouseButton::Left, position: Point::new(x, y), modifiers: Modifiers::NONE }
    }

    fn moved(x: f32, y: f32) -> RawInput {
        RawInput::MouseMoved { position: Point::new(x, y), modifiers: Modifiers::NONE }
    }

    fn key(key: Key) -> RawInput {
        RawInput::KeyDown(KeyInput::plain(key))
    }

    // ── Focus ────────────────────────────────────────────────────────

    #[test]
    fn focus_exclusivity_orders_lost_before_gained() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel());
        let b = add(&mut c, root, WidgetNode::panel());
        let log: Log = Rc::default();
        watch(&mut c, a, &log);
        watch(&mut c, b, &log);

        assert!(c.request_focus(a));
        assert!(c.request_focus(b));
        assert_eq!(*log.borrow(), vec![(a, "gained"), (a, "lost"), (b, "gained")]);
        assert!(!c.tree().node(a).unwrap().is_focused());
        assert!(c.tree().node(b).unwrap().is_focused());
        assert_eq!(c.focused(), Some(b));
    }

    #[test]
    fn refocusing_holder_is_silent() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel());
        let log: Log = Rc::default();
        watch(&mut c, a, &log);
        c.request_focus(a);
        c.request_focus(a);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn detached_or_disabled_cannot_take_focus() {
        let mut c = canvas();
        let loose = c.tree_mut().create(WidgetNode::panel());
        assert!(!c.request_focus(loose));

        let root = c.root();
        let off = add(&mut c, root, WidgetNode::panel().enabled(false));
        assert!(!c.request_focus(off));
        assert_eq!(c.focused(), None);
    }

    #[test]
    fn clear_focus_is_idempotent() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel());
        let log: Log = Rc::default();
        watch(&mut c, a, &log);
        c.request_focus(a);
        c.clear_focus();
        c.clear_focus();
        assert_eq!(*log.borrow(), vec![(a, "gained"), (a, "lost")]);
    }

    #[test]
    fn removing_focused_subtree_clears_focus() {
        let mut c = canvas();
        let root = c.root();
        let group = add(&mut c, root, WidgetNode::panel());
        let inner = add(&mut c, group, WidgetNode::panel());
        c.request_focus(inner);

        c.tree_mut().remove(root, group).unwrap();
        c.update(0.0);
        assert_eq!(c.focused(), None);
        assert!(!c.tree().node(inner).unwrap().is_focused());
    }

    #[test]
    fn keys_after_removal_skip_detached_field() {
        let mut c = canvas();
        let root = c.root();
        let field = TextField::new(&Skin::default());
        let id = add(&mut c, root, WidgetNode::new(field).with_geometry(Rect::new(0.0, 0.0, 100.0, 20.0)));
        assert!(c.request_focus(id));

        c.tree_mut().remove(root, id).unwrap();
        assert!(!c.feed(key(Key::Char('z'))));
        assert_eq!(c.focused(), None);
        assert!(!c.tree().node(id).unwrap().is_focused());
        assert_eq!(c.tree().control(id).unwrap().as_text_field().unwrap().text(), "");
    }

    #[test]
    fn tab_cycles_focusable_widgets() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel().focusable(true));
        let _skip = add(&mut c, root, WidgetNode::panel());
        let b = add(&mut c, root, WidgetNode::panel().focusable(true));

        assert!(c.feed(key(Key::Tab)));
        assert_eq!(c.focused(), Some(a));
        c.feed(key(Key::Tab));
        assert_eq!(c.focused(), Some(b));
        c.feed(key(Key::Tab));
        assert_eq!(c.focused(), Some(a));
        c.feed(key(Key::BackTab));
        assert_eq!(c.focused(), Some(b));
    }

    #[test]
    fn tab_goes_to_holder_that_accepts_it() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel().focusable(true).with_tab_input(true));
        let _b = add(&mut c, root, WidgetNode::panel().focusable(true));
        c.request_focus(a);
        assert!(!c.feed(key(Key::Tab)));
        assert_eq!(c.focused(), Some(a));
    }

    // ── Pointer routing ──────────────────────────────────────────────

    #[test]
    fn hover_sends_enter_and_exit() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel().with_geometry(Rect::new(0.0, 0.0, 50.0, 50.0)));
        let b = add(&mut c, root, WidgetNode::panel().with_geometry(Rect::new(100.0, 0.0, 50.0, 50.0)));
        let log: Log = Rc::default();
        watch(&mut c, a, &log);
        watch(&mut c, b, &log);

        c.feed(moved(10.0, 10.0));
        c.feed(moved(110.0, 10.0));
        c.feed(moved(300.0, 300.0));
        assert_eq!(
            *log.borrow(),
            vec![
                (a, "enter"),
                (a, "moved"),
                (a, "exit"),
                (b, "enter"),
                (b, "moved"),
                (b, "exit"),
            ]
        );
        assert_eq!(c.hovered(), None);
    }

    #[test]
    fn unaccepted_events_bubble_to_ancestors() {
        let mut c = canvas();
        let root = c.root();
        let outer = add(&mut c, root, WidgetNode::panel().with_geometry(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let inner = add(&mut c, outer, WidgetNode::panel().with_geometry(Rect::new(10.0, 10.0, 20.0, 20.0)));
        let log: Log = Rc::default();
        watch(&mut c, inner, &log);
        watch(&mut c, outer, &log);

        c.feed(down(15.0, 15.0));
        let presses: Vec<_> = log.borrow().iter().filter(|(_, n)| *n == "pressed").copied().collect();
        assert_eq!(presses, vec![(inner, "pressed"), (outer, "pressed")]);
    }

    #[test]
    fn press_captures_until_release() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel().with_geometry(Rect::new(0.0, 0.0, 50.0, 50.0)));
        let log: Log = Rc::default();
        watch(&mut c, a, &log);

        c.feed(down(10.0, 10.0));
        assert_eq!(c.captured(), Some(a));
        c.feed(moved(200.0, 200.0));
        c.feed(up(200.0, 200.0));
        assert_eq!(c.captured(), None);
        let names: Vec<_> = log.borrow().iter().map(|(_, n)| *n).collect();
        assert_eq!(names, vec!["enter", "pressed", "exit", "moved", "released"]);
    }

    #[test]
    fn double_click_within_interval() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel().with_geometry(Rect::new(0.0, 0.0, 50.0, 50.0)));
        let log: Log = Rc::default();
        watch(&mut c, a, &log);

        c.feed(down(10.0, 10.0));
        c.feed(up(10.0, 10.0));
        c.update(0.1);
        c.feed(down(10.0, 10.0));
        c.feed(up(10.0, 10.0));
        c.update(1.0);
        c.feed(down(10.0, 10.0));
        let doubles = log.borrow().iter().filter(|(_, n)| *n == "double").count();
        assert_eq!(doubles, 1);
    }

    #[test]
    fn clicking_empty_space_clears_focus() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel());
        c.request_focus(a);
        c.feed(down(500.0, 500.0));
        assert_eq!(c.focused(), None);
    }

    #[test]
    fn empty_click_keeps_focus_when_configured() {
        let config = CanvasConfig::new().with_clear_focus_on_empty_click(false);
        let mut c = Canvas::with_config(Rc::new(HeadlessBackend::default()), config);
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel());
        c.request_focus(a);
        c.feed(down(500.0, 500.0));
        assert_eq!(c.focused(), Some(a));
    }

    // ── Text field integration ───────────────────────────────────────

    #[test]
    fn clicking_text_field_focuses_it_and_routes_keys() {
        let mut c = canvas();
        let root = c.root();
        let field = TextField::new(&Skin::default());
        let id = add(&mut c, root, WidgetNode::new(field).with_geometry(Rect::new(10.0, 10.0, 100.0, 20.0)));

        c.feed(down(20.0, 20.0));
        c.feed(up(20.0, 20.0));
        assert_eq!(c.focused(), Some(id));

        for ch in "hi".chars() {
            c.feed(key(Key::Char(ch)));
        }
        let text = c.tree().control(id).unwrap().as_text_field().unwrap().text().to_owned();
        assert_eq!(text, "hi");
    }

    #[test]
    fn keys_without_focus_go_nowhere() {
        let mut c = canvas();
        assert!(!c.feed(key(Key::Char('x'))));
    }

    // ── Frame ────────────────────────────────────────────────────────

    #[test]
    fn resize_sets_root_size() {
        let mut c = canvas();
        assert!(c.feed(RawInput::Resize { width: 320.0, height: 200.0 }));
        assert_eq!(c.tree().geometry(c.root()).unwrap().size(), Size::new(320.0, 200.0));
    }

    #[test]
    fn update_validates_and_advances_clock() {
        let mut c = canvas();
        let root = c.root();
        let a = add(&mut c, root, WidgetNode::panel());
        assert!(!c.tree().node(root).unwrap().is_valid());
        c.update(0.5);
        assert!(c.tree().node(root).unwrap().is_valid());
        assert!(c.tree().node(a).unwrap().is_valid());
        assert_eq!(c.clock(), 0.5);
    }

    #[test]
    fn pump_drains_source() {
        let mut c = canvas();
        let mut source = vec![moved(1.0, 1.0), moved(2.0, 2.0)].into_iter();
        assert_eq!(c.pump(&mut source), 2);
        assert_eq!(c.pointer(), Point::new(2.0, 2.0));
    }
}
