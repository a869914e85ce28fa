//! Event and draw dispatch to controls.
//!
//! The tree hands each control a context describing the node it lives in.
//! Controls never touch the tree directly; focus changes go through the
//! context into the request queue.

use crate::backend::Backend;
use crate::event::{Event, EventKind};
use crate::geometry::{Padding, Rect, Size};
use crate::render::{FontMetrics, Renderer};

use super::node::{Control, WidgetId, WidgetNode};
use super::request::{Request, RequestQueue};
use super::tree::WidgetTree;

/// What a control sees while drawing.
#[derive(Clone, Copy)]
pub struct DrawContext<'a> {
    pub size: Size,
    pub padding: Padding,
    pub focused: bool,
    pub metrics: &'a dyn FontMetrics,
}

impl DrawContext<'_> {
    /// The node's rectangle in its own space.
    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }
}

/// What a control sees while handling an event.
pub struct ControlContext<'a> {
    id: WidgetId,
    size: Size,
    padding: Padding,
    focused: bool,
    can_focus: bool,
    backend: &'a dyn Backend,
    requests: &'a mut RequestQueue,
}

impl<'a> ControlContext<'a> {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn backend(&self) -> &'a dyn Backend {
        self.backend
    }

    pub fn metrics(&self) -> &'a dyn FontMetrics {
        self.backend.metrics()
    }

    /// Ask for keyboard focus. `false` when the node is detached or disabled.
    pub fn request_focus(&mut self) -> bool {
        if !self.can_focus {
            return false;
        }
        self.requests.push(Request::Focus(self.id));
        true
    }

    /// Drop keyboard focus, wherever it is.
    pub fn clear_focus(&mut self) {
        self.requests.push(Request::ClearFocus);
    }
}

impl Control {
    /// Unpadded content size.
    pub(crate) fn content_size(&self, metrics: &dyn FontMetrics) -> Size {
        match self {
            Control::Panel => Size::ZERO,
            Control::Label(label) => label.content_size(metrics),
            Control::IconPanel(icon) => icon.content_size(metrics),
            Control::TextField(field) => field.content_size(metrics),
            Control::Spinner(spinner) => spinner.field().content_size(metrics),
        }
    }

    pub(crate) fn draw(&self, node: &WidgetNode, metrics: &dyn FontMetrics, renderer: &mut dyn Renderer) {
        let ctx = DrawContext {
            size: node.geometry.size(),
            padding: node.padding,
            focused: node.focused,
            metrics,
        };
        match self {
            Control::Panel => {}
            Control::Label(label) => label.draw(&ctx, renderer),
            Control::IconPanel(icon) => icon.draw(&ctx, renderer),
            Control::TextField(field) => field.draw(&ctx, renderer),
            Control::Spinner(spinner) => spinner.draw(&ctx, renderer),
        }
    }

    fn handle(&mut self, ctx: &mut ControlContext<'_>, event: &mut Event) {
        match self {
            Control::Panel | Control::Label(_) | Control::IconPanel(_) => {}
            Control::TextField(field) => field.handle(ctx, event),
            Control::Spinner(spinner) => spinner.handle(ctx, event),
        }
    }
}

impl WidgetTree {
    /// Deliver `event` to a single widget. Returns whether it was accepted.
    ///
    /// Focus events update the node's focused flag first. The matching
    /// listener registry is notified, then the control reacts. A control
    /// whose content size changed is invalidated up to the root.
    pub fn handle(&mut self, id: WidgetId, event: &mut Event) -> bool {
        let can_focus = self.can_take_focus(id);
        let Some((node, backend, requests)) = self.parts_mut(id) else {
            return false;
        };
        let before = node.control.content_size(backend.metrics());
        match event.kind() {
            EventKind::FocusGained => node.focused = true,
            EventKind::FocusLost => node.focused = false,
            _ => {}
        }
        node.listeners.notify_event(event);

        let mut ctx = ControlContext {
            id,
            size: node.geometry.size(),
            padding: node.padding,
            focused: node.focused,
            can_focus,
            backend: backend.as_ref(),
            requests,
        };
        node.control.handle(&mut ctx, event);
        let resized = node.control.content_size(backend.metrics()) != before;
        if resized {
            self.invalidate(id);
        }
        event.is_accepted()
    }
}
