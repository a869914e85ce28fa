//! Size negotiation.
//!
//! Each size query resolves in order: explicit override, then the layout
//! (unless it is absolute), then a fallback. Preferred and minimum sizes fall
//! back to the widget's intrinsic size; the maximum falls back to
//! [`Size::INFINITE`].

use crate::geometry::{Rect, Size};
use crate::layout::LayoutHost;

use super::node::{Control, WidgetId};
use super::tree::WidgetTree;

impl WidgetTree {
    /// Content size plus padding; for panels, the layout's preferred size.
    pub fn intrinsic_size(&self, id: WidgetId) -> Size {
        let Some(node) = self.node(id) else { return Size::ZERO };
        match &node.control {
            Control::Panel => node.layout.preferred_size(self, self.children(id)),
            control => node.padding.expand(control.content_size(self.metrics())),
        }
    }

    pub fn preferred_size(&self, id: WidgetId) -> Size {
        let Some(node) = self.node(id) else { return Size::ZERO };
        if let Some(size) = node.preferred_size {
            return size;
        }
        if !node.layout.is_absolute() {
            return node.layout.preferred_size(self, self.children(id));
        }
        self.intrinsic_size(id)
    }

    pub fn min_size(&self, id: WidgetId) -> Size {
        let Some(node) = self.node(id) else { return Size::ZERO };
        if let Some(size) = node.min_size {
            return size;
        }
        if !node.layout.is_absolute() {
            return node.layout.min_size(self, self.children(id));
        }
        self.intrinsic_size(id)
    }

    pub fn max_size(&self, id: WidgetId) -> Size {
        let Some(node) = self.node(id) else { return Size::ZERO };
        if let Some(size) = node.max_size {
            return size;
        }
        if !node.layout.is_absolute() {
            return node.layout.max_size(self, self.children(id));
        }
        Size::INFINITE
    }

    /// Set or clear the preferred size override.
    pub fn set_preferred_size(&mut self, id: WidgetId, size: Option<Size>) {
        self.set_override(id, size, |node| &mut node.preferred_size);
    }

    /// Set or clear the minimum size override.
    pub fn set_min_size(&mut self, id: WidgetId, size: Option<Size>) {
        self.set_override(id, size, |node| &mut node.min_size);
    }

    /// Set or clear the maximum size override.
    pub fn set_max_size(&mut self, id: WidgetId, size: Option<Size>) {
        self.set_override(id, size, |node| &mut node.max_size);
    }

    // Per-axis setters keep the other axis at its currently resolved value.

    pub fn set_preferred_width(&mut self, id: WidgetId, width: f32) {
        let current = self.preferred_size(id);
        self.set_preferred_size(id, Some(Size::new(width, current.height)));
    }

    pub fn set_preferred_height(&mut self, id: WidgetId, height: f32) {
        let current = self.preferred_size(id);
        self.set_preferred_size(id, Some(Size::new(current.width, height)));
    }

    pub fn set_min_width(&mut self, id: WidgetId, width: f32) {
        let current = self.min_size(id);
        self.set_min_size(id, Some(Size::new(width, current.height)));
    }

    pub fn set_min_height(&mut self, id: WidgetId, height: f32) {
        let current = self.min_size(id);
        self.set_min_size(id, Some(Size::new(current.width, height)));
    }

    pub fn set_max_width(&mut self, id: WidgetId, width: f32) {
        let current = self.max_size(id);
        self.set_max_size(id, Some(Size::new(width, current.height)));
    }

    pub fn set_max_height(&mut self, id: WidgetId, height: f32) {
        let current = self.max_size(id);
        self.set_max_size(id, Some(Size::new(current.width, height)));
    }

    fn set_override(
        &mut self,
        id: WidgetId,
        size: Option<Size>,
        field: impl FnOnce(&mut super::WidgetNode) -> &mut Option<Size>,
    ) {
        let Some(node) = self.node_mut(id) else { return };
        let slot = field(node);
        if *slot == size {
            return;
        }
        *slot = size;
        self.invalidate(id);
    }
}

impl LayoutHost for WidgetTree {
    fn geometry_of(&self, id: WidgetId) -> Rect {
        self.geometry(id).unwrap_or_default()
    }

    fn preferred_size_of(&self, id: WidgetId) -> Size {
        self.preferred_size(id)
    }

    fn min_size_of(&self, id: WidgetId) -> Size {
        self.min_size(id)
    }

    fn max_size_of(&self, id: WidgetId) -> Size {
        self.max_size(id)
    }
}
