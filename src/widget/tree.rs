//! The widget arena: structure, geometry, invalidation, drawing.

use std::collections::VecDeque;
use std::rc::Rc;

use slotmap::{SecondaryMap, SlotMap};

use crate::backend::Backend;
use crate::event::{ListenerSet, WidgetNotice};
use crate::geometry::{Padding, Point, Rect, Size};
use crate::layout::{Constraint, Layout};
use crate::render::{FontMetrics, Renderer};

use super::error::TreeError;
use super::node::{Control, WidgetId, WidgetNode};
use super::request::{Request, RequestQueue};

/// Empty slice constant for returning when a widget has no children.
const EMPTY_CHILDREN: &[WidgetId] = &[];

/// The widget tree, backed by a slotmap arena.
///
/// All widgets live in a single `SlotMap`. Parent/child relationships are
/// stored in secondary maps. The tree owns every node: a removed widget stays
/// in the arena, detached, until it is re-added or [`destroy`](Self::destroy)ed.
///
/// The root is the canvas panel created by [`WidgetTree::new`]. A widget is
/// *attached* when the root is among its ancestors.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, WidgetNode>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: WidgetId,
    backend: Rc<dyn Backend>,
    pub(crate) requests: RequestQueue,
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("len", &self.nodes.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl WidgetTree {
    /// Create a tree whose root panel covers the backend's screen.
    pub fn new(backend: Rc<dyn Backend>) -> Self {
        let mut nodes = SlotMap::with_key();
        let root_node = WidgetNode::panel()
            .with_name("canvas")
            .with_size(backend.screen_size());
        let root = nodes.insert(root_node);
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            root,
            backend,
            requests: RequestQueue::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    /// The canvas root panel.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn backend(&self) -> &Rc<dyn Backend> {
        &self.backend
    }

    pub fn metrics(&self) -> &dyn FontMetrics {
        self.backend.metrics()
    }

    /// Immutable access to a widget.
    pub fn node(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id)
    }

    pub fn control(&self, id: WidgetId) -> Option<&Control> {
        self.nodes.get(id).map(|node| &node.control)
    }

    /// Mutable access to a widget's control.
    ///
    /// Content changes made here do not invalidate; call
    /// [`invalidate`](Self::invalidate) if they affect size.
    pub fn control_mut(&mut self, id: WidgetId) -> Option<&mut Control> {
        self.nodes.get_mut(id).map(|node| &mut node.control)
    }

    /// The listener registries of a widget.
    pub fn listeners_mut(&mut self, id: WidgetId) -> Option<&mut ListenerSet> {
        self.nodes.get_mut(id).map(|node| &mut node.listeners)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of widgets, including the root and detached widgets.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root exists for the lifetime of the tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Insert a detached widget.
    ///
    /// Labels and icon panels are sized to their preferred size.
    pub fn create(&mut self, node: WidgetNode) -> WidgetId {
        let sizes_to_content = node.control.sizes_to_content();
        let kind = node.control.kind_name();
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        if sizes_to_content {
            let size = self.intrinsic_size(id);
            if let Some(node) = self.nodes.get_mut(id) {
                node.geometry = Rect::from_parts(node.geometry.position(), size);
            }
        }
        tracing::trace!(target: "kreativity_ui::tree", ?id, kind, "widget created");
        id
    }

    /// Append `child` to `parent`'s children.
    pub fn add(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        self.attach(parent, child, None)
    }

    /// Append `child`, passing `constraint` to the parent's layout.
    pub fn add_with_constraint(
        &mut self,
        parent: WidgetId,
        child: WidgetId,
        constraint: Constraint,
    ) -> Result<(), TreeError> {
        self.attach(parent, child, Some(constraint))
    }

    fn attach(
        &mut self,
        parent: WidgetId,
        child: WidgetId,
        constraint: Option<Constraint>,
    ) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownWidget(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::UnknownWidget(child));
        }
        if child == self.root {
            return Err(TreeError::RootWidget);
        }
        if self.parent.contains_key(child) {
            return Err(TreeError::AlreadyParented(child));
        }
        if child == parent || self.ancestors(parent).contains(&child) {
            return Err(TreeError::WouldCycle { parent, child });
        }

        if let Some(node) = self.nodes.get_mut(parent) {
            node.layout.add_widget(child, constraint);
        }
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(child);
        }
        self.parent.insert(child, parent);
        self.notify(parent, WidgetNotice::ChildAdded(child));
        tracing::debug!(target: "kreativity_ui::tree", ?parent, ?child, "child added");
        self.invalidate(parent);
        Ok(())
    }

    /// Detach `child` from `parent`.
    ///
    /// The child keeps its subtree and stays in the arena. The canvas is told
    /// so it can drop focus, hover or capture held inside the subtree.
    pub fn remove(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownWidget(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::UnknownWidget(child));
        }
        if self.parent.get(child) != Some(&parent) {
            return Err(TreeError::NotAChild { parent, child });
        }

        if let Some(node) = self.nodes.get_mut(parent) {
            node.layout.remove_widget(child);
        }
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.retain(|&c| c != child);
        }
        self.parent.remove(child);
        self.notify(parent, WidgetNotice::ChildRemoved(child));
        self.requests.push(Request::Detached(child));
        tracing::debug!(target: "kreativity_ui::tree", ?parent, ?child, "child removed");
        self.invalidate(parent);
        Ok(())
    }

    /// Detach every child of `parent`.
    pub fn clear(&mut self, parent: WidgetId) -> Result<(), TreeError> {
        let children = self.children(parent).to_vec();
        for child in children {
            self.remove(parent, child)?;
        }
        Ok(())
    }

    /// Free a detached widget and its whole subtree.
    pub fn destroy(&mut self, id: WidgetId) -> Result<(), TreeError> {
        if !self.contains(id) {
            return Err(TreeError::UnknownWidget(id));
        }
        if id == self.root {
            return Err(TreeError::RootWidget);
        }
        if self.parent.contains_key(id) {
            return Err(TreeError::StillParented(id));
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut count = 0usize;
        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            if self.nodes.remove(current).is_some() {
                count += 1;
            }
        }
        tracing::debug!(target: "kreativity_ui::tree", ?id, count, "subtree destroyed");
        Ok(())
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Children in insertion order. Empty for unknown widgets.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to its top-level ancestor, excluding `id`.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// `[id, parent, grandparent, ..]`. Empty for unknown widgets.
    pub fn bubble_path(&self, id: WidgetId) -> Vec<WidgetId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut path = vec![id];
        path.extend(self.ancestors(id));
        path
    }

    /// The outermost ancestor, or `id` itself when it has no parent.
    pub fn top_level_ancestor(&self, id: WidgetId) -> WidgetId {
        self.ancestors(id).last().copied().unwrap_or(id)
    }

    /// Whether the canvas root is reachable from `id`.
    pub fn is_attached(&self, id: WidgetId) -> bool {
        self.contains(id) && self.top_level_ancestor(id) == self.root
    }

    /// Whether `id` is `ancestor` or lies inside its subtree.
    pub fn is_in_subtree(&self, id: WidgetId, ancestor: WidgetId) -> bool {
        id == ancestor || self.ancestors(id).contains(&ancestor)
    }

    /// Pre-order depth-first walk starting at `id` (inclusive).
    pub fn walk_depth_first(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        if !self.contains(id) {
            return result;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Geometry in parent space.
    pub fn geometry(&self, id: WidgetId) -> Option<Rect> {
        self.nodes.get(id).map(|node| node.geometry)
    }

    /// Move a widget. No-op (and no invalidation) when unchanged.
    pub fn set_position(&mut self, id: WidgetId, position: Point) {
        let Some(size) = self.nodes.get(id).map(|node| node.geometry.size()) else { return };
        self.set_geometry(id, Rect::from_parts(position, size));
    }

    /// Resize a widget. No-op (and no invalidation) when unchanged.
    pub fn set_size(&mut self, id: WidgetId, size: Size) {
        let Some(position) = self.nodes.get(id).map(|node| node.geometry.position()) else {
            return;
        };
        self.set_geometry(id, Rect::from_parts(position, size));
    }

    /// Move and resize a widget. No-op (and no invalidation) when unchanged.
    pub fn set_geometry(&mut self, id: WidgetId, geometry: Rect) {
        let Some(node) = self.nodes.get_mut(id) else { return };
        if node.geometry == geometry {
            return;
        }
        node.geometry = geometry;
        self.invalidate(id);
    }

    pub fn set_padding(&mut self, id: WidgetId, padding: Padding) {
        let Some(node) = self.nodes.get_mut(id) else { return };
        if node.padding == padding {
            return;
        }
        node.padding = padding;
        self.invalidate(id);
    }

    /// Replace the layout strategy. Existing children are handed to the new
    /// layout without constraints.
    pub fn set_layout(&mut self, id: WidgetId, layout: impl Layout + 'static) {
        let children = self.children(id).to_vec();
        let Some(node) = self.nodes.get_mut(id) else { return };
        node.layout = Box::new(layout);
        for child in children {
            node.layout.add_widget(child, None);
        }
        self.invalidate(id);
    }

    /// Geometry in screen (root) space.
    pub fn screen_geometry(&self, id: WidgetId) -> Option<Rect> {
        let geometry = self.geometry(id)?;
        let offset = self
            .ancestors(id)
            .into_iter()
            .filter_map(|a| self.geometry(a))
            .fold(Point::ZERO, |acc, g| acc + g.position());
        Some(geometry.translate(offset))
    }

    /// Convert a screen point into `id`'s local space.
    pub fn screen_to_local(&self, id: WidgetId, point: Point) -> Point {
        match self.screen_geometry(id) {
            Some(screen) => point - screen.position(),
            None => point,
        }
    }

    // -----------------------------------------------------------------------
    // Flags
    // -----------------------------------------------------------------------

    pub fn set_focusable(&mut self, id: WidgetId, focusable: bool) {
        self.set_flag(id, "focusable", focusable, |node| &mut node.focusable);
    }

    /// Disabled widgets are skipped by hit testing and cannot take focus.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) {
        self.set_flag(id, "enabled", enabled, |node| &mut node.enabled);
    }

    /// Invisible widgets and their subtrees are neither drawn nor hit.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        self.set_flag(id, "visible", visible, |node| &mut node.visible);
    }

    pub fn set_clip(&mut self, id: WidgetId, clip: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.clip = clip;
        }
    }

    pub fn set_accepts_tab_input(&mut self, id: WidgetId, accepts: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.accepts_tab_input = accepts;
        }
    }

    pub fn set_name(&mut self, id: WidgetId, name: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.name = Some(name.into());
        }
    }

    fn set_flag(
        &mut self,
        id: WidgetId,
        property: &'static str,
        value: bool,
        field: impl FnOnce(&mut WidgetNode) -> &mut bool,
    ) {
        let Some(node) = self.nodes.get_mut(id) else { return };
        let slot = field(node);
        let old = *slot;
        if old == value {
            return;
        }
        *slot = value;
        node.listeners.widget.notify(&WidgetNotice::PropertyChanged { property, old, new: value });
    }

    // -----------------------------------------------------------------------
    // Content
    // -----------------------------------------------------------------------

    /// Replace the text of a label, text field or spinner, then invalidate.
    ///
    /// Returns `false` for widgets without text. A spinner re-parses the text
    /// into its value.
    pub fn set_text(&mut self, id: WidgetId, text: &str) -> bool {
        let Some(node) = self.nodes.get_mut(id) else { return false };
        match &mut node.control {
            Control::Label(label) => label.set_text(text),
            Control::TextField(field) => field.set_text(text),
            Control::Spinner(spinner) => {
                spinner.commit_text(text);
            }
            Control::Panel | Control::IconPanel(_) => return false,
        }
        self.invalidate(id);
        true
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Mark `id` and every ancestor invalid, notifying each.
    pub fn invalidate(&mut self, id: WidgetId) {
        let mut current = Some(id);
        while let Some(cur) = current {
            let Some(node) = self.nodes.get_mut(cur) else { break };
            node.valid = false;
            node.listeners.widget.notify(&WidgetNotice::Invalidated);
            current = self.parent.get(cur).copied();
        }
        tracing::trace!(target: "kreativity_ui::tree", ?id, "invalidated");
    }

    /// Lay out `id`'s children inside its local bounds, then mark it valid.
    ///
    /// Children are not validated recursively.
    pub fn validate(&mut self, id: WidgetId) {
        let Some(node) = self.nodes.get(id) else { return };
        let children = self.children(id).to_vec();
        let bounds = node.geometry.size().to_rect();
        let placements = node.layout.arrange(bounds, self, &children);
        for (child, rect) in placements {
            if self.parent(child) == Some(id) {
                self.set_geometry(child, rect);
            }
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.valid = true;
        }
        tracing::trace!(target: "kreativity_ui::tree", ?id, "validated");
    }

    /// Validate `id` if needed, then update its children.
    pub fn update(&mut self, id: WidgetId, dt: f32) {
        let Some(node) = self.nodes.get(id) else { return };
        if !node.valid {
            self.validate(id);
        }
        let children = self.children(id).to_vec();
        for child in children {
            self.update(child, dt);
        }
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Paint `id` and its subtree. The node draws in its local space.
    pub fn draw(&self, id: WidgetId, renderer: &mut dyn Renderer) {
        let Some(node) = self.nodes.get(id) else { return };
        if !node.visible {
            return;
        }
        let origin = node.geometry.position();
        renderer.translate(origin);
        let clipped = node.clip && renderer.begin_clip(node.geometry.size().to_rect());
        node.control.draw(node, self.metrics(), renderer);
        for &child in self.children(id) {
            self.draw(child, renderer);
        }
        renderer.translate(-origin);
        if clipped {
            renderer.end_clip();
        }
    }

    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    /// Ask the canvas to focus `id`.
    ///
    /// Returns `false` without queueing anything when the widget is not
    /// attached to the canvas or is disabled.
    pub fn request_focus(&mut self, id: WidgetId) -> bool {
        if !self.can_take_focus(id) {
            return false;
        }
        self.requests.push(Request::Focus(id));
        true
    }

    /// Ask the canvas to drop keyboard focus.
    pub fn clear_focus(&mut self) {
        self.requests.push(Request::ClearFocus);
    }

    pub(crate) fn can_take_focus(&self, id: WidgetId) -> bool {
        self.is_attached(id) && self.nodes.get(id).is_some_and(|node| node.enabled)
    }

    pub(crate) fn drain_requests(&mut self) -> Vec<Request> {
        self.requests.drain()
    }

    fn notify(&mut self, id: WidgetId, notice: WidgetNotice) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.listeners.widget.notify(&notice);
        }
    }

    pub(crate) fn parts_mut(
        &mut self,
        id: WidgetId,
    ) -> Option<(&mut WidgetNode, &Rc<dyn Backend>, &mut RequestQueue)> {
        let node = self.nodes.get_mut(id)?;
        Some((node, &self.backend, &mut self.requests))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::testing::{HeadlessBackend, RecordingRenderer};

    fn tree() -> WidgetTree {
        WidgetTree::new(Rc::new(HeadlessBackend::new(Size::new(800.0, 600.0))))
    }

    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build(t: &mut WidgetTree) -> (WidgetId, WidgetId, WidgetId, WidgetId) {
        let root = t.root();
        let a = t.create(WidgetNode::panel().with_geometry(Rect::new(10.0, 10.0, 100.0, 100.0)));
        let b = t.create(WidgetNode::panel().with_geometry(Rect::new(200.0, 0.0, 50.0, 50.0)));
        let c = t.create(WidgetNode::panel().with_geometry(Rect::new(5.0, 5.0, 20.0, 20.0)));
        let d = t.create(WidgetNode::panel().with_geometry(Rect::new(30.0, 5.0, 20.0, 20.0)));
        t.add(root, a).unwrap();
        t.add(root, b).unwrap();
        t.add(a, c).unwrap();
        t.add(a, d).unwrap();
        (a, b, c, d)
    }

    fn validate_all(t: &mut WidgetTree) {
        let root = t.root();
        t.update(root, 0.0);
    }

    fn is_valid(t: &WidgetTree, id: WidgetId) -> bool {
        t.node(id).unwrap().is_valid()
    }

    // ── Structure ────────────────────────────────────────────────────

    #[test]
    fn new_tree_has_root_sized_to_screen() {
        let t = tree();
        assert_eq!(t.len(), 1);
        assert_eq!(t.geometry(t.root()), Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
        assert!(t.is_attached(t.root()));
    }

    #[test]
    fn add_links_parent_and_children() {
        let mut t = tree();
        let (a, b, c, d) = build(&mut t);
        assert_eq!(t.children(t.root()), &[a, b]);
        assert_eq!(t.children(a), &[c, d]);
        assert_eq!(t.parent(c), Some(a));
        assert_eq!(t.ancestors(c), vec![a, t.root()]);
        assert_eq!(t.bubble_path(d), vec![d, a, t.root()]);
        assert!(t.is_attached(d));
    }

    #[test]
    fn add_rejects_parented_child() {
        let mut t = tree();
        let (a, b, c, _) = build(&mut t);
        assert_eq!(t.add(b, c), Err(TreeError::AlreadyParented(c)));
        assert_eq!(t.parent(c), Some(a));
        assert_eq!(t.children(b), EMPTY_CHILDREN);
    }

    #[test]
    fn add_rejects_cycles_and_root() {
        let mut t = tree();
        let (a, _, c, _) = build(&mut t);
        let root = t.root();
        t.remove(root, a).unwrap();
        assert_eq!(t.add(c, a), Err(TreeError::WouldCycle { parent: c, child: a }));
        assert_eq!(t.add(a, a), Err(TreeError::WouldCycle { parent: a, child: a }));
        assert_eq!(t.add(a, root), Err(TreeError::RootWidget));
    }

    #[test]
    fn remove_requires_membership() {
        let mut t = tree();
        let (a, b, c, _) = build(&mut t);
        assert_eq!(t.remove(b, c), Err(TreeError::NotAChild { parent: b, child: c }));
        t.remove(a, c).unwrap();
        assert_eq!(t.parent(c), None);
        assert!(!t.is_attached(c));
        assert_eq!(t.children(a).len(), 1);
        assert!(t.drain_requests().contains(&Request::Detached(c)));
    }

    #[test]
    fn removed_child_can_be_re_added() {
        let mut t = tree();
        let (a, b, c, _) = build(&mut t);
        t.remove(a, c).unwrap();
        t.add(b, c).unwrap();
        assert_eq!(t.parent(c), Some(b));
    }

    #[test]
    fn clear_detaches_all_children() {
        let mut t = tree();
        let (a, _, c, d) = build(&mut t);
        t.clear(a).unwrap();
        assert!(t.children(a).is_empty());
        assert_eq!(t.parent(c), None);
        assert_eq!(t.parent(d), None);
    }

    #[test]
    fn destroy_frees_detached_subtree() {
        let mut t = tree();
        let (a, _, c, d) = build(&mut t);
        assert_eq!(t.destroy(a), Err(TreeError::StillParented(a)));
        t.remove(t.root(), a).unwrap();
        t.destroy(a).unwrap();
        assert!(!t.contains(a));
        assert!(!t.contains(c));
        assert!(!t.contains(d));
        assert_eq!(t.destroy(t.root()), Err(TreeError::RootWidget));
        assert_eq!(t.destroy(a), Err(TreeError::UnknownWidget(a)));
    }

    #[test]
    fn depth_first_walk_is_preorder() {
        let mut t = tree();
        let (a, b, c, d) = build(&mut t);
        assert_eq!(t.walk_depth_first(t.root()), vec![t.root(), a, c, d, b]);
    }

    #[test]
    fn child_notices_fire_on_parent() {
        let mut t = tree();
        let (a, _, c, _) = build(&mut t);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        t.listeners_mut(a).unwrap().widget.subscribe(move |n| sink.borrow_mut().push(n.clone()));
        t.remove(a, c).unwrap();
        t.add(a, c).unwrap();
        let seen = seen.borrow();
        assert!(seen.contains(&WidgetNotice::ChildRemoved(c)));
        assert!(seen.contains(&WidgetNotice::ChildAdded(c)));
    }

    // ── Invalidation ─────────────────────────────────────────────────

    #[test]
    fn unchanged_position_keeps_validity() {
        let mut t = tree();
        let (a, _, c, _) = build(&mut t);
        validate_all(&mut t);
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        t.listeners_mut(c).unwrap().widget.subscribe(move |n| {
            if *n == WidgetNotice::Invalidated {
                *sink.borrow_mut() += 1;
            }
        });

        t.set_position(c, Point::new(5.0, 5.0));
        assert!(is_valid(&t, c));
        assert!(is_valid(&t, a));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn changed_position_invalidates_ancestors() {
        let mut t = tree();
        let (a, b, c, d) = build(&mut t);
        validate_all(&mut t);

        t.set_position(c, Point::new(6.0, 5.0));
        assert!(!is_valid(&t, c));
        assert!(!is_valid(&t, a));
        assert!(!is_valid(&t, t.root()));
        assert!(is_valid(&t, b));
        assert!(is_valid(&t, d));
    }

    #[test]
    fn update_revalidates() {
        let mut t = tree();
        let (a, _, c, _) = build(&mut t);
        t.set_size(c, Size::new(1.0, 1.0));
        validate_all(&mut t);
        assert!(is_valid(&t, c));
        assert!(is_valid(&t, a));
        assert!(is_valid(&t, t.root()));
    }

    #[test]
    fn set_geometry_short_circuits() {
        let mut t = tree();
        let (_, b, _, _) = build(&mut t);
        validate_all(&mut t);
        t.set_geometry(b, Rect::new(200.0, 0.0, 50.0, 50.0));
        assert!(is_valid(&t, b));
        t.set_geometry(b, Rect::new(200.0, 0.0, 60.0, 50.0));
        assert!(!is_valid(&t, b));
    }

    #[test]
    fn property_changes_are_reported_once() {
        let mut t = tree();
        let (a, _, _, _) = build(&mut t);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        t.listeners_mut(a).unwrap().widget.subscribe(move |n| sink.borrow_mut().push(n.clone()));
        t.set_enabled(a, false);
        t.set_enabled(a, false);
        assert_eq!(
            *seen.borrow(),
            vec![WidgetNotice::PropertyChanged { property: "enabled", old: true, new: false }]
        );
    }

    // ── Coordinates ──────────────────────────────────────────────────

    #[test]
    fn screen_geometry_accumulates_offsets() {
        let mut t = tree();
        let (_, _, c, _) = build(&mut t);
        assert_eq!(t.screen_geometry(c), Some(Rect::new(15.0, 15.0, 20.0, 20.0)));
        assert_eq!(t.screen_to_local(c, Point::new(20.0, 16.0)), Point::new(5.0, 1.0));
    }

    // ── Focus requests ───────────────────────────────────────────────

    #[test]
    fn request_focus_requires_attached_and_enabled() {
        let mut t = tree();
        let (a, _, c, _) = build(&mut t);
        let loose = t.create(WidgetNode::panel());
        assert!(!t.request_focus(loose));

        t.set_enabled(c, false);
        assert!(!t.request_focus(c));

        assert!(t.request_focus(a));
        assert_eq!(t.drain_requests(), vec![Request::Focus(a)]);
    }

    // ── Drawing ──────────────────────────────────────────────────────

    #[test]
    fn draw_translates_and_restores() {
        let mut t = tree();
        let (a, b, _, _) = build(&mut t);
        t.set_visible(b, false);
        let mut renderer = RecordingRenderer::new();
        t.draw(a, &mut renderer);
        assert_eq!(renderer.translation(), Point::ZERO);
        assert_eq!(renderer.clip_depth(), 0);
        assert!(renderer.commands().len() >= 6);

        let mut hidden = RecordingRenderer::new();
        t.draw(b, &mut hidden);
        assert!(hidden.commands().is_empty());
    }
}
