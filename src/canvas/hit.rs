//! Pointer hit testing.
//!
//! [`HitMap`] flattens the attached tree into `(WidgetId, Rect)` pairs in
//! screen space, in paint order. Each rectangle is already cut down by the
//! clip of every clipping ancestor. The front-most widget under a point is
//! the last entry containing it.

use crate::geometry::{Point, Rect};
use crate::widget::{WidgetId, WidgetTree};

#[derive(Debug, Default)]
pub struct HitMap {
    entries: Vec<(WidgetId, Rect)>,
}

impl HitMap {
    /// Flatten every visible, enabled widget below the canvas root.
    ///
    /// The root itself is left out: a point that only hits the root hits
    /// nothing. Invisible and disabled widgets hide their whole subtree.
    pub fn build(tree: &WidgetTree) -> Self {
        let mut map = Self::default();
        let root = tree.root();
        let Some(root_geometry) = tree.geometry(root) else { return map };
        let clip = tree.node(root).filter(|node| node.clips()).map(|_| root_geometry);
        for &child in tree.children(root) {
            map.collect(tree, child, root_geometry.position(), clip);
        }
        map
    }

    fn collect(&mut self, tree: &WidgetTree, id: WidgetId, origin: Point, clip: Option<Rect>) {
        let Some(node) = tree.node(id) else { return };
        if !node.is_visible() || !node.is_enabled() {
            return;
        }
        let screen = node.geometry().translate(origin);
        let visible = clip.map_or(screen, |clip| screen.intersection(clip));
        self.entries.push((id, visible));

        let child_clip = if node.clips() { Some(visible) } else { clip };
        for &child in tree.children(id) {
            self.collect(tree, child, screen.position(), child_clip);
        }
    }

    /// Front-most widget containing `point`.
    pub fn node_at(&self, point: Point) -> Option<WidgetId> {
        self.entries
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(point))
            .map(|(id, _)| *id)
    }

    /// Every widget containing `point`, front-most first.
    pub fn hit_test(&self, point: Point) -> Vec<WidgetId> {
        self.entries
            .iter()
            .rev()
            .filter(|(_, rect)| rect.contains(point))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
