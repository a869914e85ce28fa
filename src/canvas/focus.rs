//! Tab order.
//!
//! [`FocusChain`] holds the focusable, visible, enabled widgets attached to
//! the canvas, in depth-first order. It is rebuilt from the tree before each
//! traversal, so it never holds stale ids for long.

use crate::widget::{WidgetId, WidgetTree};

/// Ordered list of focus candidates for Tab navigation.
#[derive(Debug, Default)]
pub struct FocusChain {
    nodes: Vec<WidgetId>,
    current: Option<usize>,
}

impl FocusChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the tree, keeping `focused` as the current entry when it
    /// is still a candidate.
    ///
    /// A widget inside an invisible or disabled ancestor is not a candidate.
    pub fn rebuild(&mut self, tree: &WidgetTree, focused: Option<WidgetId>) {
        self.nodes.clear();
        self.current = None;

        let mut pending = vec![tree.root()];
        while let Some(id) = pending.pop() {
            let Some(node) = tree.node(id) else { continue };
            if !node.is_visible() || !node.is_enabled() {
                continue;
            }
            if node.is_focusable() {
                self.nodes.push(id);
            }
            pending.extend(tree.children(id).iter().rev());
        }

        if let Some(focused) = focused {
            self.current = self.nodes.iter().position(|&n| n == focused);
        }
    }

    pub fn current_node(&self) -> Option<WidgetId> {
        self.current.and_then(|idx| self.nodes.get(idx).copied())
    }

    /// Advance to the next candidate, wrapping. `None` if the chain is empty.
    pub fn focus_next(&mut self) -> Option<WidgetId> {
        if self.nodes.is_empty() {
            return None;
        }
        let next = match self.current {
            Some(idx) => (idx + 1) % self.nodes.len(),
            None => 0,
        };
        self.current = Some(next);
        self.nodes.get(next).copied()
    }

    /// Step back to the previous candidate, wrapping.
    pub fn focus_previous(&mut self) -> Option<WidgetId> {
        if self.nodes.is_empty() {
            return None;
        }
        let prev = match self.current {
            Some(0) | None => self.nodes.len() - 1,
            Some(idx) => idx - 1,
        };
        self.current = Some(prev);
        self.nodes.get(prev).copied()
    }

    pub fn nodes(&self) -> &[WidgetId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::testing::HeadlessBackend;
    use crate::widget::WidgetNode;

    fn setup() -> (WidgetTree, Vec<WidgetId>) {
        let mut tree = WidgetTree::new(Rc::new(HeadlessBackend::default()));
        let root = tree.root();
        let group = tree.create(WidgetNode::panel());
        let a = tree.create(WidgetNode::panel().focusable(true));
        let b = tree.create(WidgetNode::panel().focusable(true));
        let c = tree.create(WidgetNode::panel().focusable(true));
        let plain = tree.create(WidgetNode::panel());
        tree.add(root, group).unwrap();
        tree.add(group, a).unwrap();
        tree.add(group, b).unwrap();
        tree.add(root, plain).unwrap();
        tree.add(root, c).unwrap();
        (tree, vec![group, a, b, c])
    }

    #[test]
    fn collects_depth_first() {
        let (tree, ids) = setup();
        let mut chain = FocusChain::new();
        chain.rebuild(&tree, None);
        assert_eq!(chain.nodes(), &[ids[1], ids[2], ids[3]]);
    }

    #[test]
    fn next_and_previous_wrap() {
        let (tree, ids) = setup();
        let mut chain = FocusChain::new();
        chain.rebuild(&tree, Some(ids[3]));
        assert_eq!(chain.focus_next(), Some(ids[1]));
        assert_eq!(chain.focus_previous(), Some(ids[3]));
        assert_eq!(chain.focus_previous(), Some(ids[2]));
    }

    #[test]
    fn no_current_starts_at_either_end() {
        let (tree, ids) = setup();
        let mut chain = FocusChain::new();
        chain.rebuild(&tree, None);
        assert_eq!(chain.focus_next(), Some(ids[1]));
        chain.rebuild(&tree, None);
        assert_eq!(chain.focus_previous(), Some(ids[3]));
    }

    #[test]
    fn hidden_or_disabled_subtrees_are_skipped() {
        let (mut tree, ids) = setup();
        tree.set_visible(ids[0], false);
        tree.set_enabled(ids[3], false);
        let mut chain = FocusChain::new();
        chain.rebuild(&tree, None);
        assert!(chain.is_empty());
        assert_eq!(chain.focus_next(), None);
    }
}
