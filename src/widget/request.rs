//! Deferred requests from widgets to the canvas.
//!
//! Widgets cannot reach the canvas while the tree is borrowed, so focus
//! changes and detach notices are queued here and drained by the canvas
//! after each dispatch.

use std::collections::VecDeque;

use super::WidgetId;

/// Something only the canvas can carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Move keyboard focus to the widget.
    Focus(WidgetId),
    /// Drop keyboard focus.
    ClearFocus,
    /// The widget (and its subtree) left the canvas.
    Detached(WidgetId),
}

/// FIFO queue of [`Request`]s.
#[derive(Debug, Default)]
pub struct RequestQueue {
    queue: VecDeque<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: Request) {
        self.queue.push_back(request);
    }

    /// Drain all pending requests. The queue is empty after this call.
    pub fn drain(&mut self) -> Vec<Request> {
        self.queue.drain(..).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    #[test]
    fn drain_preserves_order() {
        let mut keys: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let mut queue = RequestQueue::new();
        queue.push(Request::Focus(a));
        queue.push(Request::ClearFocus);
        assert_eq!(queue.pending_count(), 2);
        assert_eq!(queue.drain(), vec![Request::Focus(a), Request::ClearFocus]);
        assert!(queue.is_empty());
    }
}
