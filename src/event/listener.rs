//! Subscription registries.
//!
//! A [`Listeners`] registry stores callbacks in a slotmap; `subscribe`
//! hands back a [`ListenerId`] that removes exactly that subscription.
//! Subscribing the same closure logic twice yields two independent entries.

use slotmap::{new_key_type, SlotMap};

use crate::widget::WidgetId;

use super::kind::{Event, EventFamily};

new_key_type! {
    /// Handle returned by [`Listeners::subscribe`].
    pub struct ListenerId;
}

/// A set of callbacks invoked with `&E`.
pub struct Listeners<E> {
    slots: SlotMap<ListenerId, Box<dyn FnMut(&E)>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self { slots: SlotMap::with_key() }
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("len", &self.slots.len()).finish()
    }
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        self.slots.insert(Box::new(callback))
    }

    /// Remove one subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.slots.remove(id).is_some()
    }

    /// Invoke every callback with `value`.
    pub fn notify(&mut self, value: &E) {
        for callback in self.slots.values_mut() {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Widget lifecycle notification.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetNotice {
    ChildAdded(WidgetId),
    ChildRemoved(WidgetId),
    PropertyChanged { property: &'static str, old: bool, new: bool },
    Invalidated,
}

/// The four registries every widget carries.
#[derive(Debug, Default)]
pub struct ListenerSet {
    pub keyboard: Listeners<Event>,
    pub mouse: Listeners<Event>,
    pub focus: Listeners<Event>,
    pub widget: Listeners<WidgetNotice>,
}

impl ListenerSet {
    /// Report `event` to the registry matching its family.
    pub fn notify_event(&mut self, event: &Event) {
        match event.kind().family() {
            EventFamily::Keyboard => self.keyboard.notify(event),
            EventFamily::Mouse => self.mouse.notify(event),
            EventFamily::Focus => self.focus.notify(event),
        }
    }
}
