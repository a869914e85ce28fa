//! Pluggable child placement.
//!
//! A [`Layout`] positions a widget's children and reports aggregate size
//! constraints. Layouts never mutate the tree: [`Layout::arrange`] returns
//! placements which the tree applies through its short-circuiting geometry
//! setter, so unchanged children stay valid.
//!
//! Layouts read child sizes through [`LayoutHost`], implemented by
//! [`WidgetTree`](crate::widget::WidgetTree).

pub mod absolute;

use std::any::Any;
use std::fmt;

use crate::geometry::{Rect, Size};
use crate::widget::WidgetId;

pub use absolute::AbsoluteLayout;

/// Opaque per-child layout data, interpreted by the layout that receives it.
pub struct Constraint(Box<dyn Any>);

impl Constraint {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Borrow the payload if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Constraint(..)")
    }
}

/// Read access to the widgets a layout manages.
pub trait LayoutHost {
    /// Current geometry in parent space.
    fn geometry_of(&self, id: WidgetId) -> Rect;
    fn preferred_size_of(&self, id: WidgetId) -> Size;
    fn min_size_of(&self, id: WidgetId) -> Size;
    fn max_size_of(&self, id: WidgetId) -> Size;
}

/// A child placement strategy.
pub trait Layout: fmt::Debug {
    /// Called when `child` is added to the owning widget.
    fn add_widget(&mut self, child: WidgetId, constraint: Option<Constraint>);

    /// Called when `child` is removed from the owning widget.
    fn remove_widget(&mut self, child: WidgetId);

    /// Whether this layout leaves children where they are. Size queries fall
    /// back to the widget's intrinsic size for absolute layouts.
    fn is_absolute(&self) -> bool {
        false
    }

    fn preferred_size(&self, host: &dyn LayoutHost, children: &[WidgetId]) -> Size;

    fn min_size(&self, host: &dyn LayoutHost, children: &[WidgetId]) -> Size;

    fn max_size(&self, _host: &dyn LayoutHost, _children: &[WidgetId]) -> Size {
        Size::INFINITE
    }

    /// Compute child geometry inside `bounds` (the owner's local rectangle).
    fn arrange(
        &self,
        bounds: Rect,
        host: &dyn LayoutHost,
        children: &[WidgetId],
    ) -> Vec<(WidgetId, Rect)>;
}
