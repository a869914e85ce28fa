//! The default layout: children keep whatever geometry they are given.

use crate::geometry::{Rect, Size};
use crate::widget::WidgetId;

use super::{Constraint, Layout, LayoutHost};

/// Places nothing. Preferred size is the bounding box of the children.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbsoluteLayout;

impl AbsoluteLayout {
    fn bounding_size(host: &dyn LayoutHost, children: &[WidgetId]) -> Size {
        children.iter().fold(Size::ZERO, |acc, &child| {
            let rect = host.geometry_of(child);
            acc.max(Size::new(rect.right(), rect.bottom()))
        })
    }
}

impl Layout for AbsoluteLayout {
    fn add_widget(&mut self, _child: WidgetId, _constraint: Option<Constraint>) {}

    fn remove_widget(&mut self, _child: WidgetId) {}

    fn is_absolute(&self) -> bool {
        true
    }

    fn preferred_size(&self, host: &dyn LayoutHost, children: &[WidgetId]) -> Size {
        Self::bounding_size(host, children)
    }

    fn min_size(&self, host: &dyn LayoutHost, children: &[WidgetId]) -> Size {
        Self::bounding_size(host, children)
    }

    fn arrange(
        &self,
        _bounds: Rect,
        _host: &dyn LayoutHost,
        _children: &[WidgetId],
    ) -> Vec<(WidgetId, Rect)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use slotmap::SlotMap;

    use super::*;

    struct Fixed(HashMap<WidgetId, Rect>);

    impl LayoutHost for Fixed {
        fn geometry_of(&self, id: WidgetId) -> Rect {
            self.0.get(&id).copied().unwrap_or_default()
        }
        fn preferred_size_of(&self, id: WidgetId) -> Size {
            self.geometry_of(id).size()
        }
        fn min_size_of(&self, _id: WidgetId) -> Size {
            Size::ZERO
        }
        fn max_size_of(&self, _id: WidgetId) -> Size {
            Size::INFINITE
        }
    }

    #[test]
    fn preferred_size_is_bounding_box() {
        let mut keys: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());
        let host = Fixed(HashMap::from([
            (a, Rect::new(10.0, 0.0, 20.0, 5.0)),
            (b, Rect::new(0.0, 30.0, 5.0, 5.0)),
        ]));
        let layout = AbsoluteLayout;
        assert_eq!(layout.preferred_size(&host, &[a, b]), Size::new(30.0, 35.0));
        assert!(layout.arrange(Rect::new(0.0, 0.0, 100.0, 100.0), &host, &[a, b]).is_empty());
        assert_eq!(layout.max_size(&host, &[a]), Size::INFINITE);
    }

    #[test]
    fn no_children_is_zero() {
        let host = Fixed(HashMap::new());
        assert_eq!(AbsoluteLayout.preferred_size(&host, &[]), Size::ZERO);
        assert!(AbsoluteLayout.is_absolute());
    }
}
