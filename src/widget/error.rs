//! Tree operation errors.

use super::WidgetId;

/// Errors from structural tree operations.
///
/// These report misuse of the tree API. Input handling and geometry setters
/// never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("widget {0:?} already has a parent")]
    AlreadyParented(WidgetId),
    #[error("widget {child:?} is not a child of {parent:?}")]
    NotAChild { parent: WidgetId, child: WidgetId },
    #[error("unknown widget {0:?}")]
    UnknownWidget(WidgetId),
    #[error("the canvas root cannot be attached or destroyed")]
    RootWidget,
    #[error("adding {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: WidgetId, child: WidgetId },
    #[error("widget {0:?} must be removed from its parent first")]
    StillParented(WidgetId),
}
