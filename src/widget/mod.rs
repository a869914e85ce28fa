//! Widget system: the node arena, controls, dispatch and size negotiation.

pub mod dispatch;
pub mod error;
pub mod node;
pub mod request;
mod sizing;
pub mod tree;

pub use dispatch::{ControlContext, DrawContext};
pub use error::TreeError;
pub use node::{Control, WidgetId, WidgetNode};
pub use request::{Request, RequestQueue};
pub use tree::WidgetTree;
