//! Node types: WidgetId, WidgetNode, Control.

use slotmap::new_key_type;

use crate::event::ListenerSet;
use crate::geometry::{Padding, Point, Rect, Size};
use crate::layout::{AbsoluteLayout, Layout};
use crate::widgets::{IconPanel, Label, Spinner, TextField};

new_key_type! {
    /// Unique identifier for a widget. Copy, lightweight (u64).
    pub struct WidgetId;
}

// ---------------------------------------------------------------------------
// Control
// ---------------------------------------------------------------------------

/// The behaviour a node carries.
///
/// Every widget is the same [`WidgetNode`]; what it draws and how it reacts
/// to input is decided by matching on this payload.
#[derive(Debug, Default)]
pub enum Control {
    /// Plain container. Draws nothing itself.
    #[default]
    Panel,
    Label(Label),
    IconPanel(IconPanel),
    TextField(TextField),
    Spinner(Spinner),
}

impl Control {
    /// Short type name, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Control::Panel => "Panel",
            Control::Label(_) => "Label",
            Control::IconPanel(_) => "IconPanel",
            Control::TextField(_) => "TextField",
            Control::Spinner(_) => "Spinner",
        }
    }

    /// Whether a node is sized to its content when created.
    pub(crate) fn sizes_to_content(&self) -> bool {
        matches!(self, Control::Label(_) | Control::IconPanel(_))
    }

    pub(crate) fn default_padding(&self) -> Padding {
        match self {
            Control::TextField(_) => TextField::PADDING,
            Control::Spinner(_) => Spinner::PADDING,
            _ => Padding::ZERO,
        }
    }

    pub(crate) fn default_focusable(&self) -> bool {
        matches!(self, Control::TextField(_) | Control::Spinner(_))
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Control::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            Control::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_icon_panel_mut(&mut self) -> Option<&mut IconPanel> {
        match self {
            Control::IconPanel(icon) => Some(icon),
            _ => None,
        }
    }

    /// The text field, including the one inside a spinner.
    pub fn as_text_field(&self) -> Option<&TextField> {
        match self {
            Control::TextField(field) => Some(field),
            Control::Spinner(spinner) => Some(spinner.field()),
            _ => None,
        }
    }

    pub fn as_text_field_mut(&mut self) -> Option<&mut TextField> {
        match self {
            Control::TextField(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_spinner(&self) -> Option<&Spinner> {
        match self {
            Control::Spinner(spinner) => Some(spinner),
            _ => None,
        }
    }

    pub fn as_spinner_mut(&mut self) -> Option<&mut Spinner> {
        match self {
            Control::Spinner(spinner) => Some(spinner),
            _ => None,
        }
    }
}

impl From<Label> for Control {
    fn from(label: Label) -> Self {
        Control::Label(label)
    }
}

impl From<IconPanel> for Control {
    fn from(icon: IconPanel) -> Self {
        Control::IconPanel(icon)
    }
}

impl From<TextField> for Control {
    fn from(field: TextField) -> Self {
        Control::TextField(field)
    }
}

impl From<Spinner> for Control {
    fn from(spinner: Spinner) -> Self {
        Control::Spinner(spinner)
    }
}

// ---------------------------------------------------------------------------
// WidgetNode
// ---------------------------------------------------------------------------

/// Data associated with a single widget.
///
/// Geometry is in parent space. Build a node with the builder methods, then
/// hand it to [`WidgetTree::create`](super::WidgetTree::create); afterwards
/// all mutation goes through the tree so invalidation stays consistent.
#[derive(Debug)]
pub struct WidgetNode {
    pub(crate) geometry: Rect,
    pub(crate) padding: Padding,
    pub(crate) layout: Box<dyn Layout>,
    pub(crate) min_size: Option<Size>,
    pub(crate) max_size: Option<Size>,
    pub(crate) preferred_size: Option<Size>,
    pub(crate) valid: bool,
    pub(crate) focusable: bool,
    pub(crate) focused: bool,
    pub(crate) enabled: bool,
    pub(crate) visible: bool,
    pub(crate) clip: bool,
    pub(crate) accepts_tab_input: bool,
    pub(crate) name: Option<String>,
    pub(crate) listeners: ListenerSet,
    pub(crate) control: Control,
}

impl WidgetNode {
    /// Create a node carrying `control`, with the control's default padding
    /// and focusability.
    pub fn new(control: impl Into<Control>) -> Self {
        let control = control.into();
        Self {
            geometry: Rect::EMPTY,
            padding: control.default_padding(),
            layout: Box::new(AbsoluteLayout),
            min_size: None,
            max_size: None,
            preferred_size: None,
            valid: true,
            focusable: control.default_focusable(),
            focused: false,
            enabled: true,
            visible: true,
            clip: true,
            accepts_tab_input: false,
            name: None,
            listeners: ListenerSet::default(),
            control,
        }
    }

    /// A plain container.
    pub fn panel() -> Self {
        Self::new(Control::Panel)
    }

    // ── Builders ─────────────────────────────────────────────────────

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_geometry(mut self, geometry: Rect) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.geometry = Rect::from_parts(position, self.geometry.size());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.geometry = Rect::from_parts(self.geometry.position(), size);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    pub fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = Some(size);
        self
    }

    pub fn with_max_size(mut self, size: Size) -> Self {
        self.max_size = Some(size);
        self
    }

    pub fn with_preferred_size(mut self, size: Size) -> Self {
        self.preferred_size = Some(size);
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Whether drawing is clipped to the node's bounds (default `true`).
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    /// Deliver Tab keys to this node instead of moving focus.
    pub fn with_tab_input(mut self, accepts: bool) -> Self {
        self.accepts_tab_input = accepts;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn position(&self) -> Point {
        self.geometry.position()
    }

    pub fn size(&self) -> Size {
        self.geometry.size()
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn layout(&self) -> &dyn Layout {
        self.layout.as_ref()
    }

    /// Whether cached geometry and layout are up to date.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn clips(&self) -> bool {
        self.clip
    }

    pub fn accepts_tab_input(&self) -> bool {
        self.accepts_tab_input
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn min_size_override(&self) -> Option<Size> {
        self.min_size
    }

    pub fn max_size_override(&self) -> Option<Size> {
        self.max_size
    }

    pub fn preferred_size_override(&self) -> Option<Size> {
        self.preferred_size
    }

    pub fn control(&self) -> &Control {
        &self.control
    }
}

impl Default for WidgetNode {
    fn default() -> Self {
        Self::panel()
    }
}
