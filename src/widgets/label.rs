//! Label widget: a single line of styled text.

use crate::geometry::{Point, Size};
use crate::render::{FontMetrics, Renderer};
use crate::skin::{LabelStyle, Skin};
use crate::widget::DrawContext;

/// Static text.
///
/// # Examples
///
/// ```ignore
/// let id = tree.create(WidgetNode::new(Label::new("Name", &skin)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    style: LabelStyle,
}

impl Label {
    pub fn new(text: impl Into<String>, skin: &Skin) -> Self {
        Self { text: text.into(), style: skin.label.clone() }
    }

    /// Replace the style (builder pattern).
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: LabelStyle) {
        self.style = style;
    }

    pub(crate) fn content_size(&self, metrics: &dyn FontMetrics) -> Size {
        metrics.text_bounds(&self.style.font, &self.text)
    }

    pub(crate) fn draw(&self, ctx: &DrawContext<'_>, renderer: &mut dyn Renderer) {
        renderer.draw_drawable(&self.style.background, ctx.bounds());
        renderer.set_font(&self.style.font);
        renderer.set_foreground(self.style.foreground);
        renderer.draw_text(&self.text, Point::new(ctx.padding.left, ctx.padding.top));
    }
}
