//! Icon panel: one glyph from the skin's icon font, centred.

use crate::geometry::{Alignment, Size};
use crate::render::{Font, FontMetrics, Renderer};
use crate::skin::Skin;
use crate::widget::DrawContext;

#[derive(Debug, Clone, PartialEq)]
pub struct IconPanel {
    glyph: String,
    font: Font,
}

impl IconPanel {
    /// `glyph` is the icon font's representation of the icon, usually one
    /// private-use character.
    pub fn new(glyph: impl Into<String>, skin: &Skin) -> Self {
        Self { glyph: glyph.into(), font: skin.icon_font.clone() }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn set_glyph(&mut self, glyph: impl Into<String>) {
        self.glyph = glyph.into();
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub(crate) fn content_size(&self, metrics: &dyn FontMetrics) -> Size {
        metrics.text_bounds(&self.font, &self.glyph)
    }

    pub(crate) fn draw(&self, ctx: &DrawContext<'_>, renderer: &mut dyn Renderer) {
        let bounds = self.content_size(ctx.metrics);
        let position = Alignment::MiddleCenter.align(bounds, ctx.bounds());
        renderer.set_font(&self.font);
        renderer.draw_text(&self.glyph, position);
    }
}
