//! Visual styles.
//!
//! A [`Skin`] is built once by the embedder and handed to each control at
//! construction. Controls copy the style bundle they need, so later changes
//! to the skin only affect controls created afterwards.

use crate::render::{Color, Drawable, Font};

/// Style of a [`Label`](crate::widgets::Label).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub background: Drawable,
    pub font: Font,
    pub foreground: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            background: Drawable::Empty,
            font: Font::default(),
            foreground: Color::rgb(0xdd, 0xdd, 0xdd),
        }
    }
}

/// Style of a [`TextField`](crate::widgets::TextField) or spinner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldStyle {
    pub background_normal: Drawable,
    pub background_hovered: Drawable,
    pub background_focused: Drawable,
    pub selection: Drawable,
    pub font: Font,
    pub foreground: Color,
    pub caret: Color,
}

impl Default for TextFieldStyle {
    fn default() -> Self {
        Self {
            background_normal: Drawable::Solid(Color::rgb(0x3c, 0x3c, 0x3c)),
            background_hovered: Drawable::Solid(Color::rgb(0x46, 0x46, 0x46)),
            background_focused: Drawable::Solid(Color::rgb(0x28, 0x28, 0x28)),
            selection: Drawable::Solid(Color::rgb(0x3d, 0x6f, 0xa8)),
            font: Font::default(),
            foreground: Color::rgb(0xdd, 0xdd, 0xdd),
            caret: Color::WHITE,
        }
    }
}

/// Every style bundle the built-in controls use.
#[derive(Debug, Clone, PartialEq)]
pub struct Skin {
    pub label: LabelStyle,
    pub text_field: TextFieldStyle,
    pub spinner: TextFieldStyle,
    /// Font holding icon glyphs.
    pub icon_font: Font,
}

impl Default for Skin {
    fn default() -> Self {
        Self {
            label: LabelStyle::default(),
            text_field: TextFieldStyle::default(),
            spinner: TextFieldStyle {
                background_normal: Drawable::Image("spinner".into()),
                background_hovered: Drawable::Image("spinner-hovered".into()),
                background_focused: Drawable::Image("spinner-focused".into()),
                ..TextFieldStyle::default()
            },
            icon_font: Font::new("icons", 14.0),
        }
    }
}

impl Skin {
    /// Replace the label style (builder).
    pub fn with_label(mut self, style: LabelStyle) -> Self {
        self.label = style;
        self
    }

    /// Replace the text field style (builder).
    pub fn with_text_field(mut self, style: TextFieldStyle) -> Self {
        self.text_field = style;
        self
    }

    /// Replace the spinner style (builder).
    pub fn with_spinner(mut self, style: TextFieldStyle) -> Self {
        self.spinner = style;
        self
    }

    /// Replace the icon font (builder).
    pub fn with_icon_font(mut self, font: Font) -> Self {
        self.icon_font = font;
        self
    }
}
