//! Snapshot rendering helpers.
//!
//! Functions that draw a canvas or subtree into a [`RecordingRenderer`] and
//! turn the recorded commands into stable plain text, one command per line.
//! Absolute positions are resolved, so each line reads in screen space.

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::render::Drawable;
use crate::widget::{WidgetId, WidgetTree};

use super::recorder::{DrawCommand, RecordingRenderer};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Draw the whole canvas and return its transcript.
///
/// # Examples
///
/// ```ignore
/// let text = render_to_string(&canvas);
/// assert!(text.contains("text \"Name\""));
/// ```
pub fn render_to_string(canvas: &Canvas) -> String {
    let mut renderer = RecordingRenderer::new();
    canvas.draw(&mut renderer);
    commands_to_string(renderer.commands())
}

/// Draw the subtree at `id` and return its transcript.
pub fn render_widget_to_string(tree: &WidgetTree, id: WidgetId) -> String {
    let mut renderer = RecordingRenderer::new();
    tree.draw(id, &mut renderer);
    commands_to_string(renderer.commands())
}

/// Convert recorded commands to text.
///
/// Translations are folded into the coordinates of the commands that follow
/// them and produce no line of their own. Font and color changes are
/// dropped; they are noise in layout snapshots.
pub fn commands_to_string(commands: &[DrawCommand]) -> String {
    let mut origin = Point::ZERO;
    let mut depth = 0usize;
    let mut lines = Vec::new();

    for command in commands {
        let indent = "  ".repeat(depth);
        match command {
            DrawCommand::Translate(offset) => origin = origin + *offset,
            DrawCommand::BeginClip(rect) => {
                let r = rect.translate(origin);
                lines.push(format!("{indent}clip {},{} {}x{}", r.x, r.y, r.width, r.height));
                depth += 1;
            }
            DrawCommand::EndClip => depth = depth.saturating_sub(1),
            DrawCommand::Drawable { drawable, rect } => {
                let r = rect.translate(origin);
                let what = match drawable {
                    Drawable::Empty => continue,
                    Drawable::Solid(c) => format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
                    Drawable::Image(name) => name.clone(),
                };
                lines.push(format!("{indent}fill {what} {},{} {}x{}", r.x, r.y, r.width, r.height));
            }
            DrawCommand::Text { text, position } => {
                let p = origin + *position;
                lines.push(format!("{indent}text {text:?} @ {},{}", p.x, p.y));
            }
            DrawCommand::Line { from, to } => {
                let (a, b) = (origin + *from, origin + *to);
                lines.push(format!("{indent}line {},{} -> {},{}", a.x, a.y, b.x, b.y));
            }
            DrawCommand::SetFont(_) | DrawCommand::SetForeground(_) => {}
        }
    }

    lines.join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::render::{Color, Font};

    #[test]
    fn translations_fold_into_positions() {
        let commands = vec![
            DrawCommand::Translate(Point::new(10.0, 5.0)),
            DrawCommand::BeginClip(Rect::new(0.0, 0.0, 20.0, 10.0)),
            DrawCommand::SetFont(Font::default()),
            DrawCommand::Text { text: "hi".into(), position: Point::new(2.0, 1.0) },
            DrawCommand::Translate(Point::new(-10.0, -5.0)),
            DrawCommand::EndClip,
            DrawCommand::Line { from: Point::ZERO, to: Point::new(0.0, 4.0) },
        ];
        assert_eq!(
            commands_to_string(&commands),
            "clip 10,5 20x10\n  text \"hi\" @ 12,6\nline 0,0 -> 0,4"
        );
    }

    #[test]
    fn empty_drawables_and_styles_are_skipped() {
        let commands = vec![
            DrawCommand::Drawable { drawable: Drawable::Empty, rect: Rect::new(0.0, 0.0, 1.0, 1.0) },
            DrawCommand::SetForeground(Color::WHITE),
            DrawCommand::Drawable {
                drawable: Drawable::Solid(Color::rgb(255, 0, 16)),
                rect: Rect::new(0.0, 0.0, 4.0, 2.0),
            },
        ];
        assert_eq!(commands_to_string(&commands), "fill #ff0010 0,0 4x2");
    }

    #[test]
    fn no_commands_is_empty() {
        assert!(commands_to_string(&[]).is_empty());
    }
}
