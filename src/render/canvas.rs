//! gpui painter for ruler drawings.
//!
//! Lines and the border are painted straight to the GPU inside a `canvas`
//! element; text is laid out as absolutely positioned children on top of it.

use super::{DrawCommand, RulerDrawing};
use crate::constants::{DEFAULT_FONT_HEIGHT, LABEL_FONT_SIZE};
use crate::profile_scope;
use gpui::prelude::FluentBuilder;
use gpui::*;

/// Background, border and tick colors
#[derive(Clone, Copy)]
pub struct RulerColors {
    pub background: Hsla,
    pub ink: Hsla,
}

impl Default for RulerColors {
    /// White body with black ink. Window opacity is applied by the host on
    /// the whole element tree.
    fn default() -> Self {
        Self {
            background: white(),
            ink: black(),
        }
    }
}

/// Canvas element painting the border and ticks of `drawing`.
pub fn render_ruler_canvas(drawing: RulerDrawing, colors: RulerColors) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |bounds, _data, window, _cx| {
            paint_ruler(bounds, window, &drawing, colors);
        },
    )
    .absolute()
    .size_full()
}

fn paint_ruler(bounds: Bounds<Pixels>, window: &mut Window, drawing: &RulerDrawing, colors: RulerColors) {
    profile_scope!("paint_ruler");

    let ox = f32::from(bounds.origin.x);
    let oy = f32::from(bounds.origin.y);
    let at = |p: crate::types::Point| point(px(ox + p.x as f32), px(oy + p.y as f32));

    window.paint_quad(fill(bounds, colors.background));

    for command in drawing.window_commands() {
        match command {
            DrawCommand::Rect {
                origin,
                width,
                height,
            } => {
                let rect = Bounds {
                    origin: at(origin),
                    size: size(px(width as f32 + 1.0), px(height as f32 + 1.0)),
                };
                window.paint_quad(quad(
                    rect,
                    px(0.0),
                    transparent_black(),
                    px(1.0),
                    colors.ink,
                    Default::default(),
                ));
            }
            DrawCommand::Line { from, to } => {
                let mut path = PathBuilder::stroke(px(1.0));
                path.move_to(at(from));
                path.line_to(at(to));
                if let Ok(built) = path.build() {
                    window.paint_path(built, colors.ink);
                }
            }
            // Text is laid out by `ruler_labels`
            DrawCommand::Text { .. } => {}
        }
    }
}

/// Absolutely positioned text children for captions and tick labels.
///
/// gpui text cannot be rotated, so vertical rulers keep labels upright and
/// shift them left by one line so they sit where the rotated text would.
pub fn ruler_labels(drawing: &RulerDrawing, ink: Hsla) -> Vec<Div> {
    let rotated = drawing.transform.is_rotated();

    drawing
        .window_commands()
        .filter_map(|command| match command {
            DrawCommand::Text { text, origin, .. } => Some((text, origin)),
            _ => None,
        })
        .map(|(text, origin)| {
            let x = if rotated {
                origin.x - DEFAULT_FONT_HEIGHT
            } else {
                origin.x
            };
            div()
                .absolute()
                .left(px(x as f32))
                .top(px(origin.y as f32))
                .text_size(px(LABEL_FONT_SIZE))
                .line_height(px(DEFAULT_FONT_HEIGHT as f32))
                .text_color(ink)
                .when(rotated, |d| d.whitespace_nowrap())
                .child(text)
        })
        .collect()
}
