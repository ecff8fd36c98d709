//! Ruler drawing - border, caption and tick marks as drawing commands.
//!
//! Everything is computed in the horizontal frame. A vertical ruler is the
//! same drawing rotated a quarter turn: [`FrameTransform`] maps horizontal
//! frame points into window coordinates, so tick and label logic exists only
//! once.
//!
//! ## Performance Notes
//!
//! Drawing is O(width). Only even x positions get a tick, which halves the
//! command count with no visible loss at normal screen densities.

use crate::constants::{
    CAPTION_LEFT, MAJOR_TICK_INTERVAL, MAJOR_TICK_LENGTH, MEDIUM_TICK_INTERVAL,
    MEDIUM_TICK_LENGTH, MINOR_TICK_LENGTH, TICK_STRIDE,
};
use crate::profile_scope;
use crate::types::Point;

/// Font measurements the renderer needs from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Line height in pixels
    pub height: i32,
}

/// Tick length tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickTier {
    /// Every 100px, with a numeric label
    Major,
    /// Every 10px
    Medium,
    /// Every other even pixel
    Minor,
}

impl TickTier {
    /// Tier for a position along the measuring axis; `None` where no tick is
    /// drawn (odd positions).
    pub fn at(x: i32) -> Option<Self> {
        if x % TICK_STRIDE != 0 {
            None
        } else if x % MAJOR_TICK_INTERVAL == 0 {
            Some(TickTier::Major)
        } else if x % MEDIUM_TICK_INTERVAL == 0 {
            Some(TickTier::Medium)
        } else {
            Some(TickTier::Minor)
        }
    }

    pub fn length(self) -> i32 {
        match self {
            TickTier::Major => MAJOR_TICK_LENGTH,
            TickTier::Medium => MEDIUM_TICK_LENGTH,
            TickTier::Minor => MINOR_TICK_LENGTH,
        }
    }

    pub fn has_label(self) -> bool {
        self == TickTier::Major
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// The "N pixels" caption
    Caption,
    /// Numeric label next to a major tick
    TickLabel,
}

/// A single drawing primitive, in whatever frame it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Outline rectangle from `origin` to `origin + (width, height)`
    Rect {
        origin: Point,
        width: i32,
        height: i32,
    },
    Line {
        from: Point,
        to: Point,
    },
    /// Text whose top-left corner sits at `origin`
    Text {
        text: String,
        origin: Point,
        kind: TextKind,
    },
}

/// Maps horizontal frame coordinates into window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTransform {
    Identity,
    /// Quarter turn clockwise: `(x, y)` maps to `(window_width - 1 - y, x)`
    QuarterTurn { window_width: i32 },
}

impl FrameTransform {
    pub fn map_point(&self, p: Point) -> Point {
        match *self {
            FrameTransform::Identity => p,
            FrameTransform::QuarterTurn { window_width } => Point::new(window_width - 1 - p.y, p.x),
        }
    }

    pub fn is_rotated(&self) -> bool {
        matches!(self, FrameTransform::QuarterTurn { .. })
    }

    /// Map a command into window coordinates. Rectangles are normalized so
    /// their origin stays the top-left corner.
    pub fn map_command(&self, command: &DrawCommand) -> DrawCommand {
        match command {
            DrawCommand::Rect {
                origin,
                width,
                height,
            } => {
                let a = self.map_point(*origin);
                let b = self.map_point(*origin + Point::new(*width, *height));
                DrawCommand::Rect {
                    origin: Point::new(a.x.min(b.x), a.y.min(b.y)),
                    width: (a.x - b.x).abs(),
                    height: (a.y - b.y).abs(),
                }
            }
            DrawCommand::Line { from, to } => DrawCommand::Line {
                from: self.map_point(*from),
                to: self.map_point(*to),
            },
            DrawCommand::Text { text, origin, kind } => DrawCommand::Text {
                text: text.clone(),
                origin: self.map_point(*origin),
                kind: *kind,
            },
        }
    }
}

/// A complete ruler drawing: commands in the horizontal frame plus the
/// transform into window coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulerDrawing {
    /// Length of the measuring axis
    pub length: i32,
    /// Thickness across the measuring axis
    pub thickness: i32,
    pub commands: Vec<DrawCommand>,
    pub transform: FrameTransform,
}

impl RulerDrawing {
    /// Commands mapped into window coordinates
    pub fn window_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.commands.iter().map(|c| self.transform.map_command(c))
    }
}

/// Draw a ruler for a window of the given physical size.
///
/// When vertical, the frame is rotated and width/height swapped before the
/// horizontal routine runs.
pub fn draw_ruler(
    window_width: i32,
    window_height: i32,
    is_vertical: bool,
    font: FontMetrics,
) -> RulerDrawing {
    profile_scope!("draw_ruler");

    let (length, thickness, transform) = if is_vertical {
        (
            window_height,
            window_width,
            FrameTransform::QuarterTurn { window_width },
        )
    } else {
        (window_width, window_height, FrameTransform::Identity)
    };

    RulerDrawing {
        length,
        thickness,
        commands: draw_horizontal(length, thickness, font),
        transform,
    }
}

/// The horizontal ruler routine.
pub fn draw_horizontal(width: i32, height: i32, font: FontMetrics) -> Vec<DrawCommand> {
    let width = width.max(0);
    let height = height.max(0);
    let mut commands = Vec::with_capacity(width as usize + 8);

    commands.push(DrawCommand::Rect {
        origin: Point::new(0, 0),
        width: width - 1,
        height: height - 1,
    });

    commands.push(DrawCommand::Text {
        text: format!("{width} pixels"),
        origin: Point::new(CAPTION_LEFT, height / 2 - font.height / 2),
        kind: TextKind::Caption,
    });

    for x in (0..width).step_by(TICK_STRIDE as usize) {
        let Some(tier) = TickTier::at(x) else {
            continue;
        };
        let tick = tier.length();

        if tier.has_label() {
            let label = x.to_string();
            commands.push(DrawCommand::Text {
                text: label.clone(),
                origin: Point::new(x, tick),
                kind: TextKind::TickLabel,
            });
            commands.push(DrawCommand::Text {
                text: label,
                origin: Point::new(x, height - tick - font.height),
                kind: TextKind::TickLabel,
            });
        }

        commands.push(DrawCommand::Line {
            from: Point::new(x, 0),
            to: Point::new(x, tick),
        });
        commands.push(DrawCommand::Line {
            from: Point::new(x, height),
            to: Point::new(x, height - tick),
        });
    }

    commands
}
