//! Rendering - the ruler drawing and its gpui painter.
//!
//! - `ruler` - Pure drawing routine producing `DrawCommand`s
//! - `canvas` - Replays commands into a gpui window (`gui` feature)

mod ruler;
#[cfg(feature = "gui")]
pub mod canvas;

pub use ruler::{
    DrawCommand, FontMetrics, FrameTransform, RulerDrawing, TextKind, TickTier, draw_horizontal,
    draw_ruler,
};
