//! Pointer and keyboard input handling for the ruler window.
//!
//! This module implements the geometry controller's event handlers: hit
//! testing of the resize band, drag-to-move, drag-to-resize under size
//! constraints, and keyboard nudging.
//!
//! ## Architecture
//!
//! Pointer presses are tracked by an explicit state machine (`InputState`)
//! holding the `DragSession` recorded at pointer down. Move and resize deltas
//! are always measured against that fixed record.
//!
//! ## Modules
//!
//! - `state` - Input state machine and drag session
//! - `hit_test` - Resize band classification
//! - `mouse_down` - Pointer down (session start) and double-click
//! - `mouse_up` - Pointer up (session end)
//! - `drag` - Pointer move (tooltip, cursor, move, resize)
//! - `keyboard` - Arrow-key nudging and orientation toggle

mod state;
mod mouse_down;
mod mouse_up;
mod drag;
mod keyboard;

pub use keyboard::{Key, Modifiers};
pub use state::{DragSession, InputState};
