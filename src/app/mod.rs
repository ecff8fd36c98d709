//! Application module - the ruler's geometry controller and its commands.
//!
//! This module is organized into several submodules:
//! - `state` - The Ruler struct definition
//! - `lifecycle` - Construction and startup parameter round trip
//! - `geometry` - Orientation toggle, explicit size, move and resize helpers
//! - `menu` - Context menu commands and handlers
//! - `size_dialog` - "Set size..." dialog model
//! - `gui` - gpui window host (`gui` feature)

mod state;
mod lifecycle;
mod geometry;
mod menu;
mod size_dialog;
#[cfg(feature = "gui")]
pub mod gui;

pub use menu::{MenuCommand, MenuEntry, about_text, menu_entries};
pub use size_dialog::{SizeDialog, SizeField};
pub use state::Ruler;
