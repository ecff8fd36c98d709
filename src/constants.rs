//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Startup Defaults
// ============================================================================

/// Default ruler width in pixels
pub const DEFAULT_WIDTH: i32 = 400;

/// Default ruler height in pixels
pub const DEFAULT_HEIGHT: i32 = 75;

/// Default window opacity
pub const DEFAULT_OPACITY: f64 = 0.70;

// ============================================================================
// Pointer Resize
// ============================================================================

/// Width of the outer band where the pointer resizes instead of moving
pub const RESIZE_BAND_WIDTH: i32 = 5;

/// Pointer resize only accepts widths strictly greater than this
pub const RESIZE_MIN_WIDTH_EXCLUSIVE: i32 = 50;

/// Pointer resize only accepts widths strictly less than this
pub const RESIZE_MAX_WIDTH_EXCLUSIVE: i32 = 200;

/// Pointer resize only accepts heights strictly greater than this
pub const RESIZE_MIN_HEIGHT_EXCLUSIVE: i32 = 50;

/// Smallest dimension any non-pointer path may produce
pub const MIN_DIMENSION: i32 = 1;

/// Largest width or height a ruler may take, from any path
pub const MAX_DIMENSION: i32 = 16_384;

// ============================================================================
// Keyboard Nudging
// ============================================================================

/// Plain arrow key move distance
pub const KEY_MOVE_STEP: i32 = 5;

/// Ctrl+arrow move distance
pub const KEY_FINE_MOVE_STEP: i32 = 1;

/// Ctrl+Shift+arrow resize distance
pub const KEY_RESIZE_STEP: i32 = 1;

// ============================================================================
// Ticks & Labels
// ============================================================================

/// Ticks are only drawn every this many pixels
pub const TICK_STRIDE: i32 = 2;

/// Spacing of labelled major ticks
pub const MAJOR_TICK_INTERVAL: i32 = 100;

/// Spacing of medium ticks
pub const MEDIUM_TICK_INTERVAL: i32 = 10;

pub const MAJOR_TICK_LENGTH: i32 = 15;
pub const MEDIUM_TICK_LENGTH: i32 = 10;
pub const MINOR_TICK_LENGTH: i32 = 5;

/// Left inset of the "N pixels" caption
pub const CAPTION_LEFT: i32 = 10;

/// Font size used for captions and tick labels
pub const LABEL_FONT_SIZE: f32 = 10.0;

/// Line height assumed for labels when the host has no font metrics
pub const DEFAULT_FONT_HEIGHT: i32 = 16;

// ============================================================================
// Menu
// ============================================================================

/// Opacity menu steps in percent (10, 20, ... 100)
pub const OPACITY_STEP_PERCENT: u8 = 10;

/// Tolerance when matching an opacity value to a menu step
pub const OPACITY_TOLERANCE: f64 = 0.001;

/// Notice shown for menu labels that map to no command
pub const UNKNOWN_MENU_ITEM_NOTICE: &str = "Unknown menu item.";
