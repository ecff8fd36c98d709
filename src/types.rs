//! Core geometry types shared by the controller, renderer and host.

use std::fmt;
use std::ops::{Add, Sub};

/// An integer point, either in screen or window-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Component-wise, saturating at the `i32` limits.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// On-screen placement and size of the ruler window.
///
/// Width and height are always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowBounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.x = origin.x;
        self.y = origin.y;
    }

    /// Convert a screen position to window-local coordinates
    #[inline]
    pub fn to_local(&self, screen: Point) -> Point {
        screen - self.origin()
    }

    /// True if a window-local point lies inside `[0, width) x [0, height)`
    pub fn contains_local(&self, local: Point) -> bool {
        local.x >= 0 && local.y >= 0 && local.x < self.width && local.y < self.height
    }

    /// True if a window-local point lies inside the rectangle shrunk by
    /// `inset` on every side.
    pub fn inner_contains_local(&self, local: Point, inset: i32) -> bool {
        let inner_width = self.width - 2 * inset;
        let inner_height = self.height - 2 * inset;
        if inner_width <= 0 || inner_height <= 0 {
            return false;
        }
        local.x >= inset
            && local.y >= inset
            && local.x < inset + inner_width
            && local.y < inset + inner_height
    }
}

impl fmt::Display for WindowBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}

/// Where the pointer sits relative to the window's outer resize band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResizeRegion {
    /// Interior, not resizable from here
    #[default]
    None,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl ResizeRegion {
    pub const ALL: [ResizeRegion; 9] = [
        ResizeRegion::None,
        ResizeRegion::N,
        ResizeRegion::NE,
        ResizeRegion::E,
        ResizeRegion::SE,
        ResizeRegion::S,
        ResizeRegion::SW,
        ResizeRegion::W,
        ResizeRegion::NW,
    ];

    #[inline]
    pub fn is_none(self) -> bool {
        self == ResizeRegion::None
    }

    /// Whether dragging from this region grows or shrinks the width
    pub fn resizes_width(self) -> bool {
        matches!(self, ResizeRegion::E | ResizeRegion::SE)
    }

    /// Whether dragging from this region grows or shrinks the height
    pub fn resizes_height(self) -> bool {
        matches!(self, ResizeRegion::S | ResizeRegion::SE)
    }

    /// Cursor shown while hovering this region
    pub fn cursor(self) -> CursorShape {
        match self {
            ResizeRegion::N | ResizeRegion::S => CursorShape::ResizeNorthSouth,
            ResizeRegion::E | ResizeRegion::W => CursorShape::ResizeEastWest,
            ResizeRegion::NW | ResizeRegion::SE => CursorShape::ResizeNwSe,
            _ => CursorShape::ResizeNeSw,
        }
    }
}

/// Cursor shapes the core can ask the host to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorShape {
    #[default]
    Default,
    /// Vertical double arrow
    ResizeNorthSouth,
    /// Horizontal double arrow
    ResizeEastWest,
    /// Diagonal arrow, top-left to bottom-right
    ResizeNwSe,
    /// Diagonal arrow, top-right to bottom-left
    ResizeNeSw,
}
