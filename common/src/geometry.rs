//! Window geometry and behavior flags.

use bitflags::bitflags;

/// The position and size of a plugin's rendering area, in the coordinate space of the
/// browser-provided parent surface.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

bitflags! {
    /// Behavior flags of a plugin window handler.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
    pub struct WindowFlags: u32 {
        /// The handler draws into a browser-managed surface instead of owning a native window.
        const WINDOWLESS = 1 << 0;
        /// The drawing surface supports transparency.
        const TRANSPARENT = 1 << 1;
    }
}
