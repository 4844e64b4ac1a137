//! Axis-aligned hitboxes in screen-cell coordinates
//!
//! Rows grow downward, so `top` is the smallest row a box covers and
//! `top + height` is one past its bottom row.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of screen cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hitbox {
    pub height: i32,
    pub width: i32,
    /// Top row
    pub top: i32,
    /// Leftmost column
    pub left: i32,
}

impl Hitbox {
    /// Panics if `height` or `width` is not positive.
    pub fn new(height: i32, width: i32, top: i32, left: i32) -> Self {
        assert!(
            height > 0 && width > 0,
            "hitbox must have positive size, got {height}x{width}"
        );
        Self {
            height,
            width,
            top,
            left,
        }
    }

    /// One past the bottom row
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// One past the rightmost column
    #[inline]
    pub fn right(&self) -> i32 {
        self.left + self.width
    }
}

/// Collision test between the actor box `a` and an obstacle box `b`.
///
/// Horizontally the right edge of `a` may merely touch `b`. Vertically only
/// `a`'s bottom is checked, and strictly: a box whose bottom sits exactly on
/// `b.top` grazes it without colliding. The asymmetry sets how forgiving a
/// jump is, so keep it.
#[inline]
pub fn overlaps(a: &Hitbox, b: &Hitbox) -> bool {
    a.right() >= b.left && a.left < b.right() && a.bottom() > b.top
}
