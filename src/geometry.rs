use bevy::prelude::Vec3;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Axis-aligned rectangle in window pixel space (origin top-left, y down).
/// Every collision test in the game runs through [`Rect::intersects`],
/// including the ball, whose circle is approximated by its bounding square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Strict overlap test, rectangles that only touch edges do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Center of the rect in bevy world coordinates (origin at window center,
    /// y up).
    pub fn translation(&self, z: f32) -> Vec3 {
        Vec3::new(
            self.center_x() - WINDOW_WIDTH / 2.0,
            WINDOW_HEIGHT / 2.0 - self.center_y(),
            z,
        )
    }
}
