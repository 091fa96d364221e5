//! 2D size type

use serde::{Deserialize, Serialize};

use super::Vec2;

/// Width and height of a window frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum, used to apply a size floor
    pub fn max(self, floor: Size) -> Size {
        Size::new(self.width.max(floor.width), self.height.max(floor.height))
    }

    /// Grow (or shrink, for negative components) by a pointer delta
    pub fn grow(self, delta: Vec2) -> Size {
        Size::new(self.width + delta.x, self.height + delta.y)
    }
}
