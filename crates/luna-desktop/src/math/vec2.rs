//! 2D vector type

use serde::{Deserialize, Serialize};

/// 2D vector for positions, pointer coordinates and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(3.0, 5.0);

        assert_eq!(a + b, Vec2::new(13.0, 25.0));
        assert_eq!(a - b, Vec2::new(7.0, 15.0));
        assert_eq!(b * 2.0, Vec2::new(6.0, 10.0));
    }

    #[test]
    fn test_vec2_zero_is_default() {
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }
}
