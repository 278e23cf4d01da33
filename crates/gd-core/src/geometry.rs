//! f32 geometry primitives shared across the workspace.
//!
//! Both screen-space and world-space values use these types; the
//! coordinate space is documented at each use site.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A 2D point or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Round each component to the nearest multiple of `step`.
    pub fn snapped(self, step: f32) -> Self {
        if step <= 0.0 {
            return self;
        }
        Self::new(
            (self.x / step).round() * step,
            (self.y / step).round() * step,
        )
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Outset by `margin` on every side.
    pub fn expand(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let b = Bounds::new(10.0, 10.0, 20.0, 10.0);
        assert!(b.contains(Vec2::new(10.0, 10.0)));
        assert!(b.contains(Vec2::new(30.0, 20.0)));
        assert!(!b.contains(Vec2::new(30.1, 20.0)));
    }

    #[test]
    fn expand_outsets_every_side() {
        let b = Bounds::new(10.0, 10.0, 20.0, 10.0).expand(5.0);
        assert_eq!(b, Bounds::new(5.0, 5.0, 30.0, 20.0));
        assert!(b.contains(Vec2::new(6.0, 6.0)));
    }

    #[test]
    fn snapped_rounds_to_nearest_step() {
        let p = Vec2::new(103.0, 97.0).snapped(10.0);
        assert_eq!(p, Vec2::new(100.0, 100.0));
        let q = Vec2::new(-14.0, 15.0).snapped(10.0);
        assert_eq!(q, Vec2::new(-10.0, 20.0));
    }

    #[test]
    fn center_of_bounds() {
        let b = Bounds::new(70.0, 78.25, 60.0, 43.5);
        assert_eq!(b.center(), Vec2::new(100.0, 100.0));
    }
}
