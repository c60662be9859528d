//! Discrete tile positions and continuous 3-D points.
//!
//! `TilePos` is the grid coordinate used by the pathfinder: integer column
//! `(x, y)` plus the tile height `z`.  It is `Hash + Eq` so it can key the
//! search's visited set.  `Vec3` is the agent's continuous position in world
//! space after projection.

use std::fmt;
use std::ops::{Add, Sub};

// ── TilePos ───────────────────────────────────────────────────────────────────

/// A grid cell: column `(x, y)` and the tile height `z` stored at that column.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl TilePos {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The `(x, y)` column, ignoring height.
    #[inline]
    pub fn column(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// `true` if both positions share the same `(x, y)` column.
    #[inline]
    pub fn same_column(self, other: TilePos) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// 3-D Euclidean distance in grid units (`hypot(dx, dy, dz)`).
    pub fn distance_to(self, other: TilePos) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        let dz = self.z as f64 - other.z as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// `true` if `other` is one of the four diagonal neighbours of `self`.
    #[inline]
    pub fn is_diagonal_to(self, other: TilePos) -> bool {
        self.x.abs_diff(other.x) == 1 && self.y.abs_diff(other.y) == 1
    }

    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ── Vec3 ──────────────────────────────────────────────────────────────────────

/// A continuous point or direction in world space.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the direction of `self`.  The zero vector normalises
    /// to zero rather than NaN.
    pub fn normalize(self) -> Vec3 {
        let m = self.magnitude();
        if m == 0.0 {
            Vec3::ZERO
        } else {
            Vec3::new(self.x / m, self.y / m, self.z / m)
        }
    }

    #[inline]
    pub fn distance_to(self, other: Vec3) -> f64 {
        (other - self).magnitude()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
