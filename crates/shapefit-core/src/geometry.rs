//! Geometric utilities for image-space computations.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// 2D position in image space (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }

    /// Euclidean distance
    pub fn distance_to(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.to_nalgebra(), &other.to_nalgebra())
    }

    /// Point at fraction `t` along the vector from `self` to `other`
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let from = self.to_nalgebra();
        let to = other.to_nalgebra();
        Self::from_nalgebra(from + (to - from) * t)
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }
}

/// Distance between two optional points.
///
/// An absent endpoint yields `0.0` rather than an error.
pub fn distance_between(a: Option<&Point2D>, b: Option<&Point2D>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => a.distance_to(b),
        _ => 0.0,
    }
}
