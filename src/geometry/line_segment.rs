//! Line segments and the parametric 2D segment intersection used by
//! rectangle queries and by clients hit-testing spring visuals.

use crate::geometry::vector::{NVec2, NVec3};

/// Outcome of intersecting two 2D line segments.
///
/// `t` and `u` are the parameters along the two segments at which their
/// underlying lines cross; they are NaN when the lines are parallel or
/// collinear, and may fall outside `[0, 1]` when the lines cross beyond the
/// segments' extents. `point` is present only for an in-range crossing.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    pub point: Option<NVec2>,
    pub t: f64,
    pub u: f64,
}

/// A line segment in a two dimensional coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment2 {
    pub from: NVec2,
    pub to: NVec2,
}

// 2D cross product (determinant), the scalar z of the 3D cross.
fn cross2(a: NVec2, b: NVec2) -> f64 {
    a.x * b.y - a.y * b.x
}

impl LineSegment2 {
    pub fn new(from: NVec2, to: NVec2) -> Self {
        Self { from, to }
    }

    /// Difference of the endpoints, `to - from`.
    pub fn delta(&self) -> NVec2 {
        self.to - self.from
    }

    /// Parametric segment intersection.
    ///
    /// With this segment as `p + r t` and `other` as `q + s u`:
    ///
    /// ```text
    /// t = (q − p) × s / (r × s)
    /// u = (q − p) × r / (r × s)
    /// ```
    ///
    /// A denominator of exactly zero means the segments are parallel or
    /// collinear; no intersection is reported and both parameters are NaN.
    /// The zero check is exact on purpose: near-parallel segments are not
    /// epsilon-tolerant.
    pub fn intersect(&self, other: &LineSegment2) -> Intersection {
        let p = self.from;
        let q = other.from;
        let r = self.delta();
        let s = other.delta();

        let denom = cross2(r, s);
        if denom == 0.0 {
            return Intersection {
                point: None,
                t: f64::NAN,
                u: f64::NAN,
            };
        }

        let t = cross2(q - p, s) / denom;
        let u = cross2(q - p, r) / denom;

        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            // lines cross outside the segments' extents
            return Intersection { point: None, t, u };
        }

        Intersection {
            point: Some(p + r * t),
            t,
            u,
        }
    }
}

/// A line segment in a three dimensional coordinate system.
///
/// Bounds queries only; there is no 3D intersection routine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment3 {
    pub from: NVec3,
    pub to: NVec3,
}

impl LineSegment3 {
    pub fn new(from: NVec3, to: NVec3) -> Self {
        Self { from, to }
    }

    /// Difference of the endpoints, `to - from`.
    pub fn delta(&self) -> NVec3 {
        self.to - self.from
    }
}
