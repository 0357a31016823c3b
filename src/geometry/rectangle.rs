//! Axis-aligned rectangles (y grows upward) and the closest-edge segment
//! intersection used by the boundary containment force.

use std::fmt;

use crate::geometry::line_segment::LineSegment2;
use crate::geometry::vector::{NVec2, NVec3};

#[derive(Debug)]
pub enum GeometryError {
    /// A rectangle minimum exceeded its maximum on the named axis.
    InvalidRectangle { axis: char, min: f64, max: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidRectangle { axis, min, max } => write!(
                f,
                "rectangle min.{axis} ({min}) is greater than max.{axis} ({max})"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// An axis-aligned rectangular area in a two dimensional coordinate system.
///
/// `min` is the bottom-left corner and `max` the top-right; construction
/// validates `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle2 {
    min: NVec2,
    max: NVec2,
}

impl Rectangle2 {
    pub fn new(min: NVec2, max: NVec2) -> Result<Self, GeometryError> {
        if min.x > max.x {
            return Err(GeometryError::InvalidRectangle {
                axis: 'x',
                min: min.x,
                max: max.x,
            });
        }
        if min.y > max.y {
            return Err(GeometryError::InvalidRectangle {
                axis: 'y',
                min: min.y,
                max: max.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Rectangle from its minimum corner and a non-negative size.
    pub fn from_size(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::new(NVec2::new(x, y), NVec2::new(x + width, y + height))
    }

    /// Smallest rectangle covering both points.
    ///
    /// Infallible: min and max are taken componentwise, so any pair of points
    /// is valid. This is the spring-bounds case.
    pub fn covering(a: NVec2, b: NVec2) -> Self {
        Self {
            min: NVec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: NVec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn min(&self) -> NVec2 {
        self.min
    }

    pub fn max(&self) -> NVec2 {
        self.max
    }

    pub fn left(&self) -> f64 {
        self.min.x
    }

    pub fn right(&self) -> f64 {
        self.max.x
    }

    pub fn bottom(&self) -> f64 {
        self.min.y
    }

    pub fn top(&self) -> f64 {
        self.max.y
    }

    pub fn bottom_left(&self) -> NVec2 {
        self.min
    }

    pub fn bottom_right(&self) -> NVec2 {
        NVec2::new(self.max.x, self.min.y)
    }

    pub fn top_left(&self) -> NVec2 {
        NVec2::new(self.min.x, self.max.y)
    }

    pub fn top_right(&self) -> NVec2 {
        self.max
    }

    /// The four edges in fixed clockwise order: top, right, bottom, left.
    pub fn edges(&self) -> [LineSegment2; 4] {
        [
            LineSegment2::new(self.top_left(), self.top_right()),
            LineSegment2::new(self.top_right(), self.bottom_right()),
            LineSegment2::new(self.bottom_right(), self.bottom_left()),
            LineSegment2::new(self.bottom_left(), self.top_left()),
        ]
    }

    /// Intersect `segment` with this rectangle's boundary.
    ///
    /// Tests the segment against all four edges and keeps the in-range hit
    /// with the smallest parameter along `segment` (closest to
    /// `segment.from`). The comparison is strict, so on an exact parameter
    /// tie the first edge in enumeration order wins. Returns the hit point
    /// and the parameter, or `None` when no edge intersects in range.
    pub fn try_intersect(&self, segment: &LineSegment2) -> Option<(NVec2, f64)> {
        let mut best: Option<(NVec2, f64)> = None;
        for edge in self.edges() {
            let hit = edge.intersect(segment);
            if let Some(point) = hit.point {
                // hit.u is the parameter along `segment`
                match best {
                    Some((_, min_t)) if hit.u >= min_t => {}
                    _ => best = Some((point, hit.u)),
                }
            }
        }
        best
    }
}

/// An axis-aligned box in a three dimensional coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle3 {
    min: NVec3,
    max: NVec3,
}

impl Rectangle3 {
    pub fn new(min: NVec3, max: NVec3) -> Result<Self, GeometryError> {
        if min.x > max.x {
            return Err(GeometryError::InvalidRectangle {
                axis: 'x',
                min: min.x,
                max: max.x,
            });
        }
        if min.y > max.y {
            return Err(GeometryError::InvalidRectangle {
                axis: 'y',
                min: min.y,
                max: max.y,
            });
        }
        if min.z > max.z {
            return Err(GeometryError::InvalidRectangle {
                axis: 'z',
                min: min.z,
                max: max.z,
            });
        }
        Ok(Self { min, max })
    }

    /// Smallest box covering both points.
    pub fn covering(a: NVec3, b: NVec3) -> Self {
        Self {
            min: NVec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: NVec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn min(&self) -> NVec3 {
        self.min
    }

    pub fn max(&self) -> NVec3 {
        self.max
    }
}
