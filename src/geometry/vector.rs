//! Vector aliases and small numeric extensions.
//!
//! `NVec2`/`NVec3` are the nalgebra column vectors used throughout the crate.
//! [`VectorExt`] adds the scalar-division semantics the simulation relies on:
//! dividing by an exactly-zero scalar yields the zero vector rather than
//! infinities, which also makes normalizing a zero vector yield zero.

use nalgebra::{Vector2, Vector3};
use rand::Rng;

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

pub trait VectorExt: Sized {
    /// Componentwise division by `s`, or the zero vector when `s == 0.0`.
    ///
    /// The zero check is exact. This is documented behavior, not an error.
    fn div_or_zero(self, s: f64) -> Self;

    /// Unit vector in the same direction, or zero when the norm is zero.
    fn normalized_or_zero(self) -> Self;

    /// True when no component is NaN or infinite.
    fn all_finite(&self) -> bool;
}

impl VectorExt for NVec2 {
    fn div_or_zero(self, s: f64) -> Self {
        if s == 0.0 {
            NVec2::zeros()
        } else {
            self / s
        }
    }

    fn normalized_or_zero(self) -> Self {
        let norm = self.norm();
        self.div_or_zero(norm)
    }

    fn all_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl VectorExt for NVec3 {
    fn div_or_zero(self, s: f64) -> Self {
        if s == 0.0 {
            NVec3::zeros()
        } else {
            self / s
        }
    }

    fn normalized_or_zero(self) -> Self {
        let norm = self.norm();
        self.div_or_zero(norm)
    }

    fn all_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Uniform random position in `[-half_extent, half_extent]^2`.
///
/// Used when a scenario or graph node omits an initial position, so that
/// coincident starting points (which receive no inverse-square force) are
/// unlikely.
pub fn random_in_square(half_extent: f64) -> NVec2 {
    let mut rng = rand::thread_rng();
    NVec2::new(
        rng.gen_range(-half_extent..=half_extent),
        rng.gen_range(-half_extent..=half_extent),
    )
}
