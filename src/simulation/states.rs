//! Core state types for the point-mass simulation.
//!
//! Defines mirrored 2D and 3D body structs:
//! - `PointMass` using `NVec2` (2d)
//! - `PointMass3` using `NVec3` (3d)
//!
//! Both accumulate applied forces into a private per-step buffer that is
//! integrated and cleared by `update`. Point masses are shared between the
//! simulation container and local forces through [`PointMassRef`] handles;
//! identity (for the container's set semantics) is the handle allocation,
//! never the value.

use std::any::Any;
use std::sync::{Arc, RwLock};

use crate::geometry::vector::{random_in_square, NVec2, NVec3, VectorExt};

/// Shared handle to a 2D point mass.
pub type PointMassRef = Arc<RwLock<PointMass>>;

/// Shared handle to a 3D point mass.
pub type PointMass3Ref = Arc<RwLock<PointMass3>>;

/// An idealised physical body with mass but no spatial extent.
///
/// `mass` and `is_pinned` may be changed at any time and take effect on the
/// next step. Pinned point masses are skipped by well-behaved forces; the
/// integrator itself never checks the flag.
pub struct PointMass {
    pub mass: f64, // assumed > 0
    pub is_pinned: bool,
    pub damping: f64, // velocity retention per step, 1.0 = none
    pub position: NVec2,
    pub velocity: NVec2,
    pub tag: Option<Box<dyn Any + Send + Sync>>, // opaque, unused by the core
    force: NVec2, // per-step accumulator
}

impl PointMass {
    pub fn new(mass: f64, position: NVec2) -> Self {
        Self {
            mass,
            is_pinned: false,
            damping: 1.0,
            position,
            velocity: NVec2::zeros(),
            tag: None,
            force: NVec2::zeros(),
        }
    }

    /// Point mass scattered uniformly in `[-half_extent, half_extent]^2`.
    pub fn with_random_position(mass: f64, half_extent: f64) -> Self {
        Self::new(mass, random_in_square(half_extent))
    }

    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn into_ref(self) -> PointMassRef {
        Arc::new(RwLock::new(self))
    }

    pub fn new_ref(mass: f64, position: NVec2) -> PointMassRef {
        Self::new(mass, position).into_ref()
    }

    /// Length of the velocity vector.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Accumulate `force` for the current step.
    ///
    /// May be called any number of times between updates. A non-finite
    /// contribution is a caller bug, checked in debug builds only.
    pub fn apply_force(&mut self, force: NVec2) {
        debug_assert!(force.all_finite(), "non-finite force applied");
        self.force += force;
    }

    /// Add `impulse / mass` to the velocity immediately.
    ///
    /// Unlike forces, impulses bypass the accumulator and the step size; the
    /// position only changes on the next `update`.
    pub fn apply_impulse(&mut self, impulse: NVec2) {
        self.velocity += impulse.div_or_zero(self.mass);
    }

    /// Integrate one step of `dt` seconds: kick the velocity from the
    /// accumulated force, damp, drift the position, then clear the
    /// accumulator.
    ///
    /// Pinned point masses are not exempted here; whatever accumulated is
    /// integrated. Forces are responsible for never pushing a pinned body.
    pub fn update(&mut self, dt: f64) {
        self.velocity += self.force.div_or_zero(self.mass) * dt;
        self.velocity *= self.damping;
        self.position += self.velocity * dt;

        debug_assert!(
            self.position.all_finite(),
            "non-finite position after update"
        );

        self.force = NVec2::zeros();
    }
}

// =========================================================================================
// 3d stuff below
// =========================================================================================

/// 3D counterpart of [`PointMass`].
pub struct PointMass3 {
    pub mass: f64, // assumed > 0
    pub is_pinned: bool,
    pub damping: f64, // velocity retention per step, 1.0 = none
    pub position: NVec3,
    pub velocity: NVec3,
    pub tag: Option<Box<dyn Any + Send + Sync>>, // opaque, unused by the core
    force: NVec3, // per-step accumulator
}

impl PointMass3 {
    pub fn new(mass: f64, position: NVec3) -> Self {
        Self {
            mass,
            is_pinned: false,
            damping: 1.0,
            position,
            velocity: NVec3::zeros(),
            tag: None,
            force: NVec3::zeros(),
        }
    }

    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn into_ref(self) -> PointMass3Ref {
        Arc::new(RwLock::new(self))
    }

    pub fn new_ref(mass: f64, position: NVec3) -> PointMass3Ref {
        Self::new(mass, position).into_ref()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn apply_force(&mut self, force: NVec3) {
        debug_assert!(force.all_finite(), "non-finite force applied");
        self.force += force;
    }

    pub fn apply_impulse(&mut self, impulse: NVec3) {
        self.velocity += impulse.div_or_zero(self.mass);
    }

    pub fn update(&mut self, dt: f64) {
        self.velocity += self.force.div_or_zero(self.mass) * dt;
        self.velocity *= self.damping;
        self.position += self.velocity * dt;

        debug_assert!(
            self.position.all_finite(),
            "non-finite position after update"
        );

        self.force = NVec3::zeros();
    }
}
