//! Force contributors for the point-mass engine
//!
//! Defines the 2D and 3D force traits and the built-in force models:
//! inverse-square repulsion, springs, constant flow, origin attraction,
//! viscous drag, and boundary containment.
//!
//! Forces come in two kinds. A [`GlobalForce`] sees the whole simulation and
//! decides for itself which point masses it pushes; a [`LocalForce`] owns
//! handles to the point masses it acts on and pushes only those. All built-in
//! forces skip pinned point masses.

use std::sync::Arc;

use crate::geometry::line_segment::LineSegment2;
use crate::geometry::rectangle::{Rectangle2, Rectangle3};
use crate::geometry::vector::{NVec2, NVec3, VectorExt};
use crate::simulation::engine::{Simulation, Simulation3};
use crate::simulation::states::{PointMass3Ref, PointMassRef};

/// A force with simulation-wide reach, applied once per step before local
/// forces and integration.
pub trait GlobalForce {
    fn apply_to(&self, simulation: &Simulation);
}

/// A force acting on a fixed set of point masses it holds handles to.
pub trait LocalForce {
    /// The point masses this force acts on.
    fn point_masses(&self) -> &[PointMassRef];

    /// Accumulate this step's contribution into the held point masses.
    fn apply(&self);
}

/// Pairwise repulsion between all point masses.
///
/// Every ordered pair `(a, b)` contributes `delta * strength / d^2` to `b`,
/// where `delta` is the raw vector from `a` to `b`, so the magnitude falls
/// off as `strength / d`. Pinned targets, coincident pairs (`d == 0`) and
/// pairs farther apart than `max_distance` are skipped.
pub struct CoulombForce {
    pub strength: f64,
    pub max_distance: f64,
}

impl CoulombForce {
    pub const DEFAULT_STRENGTH: f64 = 20_000.0;

    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            max_distance: f64::INFINITY,
        }
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }
}

impl Default for CoulombForce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STRENGTH)
    }
}

impl GlobalForce for CoulombForce {
    fn apply_to(&self, simulation: &Simulation) {
        let point_masses = simulation.point_masses();
        for a in point_masses {
            // copy the position out so the read lock is released before b is
            // write-locked (a and b swap roles within the same step)
            let a_position = a.read().unwrap().position;
            for b in point_masses {
                if Arc::ptr_eq(a, b) {
                    continue;
                }
                let mut b = b.write().unwrap();
                if b.is_pinned {
                    continue;
                }
                let delta = b.position - a_position;
                let distance = delta.norm();
                if distance == 0.0 || distance > self.max_distance {
                    continue;
                }
                let force = delta * self.strength / (distance * distance);
                b.apply_force(force);
            }
        }
    }
}

/// Hookean spring between two point masses.
///
/// Pulls (or pushes) both endpoints toward the rest `length` with stiffness
/// `k`. Each free end receives half the restoring force; when exactly one
/// end is pinned the free end receives the full force instead, so the spring
/// settles at the same rate. Two pinned ends receive nothing.
pub struct Spring {
    endpoints: [PointMassRef; 2],
    pub length: f64,
    pub k: f64,
}

impl Spring {
    pub const DEFAULT_LENGTH: f64 = 100.0;
    pub const DEFAULT_K: f64 = 80.0;

    pub fn new(source: PointMassRef, target: PointMassRef) -> Self {
        // a self-spring would deadlock on the endpoint lock
        debug_assert!(
            !Arc::ptr_eq(&source, &target),
            "spring endpoints must be distinct point masses"
        );
        Self {
            endpoints: [source, target],
            length: Self::DEFAULT_LENGTH,
            k: Self::DEFAULT_K,
        }
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn source(&self) -> &PointMassRef {
        &self.endpoints[0]
    }

    pub fn target(&self) -> &PointMassRef {
        &self.endpoints[1]
    }

    /// Segment from the source to the target position.
    pub fn line_segment(&self) -> LineSegment2 {
        LineSegment2::new(
            self.endpoints[0].read().unwrap().position,
            self.endpoints[1].read().unwrap().position,
        )
    }

    /// Smallest axis-aligned rectangle containing both endpoints.
    pub fn bounds(&self) -> Rectangle2 {
        Rectangle2::covering(
            self.endpoints[0].read().unwrap().position,
            self.endpoints[1].read().unwrap().position,
        )
    }
}

impl LocalForce for Spring {
    fn point_masses(&self) -> &[PointMassRef] {
        &self.endpoints
    }

    fn apply(&self) {
        let mut source = self.endpoints[0].write().unwrap();
        let mut target = self.endpoints[1].write().unwrap();

        let delta = target.position - source.position;
        let displacement = self.length - delta.norm();
        let direction = delta.normalized_or_zero();

        debug_assert!(!displacement.is_nan(), "spring displacement is NaN");

        match (source.is_pinned, target.is_pinned) {
            (false, false) => {
                let force = direction * (self.k * displacement * 0.5);
                source.apply_force(-force);
                target.apply_force(force);
            }
            (true, false) => {
                let force = direction * (self.k * displacement);
                target.apply_force(force);
            }
            (false, true) => {
                let force = direction * (self.k * displacement);
                source.apply_force(-force);
            }
            (true, true) => {}
        }
    }
}

/// Constant force pushing every free point mass toward negative y.
pub struct FlowDownwardForce {
    pub magnitude: f64,
}

impl FlowDownwardForce {
    pub const DEFAULT_MAGNITUDE: f64 = 10.0;

    pub fn new(magnitude: f64) -> Self {
        Self { magnitude }
    }
}

impl Default for FlowDownwardForce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAGNITUDE)
    }
}

impl GlobalForce for FlowDownwardForce {
    fn apply_to(&self, simulation: &Simulation) {
        let force = NVec2::new(0.0, -self.magnitude);
        for point_mass in simulation.point_masses() {
            let mut point_mass = point_mass.write().unwrap();
            if point_mass.is_pinned {
                continue;
            }
            point_mass.apply_force(force);
        }
    }
}

/// Linear pull toward the origin, `position * -stiffness`.
///
/// A non-positive stiffness disables the force entirely.
pub struct OriginAttractionForce {
    pub stiffness: f64,
}

impl OriginAttractionForce {
    pub const DEFAULT_STIFFNESS: f64 = 40.0;

    pub fn new(stiffness: f64) -> Self {
        Self { stiffness }
    }
}

impl Default for OriginAttractionForce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STIFFNESS)
    }
}

impl GlobalForce for OriginAttractionForce {
    fn apply_to(&self, simulation: &Simulation) {
        if self.stiffness <= 0.0 {
            return;
        }
        for point_mass in simulation.point_masses() {
            let mut point_mass = point_mass.write().unwrap();
            if point_mass.is_pinned {
                continue;
            }
            let force = point_mass.position * -self.stiffness;
            point_mass.apply_force(force);
        }
    }
}

/// Drag proportional to velocity, `velocity * -coefficient`.
pub struct ViscousForce {
    pub coefficient: f64,
}

impl ViscousForce {
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }
}

impl GlobalForce for ViscousForce {
    fn apply_to(&self, simulation: &Simulation) {
        for point_mass in simulation.point_masses() {
            let mut point_mass = point_mass.write().unwrap();
            if point_mass.is_pinned {
                continue;
            }
            let force = point_mass.velocity * -self.coefficient;
            point_mass.apply_force(force);
        }
    }
}

/// Pushes escaped point masses back inside an axis-aligned rectangle.
///
/// Each axis is handled independently: an overshoot of `o` past a bound
/// yields a restoring component of `o^magnitude`, capped at `max_force`.
/// Point masses inside the bounds feel nothing.
pub struct KeepWithinBoundsForce {
    pub bounds: Rectangle2,
    pub magnitude: f64,
    pub max_force: f64,
}

impl KeepWithinBoundsForce {
    pub const DEFAULT_MAGNITUDE: f64 = 3.0;
    pub const DEFAULT_MAX_FORCE: f64 = 1000.0;

    pub fn new(bounds: Rectangle2) -> Self {
        Self {
            bounds,
            magnitude: Self::DEFAULT_MAGNITUDE,
            max_force: Self::DEFAULT_MAX_FORCE,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    pub fn with_max_force(mut self, max_force: f64) -> Self {
        self.max_force = max_force;
        self
    }

    fn restoring(&self, overshoot: f64) -> f64 {
        overshoot.powf(self.magnitude).min(self.max_force)
    }
}

impl GlobalForce for KeepWithinBoundsForce {
    fn apply_to(&self, simulation: &Simulation) {
        for point_mass in simulation.point_masses() {
            let mut point_mass = point_mass.write().unwrap();
            if point_mass.is_pinned {
                continue;
            }
            let position = point_mass.position;
            let mut force = NVec2::zeros();
            if position.x < self.bounds.left() {
                force.x += self.restoring(self.bounds.left() - position.x);
            } else if position.x > self.bounds.right() {
                force.x -= self.restoring(position.x - self.bounds.right());
            }
            if position.y < self.bounds.bottom() {
                force.y += self.restoring(self.bounds.bottom() - position.y);
            } else if position.y > self.bounds.top() {
                force.y -= self.restoring(position.y - self.bounds.top());
            }
            if force != NVec2::zeros() {
                point_mass.apply_force(force);
            }
        }
    }
}

// =========================================================================================
// 2D stuff above
// 3D stuff below
// =========================================================================================

/// 3D counterpart of [`GlobalForce`].
pub trait GlobalForce3 {
    fn apply_to(&self, simulation: &Simulation3);
}

/// 3D counterpart of [`LocalForce`].
pub trait LocalForce3 {
    fn point_masses(&self) -> &[PointMass3Ref];

    fn apply(&self);
}

/// 3D Hookean spring, same pinning rules as [`Spring`].
pub struct Spring3 {
    endpoints: [PointMass3Ref; 2],
    pub length: f64,
    pub k: f64,
}

impl Spring3 {
    pub fn new(source: PointMass3Ref, target: PointMass3Ref) -> Self {
        debug_assert!(
            !Arc::ptr_eq(&source, &target),
            "spring endpoints must be distinct point masses"
        );
        Self {
            endpoints: [source, target],
            length: Spring::DEFAULT_LENGTH,
            k: Spring::DEFAULT_K,
        }
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn source(&self) -> &PointMass3Ref {
        &self.endpoints[0]
    }

    pub fn target(&self) -> &PointMass3Ref {
        &self.endpoints[1]
    }

    /// Smallest axis-aligned box containing both endpoints.
    pub fn bounds(&self) -> Rectangle3 {
        Rectangle3::covering(
            self.endpoints[0].read().unwrap().position,
            self.endpoints[1].read().unwrap().position,
        )
    }
}

impl LocalForce3 for Spring3 {
    fn point_masses(&self) -> &[PointMass3Ref] {
        &self.endpoints
    }

    fn apply(&self) {
        let mut source = self.endpoints[0].write().unwrap();
        let mut target = self.endpoints[1].write().unwrap();

        let delta = target.position - source.position;
        let displacement = self.length - delta.norm();
        let direction = delta.normalized_or_zero();

        debug_assert!(!displacement.is_nan(), "spring displacement is NaN");

        match (source.is_pinned, target.is_pinned) {
            (false, false) => {
                let force = direction * (self.k * displacement * 0.5);
                source.apply_force(-force);
                target.apply_force(force);
            }
            (true, false) => {
                let force = direction * (self.k * displacement);
                target.apply_force(force);
            }
            (false, true) => {
                let force = direction * (self.k * displacement);
                source.apply_force(-force);
            }
            (true, true) => {}
        }
    }
}

/// 3D counterpart of [`KeepWithinBoundsForce`], acting per axis on a box.
pub struct KeepWithinBounds3Force {
    pub bounds: Rectangle3,
    pub magnitude: f64,
    pub max_force: f64,
}

impl KeepWithinBounds3Force {
    pub fn new(bounds: Rectangle3) -> Self {
        Self {
            bounds,
            magnitude: KeepWithinBoundsForce::DEFAULT_MAGNITUDE,
            max_force: KeepWithinBoundsForce::DEFAULT_MAX_FORCE,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    pub fn with_max_force(mut self, max_force: f64) -> Self {
        self.max_force = max_force;
        self
    }

    fn restoring(&self, overshoot: f64) -> f64 {
        overshoot.powf(self.magnitude).min(self.max_force)
    }
}

impl GlobalForce3 for KeepWithinBounds3Force {
    fn apply_to(&self, simulation: &Simulation3) {
        let min = self.bounds.min();
        let max = self.bounds.max();
        for point_mass in simulation.point_masses() {
            let mut point_mass = point_mass.write().unwrap();
            if point_mass.is_pinned {
                continue;
            }
            let position = point_mass.position;
            let mut force = NVec3::zeros();
            if position.x < min.x {
                force.x += self.restoring(min.x - position.x);
            } else if position.x > max.x {
                force.x -= self.restoring(position.x - max.x);
            }
            if position.y < min.y {
                force.y += self.restoring(min.y - position.y);
            } else if position.y > max.y {
                force.y -= self.restoring(position.y - max.y);
            }
            if position.z < min.z {
                force.z += self.restoring(min.z - position.z);
            } else if position.z > max.z {
                force.z -= self.restoring(position.z - max.z);
            }
            if force != NVec3::zeros() {
                point_mass.apply_force(force);
            }
        }
    }
}
