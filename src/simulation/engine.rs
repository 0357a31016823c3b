//! Simulation containers
//!
//! [`Simulation`] (2d) and [`Simulation3`] (3d) own the point masses and the
//! registered global and local forces, and drive the per-step pipeline:
//! global forces, then local forces, then integration.

use std::fmt;
use std::sync::Arc;

use crate::simulation::forces::{GlobalForce, GlobalForce3, LocalForce, LocalForce3};
use crate::simulation::states::{PointMass3Ref, PointMassRef};

/// Shared handle to a 2D global force.
pub type GlobalForceRef = Arc<dyn GlobalForce + Send + Sync>;
/// Shared handle to a 2D local force.
pub type LocalForceRef = Arc<dyn LocalForce + Send + Sync>;
/// Shared handle to a 3D global force.
pub type GlobalForce3Ref = Arc<dyn GlobalForce3 + Send + Sync>;
/// Shared handle to a 3D local force.
pub type LocalForce3Ref = Arc<dyn LocalForce3 + Send + Sync>;

#[derive(Debug)]
pub enum SimulationError {
    /// The exact same handle is already registered.
    DuplicateEntity,
    /// A graph node or edge id is already taken.
    DuplicateId(String),
    /// An edge referenced a node id that does not exist.
    MissingNode(String),
    /// An edge connected a node to itself.
    SelfEdge(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::DuplicateEntity => {
                write!(f, "entity is already part of the simulation")
            }
            SimulationError::DuplicateId(id) => write!(f, "id {id:?} is already taken"),
            SimulationError::MissingNode(id) => write!(f, "no node with id {id:?}"),
            SimulationError::SelfEdge(id) => {
                write!(f, "edge connects node {id:?} to itself")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

// Allocation identity for trait-object handles. `Arc::ptr_eq` on `dyn` Arcs
// compares vtable pointers too, which differ across codegen units; casting to
// a thin pointer compares the data allocation only.
fn same_allocation<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

/// Container for 2D point masses and the forces acting on them.
#[derive(Default)]
pub struct Simulation {
    point_masses: Vec<PointMassRef>,
    global_forces: Vec<GlobalForceRef>,
    local_forces: Vec<LocalForceRef>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_masses(&self) -> &[PointMassRef] {
        &self.point_masses
    }

    pub fn global_forces(&self) -> &[GlobalForceRef] {
        &self.global_forces
    }

    pub fn local_forces(&self) -> &[LocalForceRef] {
        &self.local_forces
    }

    /// Register a point mass. The same handle may only be added once; a
    /// fresh point mass with equal values is a different entity.
    pub fn add_point_mass(&mut self, point_mass: PointMassRef) -> Result<(), SimulationError> {
        if self.point_masses.iter().any(|p| Arc::ptr_eq(p, &point_mass)) {
            return Err(SimulationError::DuplicateEntity);
        }
        self.point_masses.push(point_mass);
        log::debug!("point mass added, {} total", self.point_masses.len());
        Ok(())
    }

    pub fn add_global_force(&mut self, force: GlobalForceRef) -> Result<(), SimulationError> {
        if self.global_forces.iter().any(|g| same_allocation(g, &force)) {
            return Err(SimulationError::DuplicateEntity);
        }
        self.global_forces.push(force);
        log::debug!("global force added, {} total", self.global_forces.len());
        Ok(())
    }

    pub fn add_local_force(&mut self, force: LocalForceRef) -> Result<(), SimulationError> {
        if self.local_forces.iter().any(|l| same_allocation(l, &force)) {
            return Err(SimulationError::DuplicateEntity);
        }
        self.local_forces.push(force);
        log::debug!("local force added, {} total", self.local_forces.len());
        Ok(())
    }

    /// Unregister a point mass. Returns whether it was present.
    pub fn remove_point_mass(&mut self, point_mass: &PointMassRef) -> bool {
        let before = self.point_masses.len();
        self.point_masses.retain(|p| !Arc::ptr_eq(p, point_mass));
        self.point_masses.len() < before
    }

    pub fn remove_global_force(&mut self, force: &GlobalForceRef) -> bool {
        let before = self.global_forces.len();
        self.global_forces.retain(|g| !same_allocation(g, force));
        self.global_forces.len() < before
    }

    pub fn remove_local_force(&mut self, force: &LocalForceRef) -> bool {
        let before = self.local_forces.len();
        self.local_forces.retain(|l| !same_allocation(l, force));
        self.local_forces.len() < before
    }

    /// Drop all point masses and forces.
    pub fn clear(&mut self) {
        self.point_masses.clear();
        self.global_forces.clear();
        self.local_forces.clear();
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Global forces run first (they see all point masses), then local
    /// forces, then every point mass integrates its accumulated force.
    pub fn update(&mut self, dt: f64) {
        for force in &self.global_forces {
            force.apply_to(self);
        }
        for force in &self.local_forces {
            force.apply();
        }
        for point_mass in &self.point_masses {
            point_mass.write().unwrap().update(dt);
        }
    }

    /// Total kinetic energy, sum of `m * v^2 / 2` over all point masses.
    ///
    /// A system settling toward equilibrium drives this toward zero, which
    /// makes it a convenient convergence diagnostic.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.point_masses
            .iter()
            .map(|p| {
                let p = p.read().unwrap();
                let speed = p.speed();
                0.5 * p.mass * speed * speed
            })
            .sum()
    }
}

// =========================================================================================
// 2D stuff above
// 3D stuff below
// =========================================================================================

/// Container for 3D point masses and the forces acting on them.
#[derive(Default)]
pub struct Simulation3 {
    point_masses: Vec<PointMass3Ref>,
    global_forces: Vec<GlobalForce3Ref>,
    local_forces: Vec<LocalForce3Ref>,
}

impl Simulation3 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_masses(&self) -> &[PointMass3Ref] {
        &self.point_masses
    }

    pub fn global_forces(&self) -> &[GlobalForce3Ref] {
        &self.global_forces
    }

    pub fn local_forces(&self) -> &[LocalForce3Ref] {
        &self.local_forces
    }

    pub fn add_point_mass(&mut self, point_mass: PointMass3Ref) -> Result<(), SimulationError> {
        if self.point_masses.iter().any(|p| Arc::ptr_eq(p, &point_mass)) {
            return Err(SimulationError::DuplicateEntity);
        }
        self.point_masses.push(point_mass);
        Ok(())
    }

    pub fn add_global_force(&mut self, force: GlobalForce3Ref) -> Result<(), SimulationError> {
        if self.global_forces.iter().any(|g| same_allocation(g, &force)) {
            return Err(SimulationError::DuplicateEntity);
        }
        self.global_forces.push(force);
        Ok(())
    }

    pub fn add_local_force(&mut self, force: LocalForce3Ref) -> Result<(), SimulationError> {
        if self.local_forces.iter().any(|l| same_allocation(l, &force)) {
            return Err(SimulationError::DuplicateEntity);
        }
        self.local_forces.push(force);
        Ok(())
    }

    pub fn remove_point_mass(&mut self, point_mass: &PointMass3Ref) -> bool {
        let before = self.point_masses.len();
        self.point_masses.retain(|p| !Arc::ptr_eq(p, point_mass));
        self.point_masses.len() < before
    }

    pub fn remove_global_force(&mut self, force: &GlobalForce3Ref) -> bool {
        let before = self.global_forces.len();
        self.global_forces.retain(|g| !same_allocation(g, force));
        self.global_forces.len() < before
    }

    pub fn remove_local_force(&mut self, force: &LocalForce3Ref) -> bool {
        let before = self.local_forces.len();
        self.local_forces.retain(|l| !same_allocation(l, force));
        self.local_forces.len() < before
    }

    pub fn clear(&mut self) {
        self.point_masses.clear();
        self.global_forces.clear();
        self.local_forces.clear();
    }

    pub fn update(&mut self, dt: f64) {
        for force in &self.global_forces {
            force.apply_to(self);
        }
        for force in &self.local_forces {
            force.apply();
        }
        for point_mass in &self.point_masses {
            point_mass.write().unwrap().update(dt);
        }
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.point_masses
            .iter()
            .map(|p| {
                let p = p.read().unwrap();
                let speed = p.speed();
                0.5 * p.mass * speed * speed
            })
            .sum()
    }
}
