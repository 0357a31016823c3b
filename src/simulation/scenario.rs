//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - a populated [`Simulation`] with point masses, springs and global forces
//! - handles to the point masses, in configuration order, for inspection
//!
//! Scenarios are 2D; the 3D simulation types are library-only.

use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::configuration::config::{ForceConfig, ScenarioConfig};
use crate::geometry::rectangle::Rectangle2;
use crate::geometry::vector::NVec2;
use crate::simulation::engine::Simulation;
use crate::simulation::forces::{
    CoulombForce, FlowDownwardForce, KeepWithinBoundsForce, OriginAttractionForce, Spring,
    ViscousForce,
};
use crate::simulation::states::{PointMass, PointMassRef};

const RANDOM_HALF_EXTENT: f64 = 1.0;

/// Numerical parameters for a scenario run
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,          // step size in seconds
    pub steps: usize,     // number of steps to run
    pub log_every: usize, // energy log interval, in steps
}

/// A fully-initialized simulation run.
///
/// `point_masses` holds the handles in configuration order so callers can
/// inspect positions after (or during) the run.
pub struct Scenario {
    pub parameters: Parameters,
    pub simulation: Simulation,
    pub point_masses: Vec<PointMassRef>,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters {
            dt: cfg.parameters.dt,
            steps: cfg.parameters.steps,
            log_every: cfg.parameters.log_every,
        };

        let mut simulation = Simulation::new();

        // Point masses: map `PointMassConfig` -> runtime handles; an omitted
        // position is randomized so coincident starts are unlikely
        let mut point_masses: Vec<PointMassRef> = Vec::with_capacity(cfg.point_masses.len());
        for pm_cfg in &cfg.point_masses {
            let mut point_mass = match pm_cfg.position {
                Some([x, y]) => PointMass::new(pm_cfg.mass, NVec2::new(x, y)),
                None => PointMass::with_random_position(pm_cfg.mass, RANDOM_HALF_EXTENT),
            };
            point_mass.is_pinned = pm_cfg.pinned;
            point_mass.damping = pm_cfg.damping;
            let handle = point_mass.into_ref();
            simulation.add_point_mass(Arc::clone(&handle))?;
            point_masses.push(handle);
        }

        // Springs: resolve indices to handles
        for (i, spring_cfg) in cfg.springs.iter().enumerate() {
            if spring_cfg.source == spring_cfg.target {
                return Err(anyhow!(
                    "spring {i}: source and target are both index {}",
                    spring_cfg.source
                ));
            }
            let source = point_masses
                .get(spring_cfg.source)
                .ok_or_else(|| anyhow!("spring {i}: no point mass at index {}", spring_cfg.source))?;
            let target = point_masses
                .get(spring_cfg.target)
                .ok_or_else(|| anyhow!("spring {i}: no point mass at index {}", spring_cfg.target))?;
            let spring = Spring::new(Arc::clone(source), Arc::clone(target))
                .with_length(spring_cfg.length.unwrap_or(Spring::DEFAULT_LENGTH))
                .with_k(spring_cfg.k.unwrap_or(Spring::DEFAULT_K));
            simulation.add_local_force(Arc::new(spring))?;
        }

        // Global forces: omitted fields fall back to the force's defaults
        for force_cfg in &cfg.forces {
            match force_cfg {
                ForceConfig::Coulomb {
                    strength,
                    max_distance,
                } => {
                    let mut force =
                        CoulombForce::new(strength.unwrap_or(CoulombForce::DEFAULT_STRENGTH));
                    if let Some(max_distance) = max_distance {
                        force = force.with_max_distance(*max_distance);
                    }
                    simulation.add_global_force(Arc::new(force))?;
                }
                ForceConfig::OriginAttraction { stiffness } => {
                    let force = OriginAttractionForce::new(
                        stiffness.unwrap_or(OriginAttractionForce::DEFAULT_STIFFNESS),
                    );
                    simulation.add_global_force(Arc::new(force))?;
                }
                ForceConfig::FlowDownward { magnitude } => {
                    let force = FlowDownwardForce::new(
                        magnitude.unwrap_or(FlowDownwardForce::DEFAULT_MAGNITUDE),
                    );
                    simulation.add_global_force(Arc::new(force))?;
                }
                ForceConfig::Viscous { coefficient } => {
                    simulation.add_global_force(Arc::new(ViscousForce::new(*coefficient)))?;
                }
                ForceConfig::KeepWithinBounds {
                    min,
                    max,
                    magnitude,
                    max_force,
                } => {
                    let bounds =
                        Rectangle2::new(NVec2::new(min[0], min[1]), NVec2::new(max[0], max[1]))?;
                    let force = KeepWithinBoundsForce::new(bounds)
                        .with_magnitude(
                            magnitude.unwrap_or(KeepWithinBoundsForce::DEFAULT_MAGNITUDE),
                        )
                        .with_max_force(
                            max_force.unwrap_or(KeepWithinBoundsForce::DEFAULT_MAX_FORCE),
                        );
                    simulation.add_global_force(Arc::new(force))?;
                }
            }
        }

        Ok(Self {
            parameters,
            simulation,
            point_masses,
        })
    }
}
