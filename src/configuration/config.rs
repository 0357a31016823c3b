//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size and run length
//! - [`PointMassConfig`]  – initial state for each point mass
//! - [`SpringConfig`]     – springs between point masses, by index
//! - [`ForceConfig`]      – global forces acting on everything
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 0.01                # step size in seconds
//!   steps: 500              # number of steps to run
//!   log_every: 100          # energy log interval, in steps
//!
//! point_masses:
//!   - mass: 1.0
//!     position: [ -50.0, 0.0 ]
//!   - mass: 1.0
//!     position: [  50.0, 0.0 ]
//!   - mass: 2.0             # position omitted -> randomized near the origin
//!     pinned: true
//!
//! springs:
//!   - source: 0             # indices into point_masses
//!     target: 1
//!     length: 100.0
//!     k: 80.0
//!
//! forces:
//!   - type: coulomb
//!     strength: 20000.0
//!   - type: origin_attraction
//!     stiffness: 40.0
//!   - type: viscous
//!     coefficient: 0.5
//!   - type: keep_within_bounds
//!     min: [ -500.0, -500.0 ]
//!     max: [  500.0,  500.0 ]
//! ```
//!
//! The runtime maps this configuration into its internal scenario
//! representation, which uses shared handles rather than indices.

use serde::Deserialize;

fn default_mass() -> f64 {
    1.0
}

fn default_damping() -> f64 {
    1.0
}

fn default_log_every() -> usize {
    100
}

/// Step size and run length for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,      // step size in seconds
    pub steps: usize, // number of steps to run
    #[serde(default = "default_log_every")]
    pub log_every: usize, // energy log interval, in steps
}

/// Configuration for a single point mass's initial state
#[derive(Deserialize, Debug)]
pub struct PointMassConfig {
    #[serde(default = "default_mass")]
    pub mass: f64,
    pub position: Option<[f64; 2]>, // omitted -> randomized near the origin
    #[serde(default)]
    pub pinned: bool,
    #[serde(default = "default_damping")]
    pub damping: f64, // velocity retention per step, 1.0 = none
}

/// A spring between two point masses, referenced by index
#[derive(Deserialize, Debug)]
pub struct SpringConfig {
    pub source: usize, // index into point_masses
    pub target: usize, // index into point_masses
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub k: Option<f64>,
}

/// A global force; omitted fields fall back to the force's defaults
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ForceConfig {
    Coulomb {
        #[serde(default)]
        strength: Option<f64>,
        #[serde(default)]
        max_distance: Option<f64>,
    },
    OriginAttraction {
        #[serde(default)]
        stiffness: Option<f64>,
    },
    FlowDownward {
        #[serde(default)]
        magnitude: Option<f64>,
    },
    Viscous {
        coefficient: f64,
    },
    KeepWithinBounds {
        min: [f64; 2],
        max: [f64; 2],
        #[serde(default)]
        magnitude: Option<f64>,
        #[serde(default)]
        max_force: Option<f64>,
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub point_masses: Vec<PointMassConfig>,
    #[serde(default)]
    pub springs: Vec<SpringConfig>,
    #[serde(default)]
    pub forces: Vec<ForceConfig>,
}
