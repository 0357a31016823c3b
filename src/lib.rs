pub mod configuration;
pub mod geometry;
pub mod graph;
pub mod simulation;

pub use geometry::line_segment::{Intersection, LineSegment2, LineSegment3};
pub use geometry::rectangle::{GeometryError, Rectangle2, Rectangle3};
pub use geometry::vector::{random_in_square, NVec2, NVec3, VectorExt};

pub use simulation::engine::{
    GlobalForce3Ref, GlobalForceRef, LocalForce3Ref, LocalForceRef, Simulation, Simulation3,
    SimulationError,
};
pub use simulation::forces::{
    CoulombForce, FlowDownwardForce, GlobalForce, GlobalForce3, KeepWithinBounds3Force,
    KeepWithinBoundsForce, LocalForce, LocalForce3, OriginAttractionForce, Spring, Spring3,
    ViscousForce,
};
pub use simulation::scenario::{Parameters, Scenario};
pub use simulation::states::{PointMass, PointMass3, PointMass3Ref, PointMassRef};
pub use simulation::stepper::{split_steps, FixedStepDriver};

pub use configuration::config::{
    ForceConfig, ParametersConfig, PointMassConfig, ScenarioConfig, SpringConfig,
};

pub use graph::{Edge, Graph};
