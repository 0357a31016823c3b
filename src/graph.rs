//! Id-keyed graph layer over the simulation.
//!
//! Maps string node and edge ids onto point masses and springs so callers
//! working in graph terms (e.g. force-directed layout) never juggle handles
//! themselves. All physics still happens in the wrapped [`Simulation`]:
//! nodes are point masses and edges are springs.

use std::collections::HashMap;
use std::sync::Arc;

use crate::simulation::engine::{LocalForceRef, Simulation, SimulationError};
use crate::simulation::forces::Spring;
use crate::simulation::states::{PointMass, PointMassRef};

/// A graph edge: a spring plus the node ids it connects.
pub struct Edge {
    pub spring: Arc<Spring>,
    pub source_id: String,
    pub target_id: String,
}

/// Simulation wrapper with id-keyed node and edge lookup.
#[derive(Default)]
pub struct Graph {
    simulation: Simulation,
    nodes: HashMap<String, PointMassRef>,
    edges: HashMap<String, Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Mutable access to the wrapped simulation, e.g. to register extra
    /// global forces. Removing node point masses through this bypasses the
    /// id maps; use [`Graph::remove_node`] instead.
    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    pub fn node(&self, id: &str) -> Option<&PointMassRef> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add a node under `id`. Returns the handle to its point mass.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        point_mass: PointMass,
    ) -> Result<PointMassRef, SimulationError> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(SimulationError::DuplicateId(id));
        }
        let handle = point_mass.into_ref();
        self.simulation.add_point_mass(Arc::clone(&handle))?;
        self.nodes.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    /// Add an edge under `id`, connecting two distinct existing nodes with a
    /// spring.
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        source_id: &str,
        target_id: &str,
        length: f64,
        k: f64,
    ) -> Result<Arc<Spring>, SimulationError> {
        let id = id.into();
        if self.edges.contains_key(&id) {
            return Err(SimulationError::DuplicateId(id));
        }
        if source_id == target_id {
            return Err(SimulationError::SelfEdge(source_id.to_owned()));
        }
        let source = self
            .nodes
            .get(source_id)
            .ok_or_else(|| SimulationError::MissingNode(source_id.to_owned()))?;
        let target = self
            .nodes
            .get(target_id)
            .ok_or_else(|| SimulationError::MissingNode(target_id.to_owned()))?;

        let spring = Arc::new(
            Spring::new(Arc::clone(source), Arc::clone(target))
                .with_length(length)
                .with_k(k),
        );
        let force: LocalForceRef = spring.clone();
        self.simulation.add_local_force(force)?;
        self.edges.insert(
            id,
            Edge {
                spring: Arc::clone(&spring),
                source_id: source_id.to_owned(),
                target_id: target_id.to_owned(),
            },
        );
        Ok(spring)
    }

    /// Remove a node and every edge incident to it. Returns whether the id
    /// was present.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(point_mass) = self.nodes.remove(id) else {
            return false;
        };
        let incident: Vec<String> = self
            .edges
            .iter()
            .filter(|(_, e)| e.source_id == id || e.target_id == id)
            .map(|(edge_id, _)| edge_id.clone())
            .collect();
        for edge_id in incident {
            self.remove_edge(&edge_id);
        }
        self.simulation.remove_point_mass(&point_mass);
        true
    }

    /// Remove an edge. Returns whether the id was present.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        let Some(edge) = self.edges.remove(id) else {
            return false;
        };
        let force: LocalForceRef = edge.spring;
        self.simulation.remove_local_force(&force);
        true
    }

    /// Drop all nodes and edges (and everything in the simulation).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.simulation.clear();
    }

    pub fn update(&mut self, dt: f64) {
        self.simulation.update(dt);
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.simulation.total_kinetic_energy()
    }
}
