//! The building: a network of rooms with agent-dependent edge weights.

use ironroute_graph::{GraphError, Network, Path};

use crate::cost::{CostConfig, ThreatCost};
use crate::entity::Agent;
use crate::room::Room;

/// Weight of a freshly connected pair of rooms.
pub const INITIAL_WEIGHT: f64 = 1.0;

/// A building of rooms whose edge weights follow the agent's state.
///
/// Weights are never updated incrementally. Either recompute them all with
/// [`update_all_edge_weights`](Self::update_all_edge_weights) before a
/// batch of queries on the stored matrix, or ask [`route`](Self::route),
/// which evaluates the cost per query and leaves the matrix alone.
#[derive(Debug, Clone, Default)]
pub struct GameNetwork {
    network: Network<Room>,
    config: CostConfig,
}

impl GameNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            network: Network::with_capacity(capacity),
            config: CostConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CostConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> CostConfig {
        self.config
    }

    /// The underlying weighted network.
    #[inline]
    pub fn network(&self) -> &Network<Room> {
        &self.network
    }

    /// All rooms in index order.
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        self.network.vertices()
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms().iter().find(|r| r.name() == name)
    }

    /// Mutable access to a room's contents (enemies moving in or out,
    /// items taken).
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.network.vertex_mut(&Room::key(name))
    }

    pub fn add_room(&mut self, room: Room) -> Result<usize, GraphError> {
        self.network.add_vertex(room)
    }

    pub fn remove_room(&mut self, name: &str) -> Result<Room, GraphError> {
        self.network.remove_vertex(&Room::key(name))
    }

    /// Connect two rooms with [`INITIAL_WEIGHT`].
    pub fn connect(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        self.network
            .add_edge(&Room::key(a), &Room::key(b), INITIAL_WEIGHT)
    }

    /// Names of the rooms adjacent to `name`, in index order.
    pub fn neighbors(&self, name: &str) -> Result<Vec<String>, GraphError> {
        let rooms = self.network.adjacent_vertices(&Room::key(name))?;
        Ok(rooms.iter().map(|r| r.name().to_string()).collect())
    }

    /// Cost model for `agent` under this building's configuration.
    pub fn cost_model<'a>(&self, agent: &'a Agent) -> ThreatCost<'a> {
        ThreatCost::new(agent, self.config)
    }

    /// Recompute and store the weight of the edge `from → to`.
    ///
    /// Returns the new weight, or `None` if the rooms are not connected.
    pub fn update_edge_weight(
        &mut self,
        from: &str,
        to: &str,
        agent: &Agent,
    ) -> Result<Option<f64>, GraphError> {
        let cost = self.cost_model(agent);
        self.network
            .reweigh_edge(&Room::key(from), &Room::key(to), &cost)
    }

    /// Recompute every stored edge weight for `agent`.
    ///
    /// Each edge is evaluated from both ends in room order and the later
    /// evaluation is kept, so the stored weight of a corridor is the cost
    /// of entering its lower-indexed room. Returns the number of
    /// evaluations.
    pub fn update_all_edge_weights(&mut self, agent: &Agent) -> usize {
        let cost = self.cost_model(agent);
        self.network.reweigh(&cost)
    }

    /// Stored weight of the edge between two rooms.
    pub fn edge_weight(&self, a: &str, b: &str) -> f64 {
        self.network.edge_weight(&Room::key(a), &Room::key(b))
    }

    /// Cheapest path from `from` to `to` for `agent`, costing each step by
    /// the room it enters. Empty if `to` cannot be reached.
    pub fn route(&self, from: &str, to: &str, agent: &Agent) -> Result<Path<Room>, GraphError> {
        let cost = self.cost_model(agent);
        self.network
            .weighted_shortest_path_with(&Room::key(from), &Room::key(to), &cost)
    }

    /// Total cost of [`route`](Self::route).
    pub fn route_weight(&self, from: &str, to: &str, agent: &Agent) -> Result<f64, GraphError> {
        let cost = self.cost_model(agent);
        self.network
            .shortest_path_weight_with(&Room::key(from), &Room::key(to), &cost)
    }

    /// Cheapest path over the stored weights.
    pub fn stored_route(&self, from: &str, to: &str) -> Result<Path<Room>, GraphError> {
        self.network
            .weighted_shortest_path(&Room::key(from), &Room::key(to))
    }

    /// Total weight of [`stored_route`](Self::stored_route).
    pub fn stored_route_weight(&self, from: &str, to: &str) -> Result<f64, GraphError> {
        self.network
            .shortest_path_weight(&Room::key(from), &Room::key(to))
    }
}

/// Room names along `path`.
pub fn room_names(path: &Path<Room>) -> Vec<String> {
    path.iter().map(|r| r.name().to_string()).collect()
}
