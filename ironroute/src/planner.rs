//! Mission planning on top of [`GameNetwork`]: where to go in, which way
//! to walk, and what to do next.

use std::fmt;

use ironroute_graph::GraphError;

use crate::entity::Agent;
use crate::room::Room;
use crate::world::{GameNetwork, room_names};

/// Errors that can occur while planning a mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A graph query failed.
    Graph(GraphError),
    /// No room is marked as the target.
    NoTargetRoom,
    /// No entry/exit room can reach the target.
    NoEntryPoint,
    /// The destination cannot be reached from the current room.
    NoRoute { from: String, to: String },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graph(e) => write!(f, "graph error: {e}"),
            Self::NoTargetRoom => write!(f, "target room not found in the mission"),
            Self::NoEntryPoint => write!(f, "no entry point reaches the target"),
            Self::NoRoute { from, to } => write!(f, "no route from {from} to {to}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for PlanError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// A planned walk through the building.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Room names from the entry point to the target, both included.
    pub rooms: Vec<String>,
    /// Sum of the stored edge weights along `rooms`.
    pub cost: f64,
}

impl Route {
    pub fn entry(&self) -> Option<&str> {
        self.rooms.first().map(String::as_str)
    }
}

impl GameNetwork {
    /// The room holding the mission objective (the first one, in index
    /// order, if several are marked).
    pub fn target_room(&self) -> Result<&Room, PlanError> {
        self.rooms()
            .iter()
            .find(|r| r.target)
            .ok_or(PlanError::NoTargetRoom)
    }

    /// The entry/exit room with the cheapest route to the target for
    /// `agent`. Ties go to the lower index.
    pub fn best_entry_point(&self, agent: &Agent) -> Result<String, PlanError> {
        let target = self.target_room()?.name();

        let mut best: Option<(&Room, f64)> = None;
        for room in self.rooms().iter().filter(|r| r.entry_exit) {
            let weight = self.route_weight(room.name(), target, agent)?;
            let current = best.map_or(f64::INFINITY, |(_, w)| w);
            if weight < current {
                best = Some((room, weight));
            }
        }

        let (room, weight) = best.ok_or(PlanError::NoEntryPoint)?;
        log::info!(
            "entry point for {}: {} (cost {weight})",
            agent.name,
            room.name()
        );
        Ok(room.name().to_string())
    }

    /// The room to move into from `current` on the way to `target`.
    pub fn next_hop(&self, current: &str, target: &str, agent: &Agent) -> Result<String, PlanError> {
        let path = self.route(current, target, agent)?;
        path.next_hop()
            .map(|r| r.name().to_string())
            .ok_or_else(|| PlanError::NoRoute {
                from: current.to_string(),
                to: target.to_string(),
            })
    }

    /// Best entry point plus the cheapest route from it to the target.
    pub fn advisory_route(&self, agent: &Agent) -> Result<Route, PlanError> {
        let entry = self.best_entry_point(agent)?;
        let target = self.target_room()?.name();
        let path = self.route(&entry, target, agent)?;
        let cost = self.route_weight(&entry, target, agent)?;
        Ok(Route {
            rooms: room_names(&path),
            cost,
        })
    }
}
