//! Threat-aware route planning for an agent moving through a
//! building of rooms.
//!
//! The building is a [`GameNetwork`]: a weighted network of [`Room`]s whose
//! edge weights are re-derived from the agent's current state before each
//! query (see [`ThreatCost`]).

pub mod cost;
pub mod entity;
pub mod item;
pub mod planner;
pub mod room;
pub mod world;

pub use cost::{CostConfig, ThreatCost};
pub use entity::{Agent, DEFAULT_MAX_HEALTH, Enemy};
pub use item::{Item, Kevlar, MedKit};
pub use planner::{PlanError, Route};
pub use room::Room;
pub use world::{GameNetwork, INITIAL_WEIGHT, room_names};
