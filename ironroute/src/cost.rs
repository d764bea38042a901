//! Edge costs derived from the agent's current state.
//!
//! The cost of stepping into a room is
//!
//! ```text
//! threat(to) - healing(agent) - armor(to)
//! ```
//!
//! where `threat` is the damage the agent is expected to absorb while
//! killing every enemy in the room: an enemy with power `e` needs
//! `ceil(e / p)` of the agent's turns (agent power `p`) and strikes back on
//! all but the last one. `healing` is what the best carried medkit would
//! restore, capped by the missing health, and `armor` is the kevlar lying
//! in the room. Costs can be negative.

use ironroute_graph::EdgeCost;

use crate::entity::{Agent, Enemy};
use crate::room::Room;

/// Which terms of the cost model are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostConfig {
    /// Subtract the healing the agent could apply.
    pub healing: bool,
    /// Subtract the armour found in the destination room.
    pub armor: bool,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            healing: true,
            armor: true,
        }
    }
}

/// [`EdgeCost`] over rooms for one agent snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ThreatCost<'a> {
    agent: &'a Agent,
    config: CostConfig,
}

impl<'a> ThreatCost<'a> {
    pub fn new(agent: &'a Agent, config: CostConfig) -> Self {
        Self { agent, config }
    }

    /// Damage taken from `enemy` before it dies. Infinite when the agent
    /// cannot hurt it at all.
    pub fn enemy_threat(&self, enemy: &Enemy) -> f64 {
        if !enemy.is_alive() {
            return 0.0;
        }
        let power = i64::from(self.agent.power);
        if power <= 0 {
            return f64::INFINITY;
        }
        let e = i64::from(enemy.power);
        let turns = (e + power - 1) / power;
        ((turns - 1) * e).max(0) as f64
    }

    /// Expected damage absorbed clearing `room`.
    pub fn threat(&self, room: &Room) -> f64 {
        room.enemies.iter().map(|e| self.enemy_threat(e)).sum()
    }

    /// Health the agent could recover right now.
    pub fn healing(&self) -> f64 {
        if !self.config.healing {
            return 0.0;
        }
        f64::from(self.agent.missing_health().min(self.agent.best_healing()))
    }

    /// Armour bonus waiting in `room`.
    pub fn armor(&self, room: &Room) -> f64 {
        if !self.config.armor {
            return 0.0;
        }
        f64::from(room.total_armor())
    }

    /// Cost of stepping into `to`.
    pub fn room_cost(&self, to: &Room) -> f64 {
        self.threat(to) - self.healing() - self.armor(to)
    }
}

impl EdgeCost<Room> for ThreatCost<'_> {
    #[inline]
    fn cost(&self, _from: &Room, to: &Room) -> f64 {
        self.room_cost(to)
    }
}
