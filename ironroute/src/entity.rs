//! The moving agent and the enemies it meets.

use crate::item::MedKit;

/// Health ceiling for a freshly created agent.
pub const DEFAULT_MAX_HEALTH: i32 = 100;

/// The entity being routed through the building.
///
/// Medkits are carried as a stack: the last one picked up is used first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub name: String,
    pub power: i32,
    pub health: i32,
    pub max_health: i32,
    pub medkits: Vec<MedKit>,
    pub max_medkits: usize,
}

impl Agent {
    pub fn new(name: impl Into<String>, power: i32, health: i32, max_medkits: usize) -> Self {
        Self {
            name: name.into(),
            power,
            health,
            max_health: DEFAULT_MAX_HEALTH,
            medkits: Vec::new(),
            max_medkits,
        }
    }

    /// Lose `damage` health. Negative damage heals without a ceiling.
    pub fn apply_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Health missing below `max_health`.
    pub fn missing_health(&self) -> i32 {
        (self.max_health - self.health).max(0)
    }

    /// Carry `kit`, or hand it back if the agent's hands are full.
    pub fn pick_up_medkit(&mut self, kit: MedKit) -> Result<(), MedKit> {
        if self.medkits.len() >= self.max_medkits {
            return Err(kit);
        }
        self.medkits.push(kit);
        Ok(())
    }

    /// Use the most recently picked-up medkit. Returns the health gained.
    pub fn use_medkit(&mut self) -> Option<i32> {
        let kit = self.medkits.pop()?;
        let before = self.health;
        self.health = (self.health + kit.recovery).min(self.max_health).max(before);
        Some(self.health - before)
    }

    /// Largest recovery among the carried medkits, 0 with none.
    pub fn best_healing(&self) -> i32 {
        self.medkits.iter().map(|m| m.recovery).max().unwrap_or(0)
    }
}

/// A hostile resident of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub name: String,
    pub power: i32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, power: i32) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }

    /// Lose `damage` power, never below zero.
    pub fn take_damage(&mut self, damage: i32) {
        self.power = (self.power - damage).max(0);
    }

    pub fn is_alive(&self) -> bool {
        self.power > 0
    }
}
