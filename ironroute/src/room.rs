//! Rooms, the vertices of a building.

use crate::entity::{Agent, Enemy};
use crate::item::Item;

/// A room in the building.
///
/// A room's identity is its name: two rooms compare equal when their names
/// do, whatever their contents. The name cannot change after construction,
/// so the contents can be edited in place while the room sits in a graph.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    name: String,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    /// The mission objective is here.
    pub target: bool,
    /// The agent can enter or leave the building here.
    pub entry_exit: bool,
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Room {}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enemies: Vec::new(),
            items: Vec::new(),
            target: false,
            entry_exit: false,
        }
    }

    /// An empty room usable as a lookup key for the room called `name`.
    pub fn key(name: &str) -> Self {
        Self::new(name)
    }

    pub fn entry(name: impl Into<String>) -> Self {
        Self {
            entry_exit: true,
            ..Self::new(name)
        }
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemies.push(enemy);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn as_target(mut self) -> Self {
        self.target = true;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of the armour of every kevlar in the room.
    pub fn total_armor(&self) -> i32 {
        self.items
            .iter()
            .map(|item| match item {
                Item::Kevlar(k) => k.armor,
                Item::MedKit(_) => 0,
            })
            .sum()
    }

    pub fn has_medkit(&self) -> bool {
        self.items.iter().any(|item| matches!(item, Item::MedKit(_)))
    }

    pub fn has_enemies(&self) -> bool {
        self.enemies.iter().any(Enemy::is_alive)
    }

    /// Hand the room's items to `agent`.
    ///
    /// Kevlar is always consumed and adds its armour to the agent's health.
    /// Medkits are picked up while the agent has room for them and stay
    /// behind otherwise.
    pub fn apply_room_effects(&mut self, agent: &mut Agent) {
        let mut kept = Vec::new();
        for item in self.items.drain(..) {
            match item {
                Item::Kevlar(k) => {
                    log::debug!("{} puts on {} (+{})", agent.name, k.name, k.armor);
                    agent.apply_damage(-k.armor);
                }
                Item::MedKit(m) => {
                    if let Err(m) = agent.pick_up_medkit(m) {
                        log::debug!("{} cannot carry {}", agent.name, m.name);
                        kept.push(Item::MedKit(m));
                    }
                }
            }
        }
        self.items = kept;
    }
}
