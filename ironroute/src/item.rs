//! Items lying in rooms.

/// Restores health when used.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MedKit {
    pub name: String,
    pub recovery: i32,
}

/// Body armour, consumed on pickup for extra health points.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kevlar {
    pub name: String,
    pub armor: i32,
}

/// Anything that can be found in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    MedKit(MedKit),
    Kevlar(Kevlar),
}

impl Item {
    pub fn medkit(name: impl Into<String>, recovery: i32) -> Self {
        Item::MedKit(MedKit {
            name: name.into(),
            recovery,
        })
    }

    pub fn kevlar(name: impl Into<String>, armor: i32) -> Self {
        Item::Kevlar(Kevlar {
            name: name.into(),
            armor,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Item::MedKit(m) => &m.name,
            Item::Kevlar(k) => &k.name,
        }
    }
}
