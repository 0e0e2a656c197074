use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hero::Hero;

/// The four troop families. Declaration order is the fixed priority used to
/// break ties when looking for a dominant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Infantry,
    Ranged,
    Cavalry,
    Siege,
}

impl UnitType {
    /// All unit types, in tie-break priority order.
    pub const ALL: [UnitType; 4] = [
        UnitType::Infantry,
        UnitType::Ranged,
        UnitType::Cavalry,
        UnitType::Siege,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Infantry => "infantry",
            UnitType::Ranged => "ranged",
            UnitType::Cavalry => "cavalry",
            UnitType::Siege => "siege",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Troop counts per unit type. Missing keys deserialize as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmyComposition {
    pub infantry: u32,
    pub ranged: u32,
    pub cavalry: u32,
    pub siege: u32,
}

impl ArmyComposition {
    pub const fn new(infantry: u32, ranged: u32, cavalry: u32, siege: u32) -> Self {
        Self {
            infantry,
            ranged,
            cavalry,
            siege,
        }
    }

    /// Returns the amount of a given unit type.
    pub fn get(&self, unit: UnitType) -> u32 {
        match unit {
            UnitType::Infantry => self.infantry,
            UnitType::Ranged => self.ranged,
            UnitType::Cavalry => self.cavalry,
            UnitType::Siege => self.siege,
        }
    }

    pub fn set(&mut self, unit: UnitType, amount: u32) {
        match unit {
            UnitType::Infantry => self.infantry = amount,
            UnitType::Ranged => self.ranged = amount,
            UnitType::Cavalry => self.cavalry = amount,
            UnitType::Siege => self.siege = amount,
        }
    }

    /// Total raw number of troops.
    pub fn total(&self) -> u64 {
        UnitType::ALL.iter().map(|u| self.get(*u) as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterates `(unit type, amount)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitType, u32)> + '_ {
        UnitType::ALL.into_iter().map(move |u| (u, self.get(u)))
    }
}

/// One side of a battle: troops plus every percentage bonus that scales them.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmyConfig {
    pub composition: ArmyComposition,
    pub hero: Hero,
    pub research_attack: f64,
    pub research_defense: f64,
    pub research_hp: f64,
}

impl ArmyConfig {
    /// An army with no hero and no research, used when only troop counts matter.
    pub fn from_composition(composition: ArmyComposition) -> Self {
        Self {
            composition,
            ..Default::default()
        }
    }
}
