use serde::{Deserialize, Serialize};

/// Hero leading an army. Every bonus is a percentage (10.0 means +10%).
///
/// Only the `army_*` bonuses scale the troops; the personal ones describe the
/// hero alone and are carried for display.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub attack_bonus: f64,
    pub defense_bonus: f64,
    pub hp_bonus: f64,
    pub army_attack: f64,
    pub army_defense: f64,
    pub army_hp: f64,
}

impl Hero {
    /// Named `(field, value)` pairs of every bonus, handy for validation.
    pub fn bonuses(&self) -> [(&'static str, f64); 6] {
        [
            ("hero.attack_bonus", self.attack_bonus),
            ("hero.defense_bonus", self.defense_bonus),
            ("hero.hp_bonus", self.hp_bonus),
            ("hero.army_attack", self.army_attack),
            ("hero.army_defense", self.army_defense),
            ("hero.army_hp", self.army_hp),
        ]
    }
}
