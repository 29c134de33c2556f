//! Creatures that walk the dungeon.

use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Stats and belongings shared by the player and monsters.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub pos: IVec2,
    pub icon: char,
    pub name: String,
    pub hp: i32,
    /// Base damage before equipment modifiers.
    pub damage: i32,
    /// Action points gained per turn.
    pub speed: f64,
    /// Accumulated action points, one point buys one move or attack.
    ///
    /// Only monsters gain points. The player's attacks still spend them, so
    /// the player's value just counts down.
    pub ap: f64,
    pub sight_range: i32,
    pub items: Vec<Item>,
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
}

impl Character {
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Damage dealt by an attack with the current weapon.
    pub fn attack_power(&self) -> i32 {
        match &self.weapon {
            Some(w) => (self.damage as f64 * w.power) as i32,
            None => self.damage,
        }
    }

    /// Damage taken from an attack of the given power after armor.
    pub fn damage_taken(&self, power: i32) -> i32 {
        match &self.armor {
            Some(a) => (power as f64 * a.power) as i32,
            None => power,
        }
    }
}

#[derive(
    Clone, Default, PartialEq, Debug, Deref, DerefMut, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Player(pub Character);

#[derive(
    Clone, Default, PartialEq, Debug, Deref, DerefMut, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Monster(pub Character);

#[cfg(test)]
mod tests {
    use super::*;

    fn gear(kind: ItemKind, power: f64) -> Option<Item> {
        Some(Item {
            kind,
            power,
            ..Default::default()
        })
    }

    #[test]
    fn equipment_modifies_damage() {
        let mut c = Character {
            hp: 1,
            damage: 5,
            ..Default::default()
        };
        assert_eq!(c.attack_power(), 5);
        assert_eq!(c.damage_taken(5), 5);
        assert!(!c.is_dead());

        c.weapon = gear(ItemKind::Weapon, 2.0);
        c.armor = gear(ItemKind::Armor, 0.8);
        assert_eq!(c.attack_power(), 10);
        assert_eq!(c.damage_taken(10), 8);
        // Truncates toward zero.
        assert_eq!(c.damage_taken(1), 0);

        c.hp = 0;
        assert!(c.is_dead());
    }
}
