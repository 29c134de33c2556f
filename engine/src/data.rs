//! Static prototypes for things that can be placed on a map.

use std::sync::LazyLock;

use crate::{prelude::*, FOV_RADIUS};

/// Prototype tables keyed by the map glyph that spawns the thing.
#[derive(Clone, Default, Debug)]
pub struct Data {
    pub player: CharacterSpec,
    pub bestiary: IndexMap<char, CharacterSpec>,
    pub armory: IndexMap<char, ItemSpec>,
}

impl Default for &'static Data {
    fn default() -> Self {
        static DATA: LazyLock<Data> = LazyLock::new(Data::builtin);

        &DATA
    }
}

impl Data {
    pub fn get() -> &'static Data {
        Default::default()
    }

    fn builtin() -> Data {
        let mut armory = IndexMap::default();
        for spec in [
            ItemSpec::new('s', "Sword", ItemKind::Weapon, 2.0),
            ItemSpec::new('h', "Helmet", ItemKind::Armor, 0.8),
        ] {
            armory.insert(spec.icon, spec);
        }

        let mut bestiary = IndexMap::default();
        for spec in [
            CharacterSpec {
                loadout: vec!['s'],
                ..CharacterSpec::new('R', "Rat", 5, 1, 2.0)
            },
            CharacterSpec::new('S', "Spider", 10, 2, 1.0),
        ] {
            bestiary.insert(spec.icon, spec);
        }

        Data {
            player: CharacterSpec::new('@', "Player", 20, 5, 1.0),
            bestiary,
            armory,
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct CharacterSpec {
    pub icon: char,
    pub name: &'static str,
    pub hp: i32,
    pub damage: i32,
    pub speed: f64,
    pub sight_range: i32,
    /// Armory glyphs of items carried at spawn.
    pub loadout: Vec<char>,
}

impl CharacterSpec {
    fn new(
        icon: char,
        name: &'static str,
        hp: i32,
        damage: i32,
        speed: f64,
    ) -> Self {
        CharacterSpec {
            icon,
            name,
            hp,
            damage,
            speed,
            sight_range: FOV_RADIUS,
            loadout: Vec::new(),
        }
    }

    pub fn build(&self, pos: IVec2, ids: &mut ItemIds) -> Character {
        let items = self
            .loadout
            .iter()
            .filter_map(|c| Data::get().armory.get(c))
            .map(|spec| spec.build(pos, ids.next()))
            .collect();

        Character {
            pos,
            icon: self.icon,
            name: self.name.into(),
            hp: self.hp,
            damage: self.damage,
            speed: self.speed,
            ap: 0.0,
            sight_range: self.sight_range,
            items,
            weapon: None,
            armor: None,
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct ItemSpec {
    pub icon: char,
    pub name: &'static str,
    pub kind: ItemKind,
    pub power: f64,
}

impl ItemSpec {
    fn new(
        icon: char,
        name: &'static str,
        kind: ItemKind,
        power: f64,
    ) -> Self {
        ItemSpec {
            icon,
            name,
            kind,
            power,
        }
    }

    pub fn build(&self, pos: IVec2, id: ItemId) -> Item {
        Item {
            id,
            pos,
            name: self.name.into(),
            icon: self.icon,
            kind: self.kind,
            power: self.power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rat_carries_sword() {
        let mut ids = ItemIds::default();
        let rat = Data::get().bestiary[&'R'].build(ivec2(3, 4), &mut ids);
        assert_eq!(rat.icon, 'R');
        assert_eq!(rat.name, "Rat");
        assert_eq!(rat.hp, 5);
        assert_eq!(rat.speed, 2.0);
        assert_eq!(rat.items.len(), 1);
        assert_eq!(rat.items[0].name, "Sword");
        assert_eq!(rat.items[0].icon, 's');
        assert_eq!(rat.items[0].kind, ItemKind::Weapon);
        assert_eq!(rat.items[0].id, ItemId(1));
    }

    #[test]
    fn player_stats() {
        let mut ids = ItemIds::default();
        let p = Data::get().player.build(ivec2(0, 0), &mut ids);
        assert_eq!((p.hp, p.damage, p.sight_range), (20, 5, FOV_RADIUS));
        assert!(p.items.is_empty());
    }
}
