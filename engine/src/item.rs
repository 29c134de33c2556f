//! Items and moving them between floors, packs and hands.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::prelude::*;

/// Unique identifier of an item over the whole world.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Debug,
    Serialize,
    Deserialize,
)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ItemId(s.trim_start_matches('#').parse()?))
    }
}

/// Source of fresh item ids.
#[derive(Clone, Default, Debug)]
pub struct ItemIds(u32);

impl ItemIds {
    pub fn next(&mut self) -> ItemId {
        self.0 += 1;
        ItemId(self.0)
    }
}

#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Weapon,
    Armor,
    #[default]
    Other,
}

impl ItemKind {
    /// Equipment slot the item goes into, if it can be equipped.
    pub fn slot(self) -> Option<Slot> {
        match self {
            ItemKind::Weapon => Some(Slot::Weapon),
            ItemKind::Armor => Some(Slot::Armor),
            ItemKind::Other => None,
        }
    }
}

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Slot {
    Weapon,
    Armor,
}

#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Only meaningful while the item lies on the floor.
    pub pos: IVec2,
    pub name: String,
    pub icon: char,
    pub kind: ItemKind,
    /// Damage multiplier for weapons, damage taken multiplier for armor.
    pub power: f64,
}

fn take_by_id(items: &mut Vec<Item>, id: ItemId) -> Option<Item> {
    let idx = items.iter().position(|e| e.id == id)?;
    Some(items.remove(idx))
}

impl Character {
    pub fn slot(&self, slot: Slot) -> Option<&Item> {
        match slot {
            Slot::Weapon => self.weapon.as_ref(),
            Slot::Armor => self.armor.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Item> {
        match slot {
            Slot::Weapon => &mut self.weapon,
            Slot::Armor => &mut self.armor,
        }
    }

    /// Equipped items.
    pub fn equipment(&self) -> impl Iterator<Item = (Slot, &Item)> + '_ {
        use strum::IntoEnumIterator;
        Slot::iter().filter_map(|s| self.slot(s).map(|e| (s, e)))
    }

    /// Move an inventory item into its equipment slot.
    ///
    /// A previously equipped item in the slot goes back to the inventory.
    /// Returns the name of the swapped out item on success.
    pub(crate) fn equip(
        &mut self,
        id: ItemId,
    ) -> Result<Option<String>, &'static str> {
        let Some(idx) = self.items.iter().position(|e| e.id == id) else {
            return Err("not carried");
        };
        let Some(slot) = self.items[idx].kind.slot() else {
            return Err("not equippable");
        };

        let item = self.items.remove(idx);
        let prev = self.slot_mut(slot).replace(item);
        let ret = prev.as_ref().map(|e| e.name.clone());
        if let Some(prev) = prev {
            self.items.push(prev);
        }
        Ok(ret)
    }

    /// Move an equipped item back into the inventory.
    pub(crate) fn unequip(&mut self, slot: Slot) -> Option<&Item> {
        let item = self.slot_mut(slot).take()?;
        self.items.push(item);
        self.items.last()
    }

    /// Remove and return everything carried and equipped.
    pub(crate) fn strip(&mut self) -> Vec<Item> {
        let mut ret = std::mem::take(&mut self.items);
        ret.extend(self.weapon.take());
        ret.extend(self.armor.take());
        ret
    }
}

impl Level {
    /// Items lying on the floor at position.
    pub fn items_at(&self, pos: IVec2) -> &[Item] {
        self.items.get(&pos).map_or(&[], |v| v.as_slice())
    }

    /// Put items on the floor, on top of whatever is already there.
    pub(crate) fn drop_on_floor(
        &mut self,
        pos: IVec2,
        items: impl IntoIterator<Item = Item>,
    ) {
        let mut items = items
            .into_iter()
            .map(|e| Item { pos, ..e })
            .peekable();
        if items.peek().is_some() {
            self.items.entry(pos).or_default().extend(items);
        }
    }

    /// Player picks up an item from the floor they're standing on.
    pub fn take_item(&mut self, id: ItemId) -> bool {
        let Level {
            player,
            items,
            events,
            ..
        } = self;
        let Some(player) = player.as_mut() else {
            return false;
        };
        let Some(stack) = items.get_mut(&player.pos) else {
            return false;
        };
        let Some(item) = take_by_id(stack, id) else {
            return false;
        };
        if stack.is_empty() {
            items.remove(&player.pos);
        }

        msg!(events, "{} picked up {}", player.name, item.name);
        player.items.push(item);
        true
    }

    /// Player picks up everything on the floor they're standing on.
    pub fn take_all(&mut self) -> usize {
        let Some(pos) = self.player.as_ref().map(|p| p.pos) else {
            return 0;
        };
        let ids: Vec<ItemId> =
            self.items_at(pos).iter().map(|e| e.id).collect();
        ids.into_iter().filter(|&id| self.take_item(id)).count()
    }

    /// Player drops an item from the inventory.
    pub fn drop_item(&mut self, id: ItemId) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let Some(item) = take_by_id(&mut player.items, id) else {
            return false;
        };
        let (pos, name) = (player.pos, player.name.clone());

        msg!(self.events, "{name} dropped {}", item.name);
        self.drop_on_floor(pos, [item]);
        true
    }

    pub fn equip(&mut self, id: ItemId) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let name = player
            .items
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.clone());

        match (player.equip(id), name) {
            (Ok(prev), Some(name)) => {
                if let Some(prev) = prev {
                    msg!(self.events, "{} removed {prev}", player.name);
                }
                msg!(self.events, "{} equipped {name}", player.name);
                true
            }
            (Err(why), Some(name)) => {
                msg!(self.events, "{name} is {why}");
                false
            }
            _ => false,
        }
    }

    pub fn unequip(&mut self, slot: Slot) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let who = player.name.clone();
        if let Some(item) = player.unequip(slot) {
            msg!(self.events, "{who} removed {}", item.name);
            true
        } else {
            false
        }
    }
}
