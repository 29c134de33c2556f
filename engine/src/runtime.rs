use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Player command for one turn.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    TakeItem(ItemId),
    TakeAll,
    DropItem(ItemId),
    Equip(ItemId),
    Unequip(Slot),
    Quit,
    /// Let a turn pass without doing anything.
    #[default]
    None,
}

impl Input {
    /// Direction of a movement input.
    pub fn dir(self) -> Option<IVec2> {
        match self {
            Input::Up => Some(ivec2(0, -1)),
            Input::Down => Some(ivec2(0, 1)),
            Input::Left => Some(ivec2(-1, 0)),
            Input::Right => Some(ivec2(1, 0)),
            _ => None,
        }
    }
}

/// Main data container for game engine runtime.
#[derive(Clone, Debug)]
pub struct Runtime {
    levels: IndexMap<String, Level>,
    current: String,
    status: ScenarioStatus,
}

impl Runtime {
    pub fn new(world: World) -> Result<Self> {
        let World { levels, start } = world;
        if levels.get(&start).is_none_or(|l| l.player.is_none()) {
            bail!("World does not specify player entry point");
        }

        let mut ret = Runtime {
            levels,
            current: start,
            status: ScenarioStatus::Ongoing,
        };
        ret.level_mut().update_fov();
        log::info!("Starting on level {}", ret.current);
        Ok(ret)
    }

    /// The level the player is on.
    pub fn level(&self) -> &Level {
        &self.levels[&self.current]
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.levels[&self.current]
    }

    pub fn level_name(&self) -> &str {
        &self.current
    }

    pub fn levels(&self) -> impl Iterator<Item = (&str, &Level)> + '_ {
        self.levels.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn status(&self) -> ScenarioStatus {
        self.status
    }

    pub fn player(&self) -> Option<&Player> {
        self.level().player.as_ref()
    }

    /// Run one full turn with the given player input.
    ///
    /// Does nothing once the game is over.
    pub fn act(&mut self, input: Input) -> ScenarioStatus {
        if self.status.is_over() {
            return self.status;
        }
        log::debug!("input {input:?}");

        match input {
            Input::Quit => {
                self.status = ScenarioStatus::Quit;
                return self.status;
            }
            Input::None => {}
            Input::TakeItem(id) => {
                self.level_mut().take_item(id);
            }
            Input::TakeAll => {
                self.level_mut().take_all();
            }
            Input::DropItem(id) => {
                self.level_mut().drop_item(id);
            }
            Input::Equip(id) => {
                self.level_mut().equip(id);
            }
            Input::Unequip(slot) => {
                self.level_mut().unequip(slot);
            }
            Input::Up | Input::Down | Input::Left | Input::Right => {
                if let Some(dir) = input.dir() {
                    self.bump(dir);
                }
            }
        }

        self.level_mut().update_monsters();

        if self.player().is_none_or(|p| p.is_dead()) {
            log::info!("Player died on level {}", self.current);
            self.status = ScenarioStatus::Died;
        }
        self.status
    }

    /// Player moves, fights or opens a door in a direction.
    fn bump(&mut self, dir: IVec2) {
        let level = self.level_mut();
        let Some(target) = level.player_pos().map(|p| p + dir) else {
            return;
        };

        if level.monster_at(target).is_some() {
            level.player_attack(target);
        } else if level.can_walk(target) {
            let portal = level.portal_at(target).cloned();
            if let Some(dst) = portal {
                self.enter_portal(dst);
            } else {
                level.move_player(target);
            }
        } else {
            level.toggle_door(target);
        }
    }

    fn enter_portal(&mut self, dst: LevelPos) {
        let Some(target) = self.levels.get(&dst.level) else {
            log::warn!("Portal to unknown level {:?}", dst.level);
            return;
        };
        if target.monster_at(dst.pos).is_some() {
            msg!(self.level_mut().events, "Something blocks the way");
            return;
        }

        let Some(mut player) = self.level_mut().player.take() else {
            return;
        };
        player.pos = dst.pos;
        let name = player.name.clone();

        self.current.clone_from(&dst.level);
        let level = self.level_mut();
        level.player = Some(player);
        level.last_event = Some(Event::Portal);
        msg!(level.events, "{name} entered {}", dst.level);
        level.update_fov();
    }
}
