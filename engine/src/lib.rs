//! Game logic layer machinery.

use serde::{Deserialize, Serialize};

/// How far can the player see.
pub const FOV_RADIUS: i32 = 10;

/// How many recent messages a level's event log holds.
pub const EVENT_LOG_SIZE: usize = 8;

mod action;

pub mod data;
pub use data::Data;

mod entity;
pub use entity::{Character, Monster, Player};

mod fov;

mod game;
pub use game::{Client, Game, Snapshot};

mod item;
pub use item::{Item, ItemId, ItemIds, ItemKind, Slot};

mod level;
pub use level::{Level, LevelPos};

mod mapfile;

mod mob;

mod msg;
pub use msg::{Event, EventLog};

mod pathing;

pub mod prelude;

mod runtime;
pub use runtime::{Input, Runtime};

mod tile;
pub use tile::{Terrain, Tile};

mod world;
pub use world::World;

#[derive(
    Copy, Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize,
)]
pub enum ScenarioStatus {
    #[default]
    Ongoing,
    /// Player asked to stop.
    Quit,
    /// Player hitpoints ran out, nothing more happens after this.
    Died,
}

impl ScenarioStatus {
    pub fn is_over(self) -> bool {
        self != ScenarioStatus::Ongoing
    }
}
