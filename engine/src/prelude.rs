pub use crate::{
    msg, Character, Data, Event, EventLog, Input, Item, ItemId, ItemIds,
    ItemKind, Level, LevelPos, Monster, Player, Runtime, ScenarioStatus, Slot,
    Terrain, Tile, World,
};
pub use glam::{ivec2, IVec2};
pub use util::{HashMap, HashSet, IndexMap, VecExt, DIR_4};
