use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::prelude::*;

/// Position on a named level.
#[derive(
    Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
pub struct LevelPos {
    pub level: String,
    pub pos: IVec2,
}

impl LevelPos {
    pub fn new(level: impl Into<String>, pos: IVec2) -> Self {
        LevelPos {
            level: level.into(),
            pos,
        }
    }
}

/// A single dungeon floor and everything on it.
#[serde_as]
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    /// Only present on the level the player is currently on.
    pub player: Option<Player>,
    #[serde_as(as = "Vec<(_, _)>")]
    pub monsters: HashMap<IVec2, Monster>,
    /// Floor item stacks, newest item last.
    #[serde_as(as = "Vec<(_, _)>")]
    pub items: HashMap<IVec2, Vec<Item>>,
    #[serde_as(as = "Vec<(_, _)>")]
    pub portals: HashMap<IVec2, LevelPos>,
    pub events: EventLog,
    pub last_event: Option<Event>,
}

impl Level {
    /// Create a level filled with void.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Level {
            width,
            height,
            tiles: vec![Tile::default(); (width * height) as usize],
            ..Default::default()
        }
    }

    /// Level with nothing but floor.
    #[cfg(test)]
    pub(crate) fn open(width: i32, height: i32) -> Self {
        let mut ret = Level::new(width, height);
        for t in ret.tiles.iter_mut() {
            *t = Tile::new(Terrain::Dirt);
        }
        ret
    }

    /// Build from rows of terrain glyphs, for tests.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let w = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut ret = Level::new(w as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let t = Terrain::try_from(c).unwrap();
                let tile = ret.tile_mut(ivec2(x as i32, y as i32)).unwrap();
                if t.is_overlay() {
                    *tile = Tile::new(Terrain::Dirt);
                    tile.overlay = Some(t);
                } else {
                    *tile = Tile::new(t);
                }
            }
        }
        ret
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_range(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn idx(&self, pos: IVec2) -> Option<usize> {
        self.in_range(pos)
            .then(|| (pos.x + pos.y * self.width) as usize)
    }

    pub fn tile(&self, pos: IVec2) -> Option<&Tile> {
        self.idx(pos).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, pos: IVec2) -> Option<&mut Tile> {
        self.idx(pos).map(|i| &mut self.tiles[i])
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// Iterate all positions and tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &Tile)> + '_ {
        let w = self.width.max(1);
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (ivec2(i as i32 % w, i as i32 / w), t))
    }

    /// Whether a creature can step on position.
    ///
    /// Does not check for the player.
    pub fn can_walk(&self, pos: IVec2) -> bool {
        self.tile(pos).is_some_and(|t| !t.blocks_movement())
            && !self.monsters.contains_key(&pos)
    }

    /// Whether light passes through position.
    pub fn can_see(&self, pos: IVec2) -> bool {
        self.tile(pos).is_some_and(|t| !t.blocks_sight())
    }

    /// Open a closed door at position.
    ///
    /// Return whether a door was opened.
    pub fn toggle_door(&mut self, pos: IVec2) -> bool {
        let Some(tile) = self.tile_mut(pos) else {
            return false;
        };
        if tile.overlay != Some(Terrain::ClosedDoor) {
            return false;
        }

        tile.overlay = Some(Terrain::OpenedDoor);
        self.last_event = Some(Event::DoorOpen);
        log::debug!("door opened at {pos}");
        self.update_fov();
        true
    }

    /// Walkable orthogonal neighbors of position.
    pub fn neighbors(&self, pos: IVec2) -> impl Iterator<Item = IVec2> + '_ {
        DIR_4
            .iter()
            .map(move |&d| pos + d)
            .filter(|&p| self.can_walk(p))
    }

    pub fn player_pos(&self) -> Option<IVec2> {
        self.player.as_ref().map(|p| p.pos)
    }

    pub fn monster_at(&self, pos: IVec2) -> Option<&Monster> {
        self.monsters.get(&pos)
    }

    pub fn portal_at(&self, pos: IVec2) -> Option<&LevelPos> {
        self.portals.get(&pos)
    }
}
