use serde::{Deserialize, Serialize};

/// Specific terrain in a single level map cell.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
#[serde(try_from = "char", into = "char")]
pub enum Terrain {
    /// Void outside the dungeon.
    #[default]
    Empty,
    Stone,
    Dirt,
    ClosedDoor,
    OpenedDoor,
    UpStair,
    DownStair,
}

use Terrain::*;

impl Terrain {
    pub fn blocks_movement(self) -> bool {
        matches!(self, Empty | Stone | ClosedDoor)
    }

    pub fn blocks_sight(self) -> bool {
        matches!(self, Empty | Stone | ClosedDoor)
    }

    pub fn is_floor(self) -> bool {
        matches!(self, Dirt)
    }

    /// Terrain that sits on top of a floor tile instead of being the floor.
    pub fn is_overlay(self) -> bool {
        matches!(self, ClosedDoor | OpenedDoor | UpStair | DownStair)
    }
}

impl TryFrom<char> for Terrain {
    type Error = &'static str;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            ' ' => Ok(Empty),
            '#' => Ok(Stone),
            '.' => Ok(Dirt),
            '|' => Ok(ClosedDoor),
            '/' => Ok(OpenedDoor),
            'u' => Ok(UpStair),
            'd' => Ok(DownStair),
            _ => Err("invalid terrain char"),
        }
    }
}

impl From<Terrain> for char {
    fn from(val: Terrain) -> Self {
        // NB. This must match Terrain's TryFrom inputs above.
        match val {
            Empty => ' ',
            Stone => '#',
            Dirt => '.',
            ClosedDoor => '|',
            OpenedDoor => '/',
            UpStair => 'u',
            DownStair => 'd',
        }
    }
}

/// One map cell, terrain and what the player knows about it.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize,
)]
pub struct Tile {
    pub terrain: Terrain,
    pub overlay: Option<Terrain>,
    /// In the player's line of sight right now.
    pub visible: bool,
    /// Has been visible at some point. Never reset.
    pub seen: bool,
}

impl Tile {
    pub fn new(terrain: Terrain) -> Self {
        Tile {
            terrain,
            ..Default::default()
        }
    }

    pub fn blocks_movement(&self) -> bool {
        self.terrain.blocks_movement()
            || self.overlay.map_or(false, Terrain::blocks_movement)
    }

    pub fn blocks_sight(&self) -> bool {
        self.terrain.blocks_sight()
            || self.overlay.map_or(false, Terrain::blocks_sight)
    }

    /// Topmost terrain glyph.
    pub fn icon(&self) -> char {
        self.overlay.unwrap_or(self.terrain).into()
    }
}
