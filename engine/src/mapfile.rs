//! Reading levels from ASCII map text.

use anyhow::{bail, Result};
use util::bfs;

use crate::prelude::*;

impl Level {
    /// Parse a level from a character grid.
    ///
    /// Width is set by the longest row, shorter rows are padded with void.
    /// Items spawned on the map draw their ids from `ids`.
    pub fn parse(text: &str, ids: &mut ItemIds) -> Result<Level> {
        let data = Data::get();
        let lines: Vec<&str> = text.lines().collect();
        let width =
            lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut ret = Level::new(width as i32, lines.len() as i32);
        // Tiles whose floor gets filled in from the surroundings.
        let mut pending = HashSet::default();

        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let p = ivec2(x as i32, y as i32);

                if c.is_whitespace() {
                    continue;
                } else if c == '@' {
                    if ret.player.is_some() {
                        bail!("More than one player on map, second at {p}");
                    }
                    ret.player = Some(Player(data.player.build(p, ids)));
                    pending.insert(p);
                } else if let Some(spec) = data.bestiary.get(&c) {
                    ret.monsters.insert(p, Monster(spec.build(p, ids)));
                    pending.insert(p);
                } else if let Some(spec) = data.armory.get(&c) {
                    let item = spec.build(p, ids.next());
                    ret.drop_on_floor(p, [item]);
                    pending.insert(p);
                } else if let Ok(t) = Terrain::try_from(c) {
                    let Some(tile) = ret.tile_mut(p) else {
                        bail!("Map position {p} out of bounds");
                    };
                    if t.is_overlay() {
                        tile.overlay = Some(t);
                        pending.insert(p);
                    } else {
                        tile.terrain = t;
                    }
                } else {
                    bail!("Bad map char {c:?} at {p}");
                }
            }
        }

        if pending.is_empty()
            && ret.iter().all(|(_, t)| t.terrain == Terrain::Empty)
        {
            bail!("Empty map");
        }

        let fills: Vec<(IVec2, Terrain)> = pending
            .iter()
            .map(|&p| (p, ret.nearest_floor(p, &pending)))
            .collect();
        for (p, t) in fills {
            if let Some(tile) = ret.tile_mut(p) {
                tile.terrain = t;
            }
        }

        log::debug!(
            "parsed {}x{} level, {} monsters",
            ret.width(),
            ret.height(),
            ret.monsters.len()
        );
        Ok(ret)
    }

    /// Terrain of the floor closest to a pending tile.
    fn nearest_floor(
        &self,
        start: IVec2,
        pending: &HashSet<IVec2>,
    ) -> Terrain {
        let is_open = |p: IVec2| {
            pending.contains(&p)
                || self.tile(p).is_some_and(|t| !t.terrain.blocks_movement())
        };

        bfs(
            start,
            |&p| {
                DIR_4
                    .iter()
                    .map(move |&d| p + d)
                    .filter(|&q| is_open(q))
                    .collect::<Vec<_>>()
            },
            |p| {
                !pending.contains(p)
                    && self.tile(*p).is_some_and(|t| t.terrain.is_floor())
            },
        )
        .and_then(|p| self.tile(p).map(|t| t.terrain))
        .unwrap_or(Terrain::Dirt)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Result<Level> {
        Level::parse(text, &mut ItemIds::default())
    }

    #[test]
    fn parse_map() {
        let level = parse(
            "\
#######
#@.R..#
#..|..#
#.s h.#
#####",
        )
        .unwrap();

        assert_eq!((level.width(), level.height()), (7, 5));
        assert_eq!(level.player_pos(), Some(ivec2(1, 1)));
        assert_eq!(level.player.as_ref().unwrap().hp, 20);
        assert_eq!(level.monster_at(ivec2(3, 1)).unwrap().name, "Rat");
        assert_eq!(level.items_at(ivec2(2, 3))[0].name, "Sword");
        assert_eq!(level.items_at(ivec2(4, 3))[0].kind, ItemKind::Armor);

        // Spawn and door tiles get floor under them.
        for p in [ivec2(1, 1), ivec2(3, 1), ivec2(3, 2), ivec2(2, 3)] {
            assert_eq!(level.tile(p).unwrap().terrain, Terrain::Dirt, "{p}");
        }
        assert_eq!(level.tile(ivec2(3, 2)).unwrap().icon(), '|');
        // Explicit gap and short row padding are void.
        assert_eq!(level.tile(ivec2(3, 3)).unwrap().terrain, Terrain::Empty);
        assert_eq!(level.tile(ivec2(6, 4)).unwrap().terrain, Terrain::Empty);
    }

    #[test]
    fn item_ids_are_unique() {
        let mut ids = ItemIds::default();
        let a = Level::parse("R.s", &mut ids).unwrap();
        let b = Level::parse("sR", &mut ids).unwrap();
        let mut all: Vec<ItemId> = [&a, &b]
            .iter()
            .flat_map(|l| {
                l.items
                    .values()
                    .flatten()
                    .chain(l.monsters.values().flat_map(|m| m.items.iter()))
                    .map(|e| e.id)
                    .collect::<Vec<_>>()
            })
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn isolated_door_defaults_to_dirt() {
        let level = parse("#|#").unwrap();
        assert_eq!(level.tile(ivec2(1, 0)).unwrap().terrain, Terrain::Dirt);
    }

    #[test]
    fn bad_maps() {
        let err = parse("#.X#").unwrap_err();
        assert_eq!(err.to_string(), "Bad map char 'X' at [2, 0]");
        assert!(parse("@.@").is_err());
        assert!(parse("").is_err());
        assert!(parse("   \n  ").is_err());
    }
}
