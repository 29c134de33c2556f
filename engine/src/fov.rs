//! Logic for revealing level terrain to the player.

use crate::prelude::*;

impl Level {
    /// Recompute which tiles the player can see right now.
    ///
    /// Tiles that become visible are also marked as seen for good. Does
    /// nothing except clearing visibility if there is no player on the
    /// level.
    pub fn update_fov(&mut self) {
        for t in self.tiles_mut() {
            t.visible = false;
        }

        let Some((origin, radius)) =
            self.player.as_ref().map(|p| (p.pos, p.sight_range))
        else {
            return;
        };

        ::fov::cast(origin, radius, |p| self.reveal(p));
    }

    /// Mark a tile visible and return whether sight continues past it.
    fn reveal(&mut self, pos: IVec2) -> bool {
        let Some(tile) = self.tile_mut(pos) else {
            return false;
        };
        tile.visible = true;
        tile.seen = true;
        !tile.blocks_sight()
    }

    pub fn is_visible(&self, pos: IVec2) -> bool {
        self.tile(pos).is_some_and(|t| t.visible)
    }

    pub fn is_seen(&self, pos: IVec2) -> bool {
        self.tile(pos).is_some_and(|t| t.seen)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn with_player(mut level: Level, pos: IVec2, sight: i32) -> Level {
        level.player = Some(Player(Character {
            pos,
            sight_range: sight,
            hp: 1,
            ..Default::default()
        }));
        level.update_fov();
        level
    }

    #[test]
    fn open_field() {
        let level = with_player(Level::open(21, 21), ivec2(10, 10), 10);
        for (p, t) in level.iter() {
            let in_sight = (p - ivec2(10, 10)).euclid_len_sq() <= 100;
            assert_eq!(t.visible, in_sight, "{p}");
            assert_eq!(t.seen, in_sight, "{p}");
        }
    }

    #[test]
    fn wall_blocks_sight() {
        let level = with_player(
            Level::from_rows(&[
                "#######", //
                "#..#..#", //
                "#######", //
            ]),
            ivec2(1, 1),
            10,
        );
        assert!(level.is_visible(ivec2(2, 1)));
        // The wall itself is seen.
        assert!(level.is_visible(ivec2(3, 1)));
        assert!(!level.is_visible(ivec2(4, 1)));
        assert!(!level.is_seen(ivec2(5, 1)));
    }

    #[test]
    fn opening_door_reveals() {
        let mut level = with_player(
            Level::from_rows(&[
                "#######", //
                "#..|..#", //
                "#######", //
            ]),
            ivec2(2, 1),
            10,
        );
        assert!(level.is_visible(ivec2(3, 1)));
        assert!(!level.is_visible(ivec2(4, 1)));

        assert!(level.toggle_door(ivec2(3, 1)));
        assert_eq!(
            level.tile(ivec2(3, 1)).unwrap().overlay,
            Some(Terrain::OpenedDoor)
        );
        assert!(level.is_visible(ivec2(3, 1)));
        assert!(level.is_visible(ivec2(5, 1)));
    }

    #[quickcheck]
    fn seen_is_monotonic(moves: Vec<(u8, u8)>) -> bool {
        let mut level = with_player(Level::open(12, 8), ivec2(0, 0), 4);
        let mut seen: Vec<bool> = level.iter().map(|(_, t)| t.seen).collect();

        for (x, y) in moves {
            let pos = ivec2(x as i32 % 12, y as i32 % 8);
            level.player.as_mut().unwrap().pos = pos;
            level.update_fov();

            let now: Vec<bool> = level.iter().map(|(_, t)| t.seen).collect();
            if seen.iter().zip(&now).any(|(&a, &b)| a && !b) {
                return false;
            }
            // Player's own tile is always visible.
            if !level.is_visible(pos) {
                return false;
            }
            seen = now;
        }
        true
    }
}
