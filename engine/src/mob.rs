//! Monster behavior.

use crate::{action::attack, prelude::*};

impl Level {
    /// Give every monster on the level its turn.
    ///
    /// Monsters act in row-major order of their positions. Nothing more
    /// happens once the player is dead.
    pub(crate) fn update_monsters(&mut self) {
        let mut order: Vec<IVec2> = self.monsters.keys().copied().collect();
        order.sort_by_key(|p| (p.y, p.x));

        for pos in order {
            if self.player_is_dead() {
                break;
            }

            // Take the monster out of the map while it acts so it doesn't
            // block its own path.
            let Some(mut mob) = self.monsters.remove(&pos) else {
                continue;
            };
            self.monster_turn(&mut mob);
            self.monsters.insert(mob.pos, mob);
        }
    }

    fn player_is_dead(&self) -> bool {
        self.player.as_ref().is_some_and(|p| p.is_dead())
    }

    fn monster_turn(&mut self, mob: &mut Monster) {
        mob.ap += mob.speed;

        let Some(path) = self.player_pos().and_then(|p| self.path(mob.pos, p))
        else {
            // Can't reach the player, pass and lose this turn's points.
            mob.ap -= mob.speed;
            return;
        };

        // Attacking the player uses up the last step, so one attack at most.
        for next in path.into_iter().skip(1) {
            if mob.ap < 1.0 {
                break;
            }

            if Some(next) == self.player_pos() {
                let Level { player, events, .. } = self;
                let Some(player) = player.as_mut() else {
                    break;
                };
                attack(mob, player, events);
                self.last_event = Some(Event::Hit);
            } else {
                mob.pos = next;
                mob.ap -= 1.0;
            }
        }
    }
}
