//! Things characters do to each other and the level.

use crate::prelude::*;

/// Resolve one melee attack.
///
/// Costs the attacker one action point. Returns damage dealt.
pub(crate) fn attack(
    attacker: &mut Character,
    defender: &mut Character,
    events: &mut EventLog,
) -> i32 {
    attacker.ap -= 1.0;

    let damage = defender.damage_taken(attacker.attack_power());
    defender.hp -= damage;

    if defender.is_dead() {
        msg!(events, "{} killed {}", attacker.name, defender.name);
    } else {
        msg!(
            events,
            "{} attacked {} for {damage}",
            attacker.name,
            defender.name
        );
    }
    damage
}

impl Level {
    /// Player attacks the monster at position.
    pub(crate) fn player_attack(&mut self, pos: IVec2) {
        let Level {
            player,
            monsters,
            events,
            ..
        } = self;
        let (Some(player), Some(monster)) =
            (player.as_mut(), monsters.get_mut(&pos))
        else {
            return;
        };

        attack(player, monster, events);
        self.last_event = Some(Event::Attack);

        if self.monsters.get(&pos).is_some_and(|m| m.is_dead()) {
            self.kill_monster(pos);
        }
    }

    /// Remove a monster and leave everything it had on the floor.
    pub(crate) fn kill_monster(&mut self, pos: IVec2) {
        if let Some(mut monster) = self.monsters.remove(&pos) {
            log::debug!("{} died at {pos}", monster.name);
            let loot = monster.strip();
            self.drop_on_floor(pos, loot);
        }
    }

    /// Step the player onto a walkable position.
    pub(crate) fn move_player(&mut self, pos: IVec2) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.pos = pos;
        self.last_event = Some(Event::Move);
        self.update_fov();
    }
}
