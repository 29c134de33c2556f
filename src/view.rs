use std::fmt;

use engine::{prelude::*, Snapshot};

/// Text display of what the player knows.
pub struct View<'a>(pub &'a Snapshot);

fn item_list<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    let names: Vec<String> = items
        .into_iter()
        .map(|e| format!("{} {}", e.name, e.id))
        .collect();
    if names.is_empty() {
        "-".into()
    } else {
        names.join(", ")
    }
}

impl View<'_> {
    fn glyph(&self, pos: IVec2) -> char {
        let level = &self.0.level;
        let Some(tile) = level.tile(pos) else {
            return ' ';
        };
        if !tile.seen {
            return ' ';
        }
        if level.player_pos() == Some(pos) {
            return '@';
        }
        if tile.visible {
            if let Some(m) = level.monster_at(pos) {
                return m.icon;
            }
            if let Some(e) = level.items_at(pos).last() {
                return e.icon;
            }
        }
        tile.icon()
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        let level = &s.level;

        for y in 0..level.height() {
            let row: String =
                (0..level.width()).map(|x| self.glyph(ivec2(x, y))).collect();
            writeln!(f, "{}", row.trim_end())?;
        }

        if let Some(p) = &level.player {
            writeln!(f, "{}  HP {}", s.level_name, p.hp)?;
            writeln!(f, "Weapon: {}", item_list(&p.weapon))?;
            writeln!(f, "Armor: {}", item_list(&p.armor))?;
            writeln!(f, "Inventory: {}", item_list(&p.items))?;

            let here = level.items_at(p.pos);
            if !here.is_empty() {
                writeln!(f, "Here: {}", item_list(here))?;
            }
        }

        for line in level.events.iter() {
            writeln!(f, "> {line}")?;
        }

        if s.status == ScenarioStatus::Died {
            writeln!(f, "*** You died ***")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn runtime(map: &str) -> Runtime {
        let w = World::parse("cave", [("cave".into(), map.into())]).unwrap();
        Runtime::new(w).unwrap()
    }

    #[test]
    fn initial_view() {
        let r = runtime(
            "\
#######
#@..R.#
###|###
#.....#
#######",
        );
        assert_eq!(
            View(&r.snapshot()).to_string(),
            "\
#######
#@..R.#
###|###


cave  HP 20
Weapon: -
Armor: -
Inventory: -
"
        );
    }

    #[test]
    fn equipment_view() {
        let mut r = runtime("@sh");
        r.act(Input::Right);
        r.act(Input::TakeAll);
        r.act(Input::Equip(ItemId(1)));
        r.act(Input::Right);

        let text = View(&r.snapshot()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "..@",
                "cave  HP 20",
                "Weapon: Sword #1",
                "Armor: -",
                "Inventory: -",
                "Here: Helmet #2",
                "> Player picked up Sword",
                "> Player equipped Sword",
            ]
        );
    }
}
