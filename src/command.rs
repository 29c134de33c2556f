use engine::prelude::*;

pub const HELP: &str = "\
Commands:
  w a s d   move or attack up, left, down, right
  .         wait a turn
  t         take everything here
  g ID      take item ID from the floor
  x ID      drop item ID
  e ID      equip item ID
  u SLOT    unequip weapon or armor
  q         quit";

/// Parse a line of player text into an engine input.
pub fn parse(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let cmd = words.next()?;
    let arg = words.next();
    if words.next().is_some() {
        return None;
    }

    let id = || arg.and_then(|a| a.parse::<ItemId>().ok());

    match (cmd, arg) {
        ("w", None) => Some(Input::Up),
        ("a", None) => Some(Input::Left),
        ("s", None) => Some(Input::Down),
        ("d", None) => Some(Input::Right),
        (".", None) => Some(Input::None),
        ("t", None) => Some(Input::TakeAll),
        ("q", None) => Some(Input::Quit),
        ("g", _) => id().map(Input::TakeItem),
        ("x", _) => id().map(Input::DropItem),
        ("e", _) => id().map(Input::Equip),
        ("u", Some(slot)) => slot.parse::<Slot>().ok().map(Input::Unequip),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(parse("w"), Some(Input::Up));
        assert_eq!(parse("  d  "), Some(Input::Right));
        assert_eq!(parse("."), Some(Input::None));
        assert_eq!(parse("g 3"), Some(Input::TakeItem(ItemId(3))));
        assert_eq!(parse("x #12"), Some(Input::DropItem(ItemId(12))));
        assert_eq!(parse("e 1"), Some(Input::Equip(ItemId(1))));
        assert_eq!(parse("u armor"), Some(Input::Unequip(Slot::Armor)));
        assert_eq!(parse("q"), Some(Input::Quit));
    }

    #[test]
    fn bad_commands() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("g"), None);
        assert_eq!(parse("g sword"), None);
        assert_eq!(parse("u shield"), None);
        assert_eq!(parse("w w"), None);
        assert_eq!(parse("jump"), None);
    }
}
