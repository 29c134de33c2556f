use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

use crate::prelude::*;

/// Every level of the dungeon and the portals between them.
#[derive(Clone, Default, Debug)]
pub struct World {
    pub levels: IndexMap<String, Level>,
    /// Name of the level the player starts on.
    pub start: String,
}

impl World {
    /// Build a world from a world description and named map texts.
    ///
    /// The first non-empty line of the description names the starting
    /// level, every other line is a directed portal
    /// `src,src_x,src_y,dst,dst_x,dst_y`.
    pub fn parse(
        desc: &str,
        maps: impl IntoIterator<Item = (String, String)>,
    ) -> Result<World> {
        let mut ids = ItemIds::default();
        let mut levels = IndexMap::default();
        for (name, text) in maps {
            let level = Level::parse(&text, &mut ids)
                .with_context(|| format!("Bad map {name:?}"))?;
            levels.insert(name, level);
        }

        let mut lines = desc.lines().map(str::trim).filter(|l| !l.is_empty());
        let Some(start) = lines.next() else {
            bail!("World description does not name a starting level");
        };
        if !levels.contains_key(start) {
            bail!("Unknown starting level {start:?}");
        }

        let mut ret = World {
            levels,
            start: start.to_owned(),
        };

        for line in lines {
            let (src, dst) = ret
                .parse_portal(line)
                .with_context(|| format!("Bad portal {line:?}"))?;
            if let Some(level) = ret.levels.get_mut(&src.level) {
                level.portals.insert(src.pos, dst);
            }
        }

        ret.check_player()?;
        Ok(ret)
    }

    /// Load `world.txt` and `maps/*.map` from a directory.
    pub fn load(dir: impl AsRef<Path>) -> Result<World> {
        let dir = dir.as_ref();
        let path = dir.join("world.txt");
        let desc = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let map_dir = dir.join("maps");
        let mut maps = Vec::new();
        for entry in fs::read_dir(&map_dir).with_context(|| {
            format!("Failed to read {}", map_dir.display())
        })? {
            let path = entry?.path();
            if path.extension().is_none_or(|e| e != "map") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            maps.push((name.to_owned(), text));
        }
        // Directory order is arbitrary, keep item ids stable between runs.
        maps.sort();

        log::info!("Loading {} maps from {}", maps.len(), dir.display());
        World::parse(&desc, maps)
    }

    fn parse_portal(&self, line: &str) -> Result<(LevelPos, LevelPos)> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [src, sx, sy, dst, dx, dy] = fields[..] else {
            bail!("Expected 6 fields, got {}", fields.len());
        };

        let src = self.level_pos(src, sx, sy)?;
        let dst = self.level_pos(dst, dx, dy)?;
        Ok((src, dst))
    }

    fn level_pos(&self, name: &str, x: &str, y: &str) -> Result<LevelPos> {
        let Some(level) = self.levels.get(name) else {
            bail!("Unknown level {name:?}");
        };
        let pos = ivec2(
            x.parse().with_context(|| format!("Bad x coordinate {x:?}"))?,
            y.parse().with_context(|| format!("Bad y coordinate {y:?}"))?,
        );
        if !level.in_range(pos) {
            bail!("Position {pos} outside level {name:?}");
        }
        Ok(LevelPos::new(name, pos))
    }

    fn check_player(&self) -> Result<()> {
        for (name, level) in &self.levels {
            if level.player.is_some() && *name != self.start {
                bail!(
                    "Player must start on level {:?}, found on {name:?}",
                    self.start
                );
            }
        }
        if self.levels[&self.start].player.is_none() {
            bail!("World does not specify player entry point");
        }
        Ok(())
    }
}
