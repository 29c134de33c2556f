use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use engine::{prelude::*, Game, Snapshot};

mod command;
mod view;

pub const GAME_NAME: &str = "dungeon";

#[derive(Parser, Debug)]
#[command(name = GAME_NAME, about = "Turn-based dungeon crawler")]
struct Args {
    #[arg(
        long,
        default_value = "data",
        help = "World directory containing world.txt and maps/"
    )]
    world: PathBuf,

    #[arg(long, help = "Print snapshots as JSON instead of a map view")]
    json: bool,
}

fn show(args: &Args, snapshot: &Snapshot) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string(snapshot)?);
    } else {
        println!("{}", view::View(snapshot));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args = Args::parse();

    let world = World::load(&args.world)?;
    let (client, handle) = Game::spawn(Runtime::new(world)?);

    let Some(snapshot) = client.recv() else {
        bail!("Engine stopped before the game started");
    };
    show(&args, &snapshot)?;
    if !args.json {
        eprintln!("{}", command::HELP);
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(input) = command::parse(&line) else {
            eprintln!("{}", command::HELP);
            continue;
        };

        let Some(snapshot) = client.send(input) else {
            // Engine loop ends without a snapshot when quitting.
            break;
        };
        show(&args, &snapshot)?;
        if snapshot.status.is_over() {
            break;
        }
    }

    drop(client);
    let runtime = handle
        .join()
        .map_err(|_| anyhow!("Engine thread panicked"))?;
    log::info!("{GAME_NAME} finished: {:?}", runtime.status());
    Ok(())
}
