//! Engine loop that talks to the outside world through channels.

use std::{
    sync::mpsc::{sync_channel, Receiver, SyncSender},
    thread::{self, JoinHandle},
};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// What an observer gets to see after each turn.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub level_name: String,
    pub level: Level,
    pub status: ScenarioStatus,
}

impl Runtime {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            level_name: self.level_name().to_owned(),
            level: self.level().clone(),
            status: self.status(),
        }
    }
}

/// Frontend end of the engine channels.
pub struct Client {
    pub input: SyncSender<Input>,
    pub snapshots: Receiver<Snapshot>,
}

impl Client {
    /// Wait for the next snapshot.
    ///
    /// Returns `None` when the engine has stopped.
    pub fn recv(&self) -> Option<Snapshot> {
        self.snapshots.recv().ok()
    }

    /// Send an input and wait for the turn it causes.
    ///
    /// Returns `None` when the engine has stopped.
    pub fn send(&self, input: Input) -> Option<Snapshot> {
        self.input.send(input).ok()?;
        self.recv()
    }
}

/// Engine loop that owns the runtime.
pub struct Game {
    runtime: Runtime,
    input: Receiver<Input>,
    output: SyncSender<Snapshot>,
}

impl Game {
    /// Set up an engine loop and the client connected to it.
    ///
    /// Both channels are rendezvous channels, every send blocks until the
    /// other side receives.
    pub fn new(runtime: Runtime) -> (Game, Client) {
        let (input_tx, input_rx) = sync_channel(0);
        let (output_tx, output_rx) = sync_channel(0);

        (
            Game {
                runtime,
                input: input_rx,
                output: output_tx,
            },
            Client {
                input: input_tx,
                snapshots: output_rx,
            },
        )
    }

    /// Run the engine loop in a new thread.
    pub fn spawn(runtime: Runtime) -> (Client, JoinHandle<Runtime>) {
        let (game, client) = Game::new(runtime);
        (client, thread::spawn(move || game.run()))
    }

    /// Run until the player quits or dies or the client goes away.
    ///
    /// Publishes the initial state and then one snapshot per input, except
    /// for quitting which ends the loop without a snapshot.
    pub fn run(mut self) -> Runtime {
        if self.output.send(self.runtime.snapshot()).is_err() {
            log::warn!("Snapshot channel closed before game start");
            return self.runtime;
        }

        loop {
            let Ok(input) = self.input.recv() else {
                log::warn!("Input channel closed, stopping game");
                break;
            };

            let status = self.runtime.act(input);
            if status == ScenarioStatus::Quit {
                log::info!("Player quit");
                break;
            }

            if self.output.send(self.runtime.snapshot()).is_err() {
                log::warn!("Snapshot channel closed, stopping game");
                break;
            }

            if status.is_over() {
                log::info!("Game over: {status:?}");
                break;
            }
        }

        self.runtime
    }
}
