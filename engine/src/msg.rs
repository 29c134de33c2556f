//! Recording things that happen for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::EVENT_LOG_SIZE;

/// What kind of thing happened most recently.
///
/// Only informational, observers use it to trigger side effects like sound.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
pub enum Event {
    Move,
    DoorOpen,
    Attack,
    Hit,
    Portal,
}

/// Fixed-size ring of recent event messages.
///
/// The oldest message gets overwritten when the log is full.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct EventLog {
    lines: Vec<String>,
    cursor: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        EventLog::with_capacity(EVENT_LOG_SIZE)
    }
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "zero capacity event log");
        EventLog {
            lines: vec![String::new(); capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.lines.len()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines[self.cursor] = line.into();
        self.cursor = (self.cursor + 1) % self.lines.len();
    }

    /// Iterate messages from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let (newer, older) = self.lines.split_at(self.cursor);
        older
            .iter()
            .chain(newer)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn last(&self) -> Option<&str> {
        self.iter().last()
    }
}

/// Write a formatted message into an event log and the debug log.
#[macro_export]
macro_rules! msg {
    ($log:expr, $($arg:tt)*) => {{
        let __txt = format!($($arg)*);
        ::log::info!("{__txt}");
        $log.push(__txt);
    }};
}
