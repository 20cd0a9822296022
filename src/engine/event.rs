use super::board::Position;
use super::player::Player;
use chrono::{DateTime, Local};
use log::debug;
use serde::Serialize;
use std::collections::VecDeque;

/// What the core reports back to whoever is presenting the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ChipDropped { player: Player, position: Position },
    GameWon { winner: Player },
    GameTied,
    TurnUndone,
    TurnRedone,
    GameRestarted,
}

/// A published event plus the wall-clock moment it happened.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub at: DateTime<Local>,
    pub event: GameEvent,
}

/// Outgoing queue of game events. The presentation layer drains it at its
/// own pace; publishing never blocks and never alters game state.
#[derive(Debug, Default)]
pub struct EventQueue {
    records: VecDeque<EventRecord>,
}

impl EventQueue {
    pub fn new() -> EventQueue {
        EventQueue {
            records: VecDeque::new(),
        }
    }

    pub fn publish(&mut self, event: GameEvent) {
        debug!("Game event: {:?}", event);
        self.records.push_back(EventRecord {
            at: Local::now(),
            event,
        });
    }

    /// Hands over everything published so far, oldest first.
    pub fn drain(&mut self) -> Vec<EventRecord> {
        self.records.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
