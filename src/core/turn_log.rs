use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::types::TurnEvent;

/// Ordered, append-only record of the turn events of one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnLog {
    events: Vec<TurnEvent>,
}

/// Handle letting an export collaborator read the log from another thread.
pub type SharedTurnLog = Arc<RwLock<TurnLog>>;

/// Short summary of the most recent turn, as shown next to the export button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnPreview {
    pub turn: u32,
    pub time: f64,
    pub gamma: f64,
    pub kinetic_energy: f64,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedTurnLog {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn push(&mut self, event: TurnEvent) {
        debug_assert!(
            self.events.last().map_or(true, |last| event.turn > last.turn),
            "turn events must be appended in order"
        );
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn latest(&self) -> Option<&TurnEvent> {
        self.events.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[TurnEvent] {
        &self.events
    }

    pub fn preview(&self) -> Option<TurnPreview> {
        self.latest().map(|event| TurnPreview {
            turn: event.turn,
            time: event.time,
            gamma: event.gamma,
            kinetic_energy: event.kinetic_energy,
        })
    }

    /// Drops every record. Only a simulation reset does this.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<'a> IntoIterator for &'a TurnLog {
    type Item = &'a TurnEvent;
    type IntoIter = std::slice::Iter<'a, TurnEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
