//! Outbound port towards the presentation layer.
//!
//! The machine hands every [`GameEvent`] to a [`Presenter`] synchronously,
//! in the order the events happen. Rendering, animation timing and
//! resource loading all live behind this trait.

use crate::game::{GameEvent, InstructionKey};
use std::sync::mpsc::Sender;

/// Receiver of game events.
pub trait Presenter {
    fn present(&mut self, event: GameEvent);
}

/// Discards every event. Handy for headless simulation.
impl Presenter for () {
    fn present(&mut self, _event: GameEvent) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, event: GameEvent) {
        (**self).present(event);
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, event: GameEvent) {
        (**self).present(event);
    }
}

/// Forwards events to another thread.
///
/// A disconnected receiver is not an error for the game; the events are
/// dropped.
impl Presenter for Sender<GameEvent> {
    fn present(&mut self, event: GameEvent) {
        if let Err(err) = self.send(event) {
            log::debug!("presentation channel closed, dropping {:?}", err.0);
        }
    }
}

/// Records events in memory.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were presented.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Key of the most recent instruction text.
    pub fn last_instruction(&self) -> Option<InstructionKey> {
        self.events.iter().rev().find_map(|event| match event {
            GameEvent::InstructionTextChanged { key, .. } => Some(*key),
            _ => None,
        })
    }
}

impl Presenter for EventLog {
    fn present(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
