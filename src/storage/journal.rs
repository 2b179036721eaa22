//! Selection journal: append-only, session-scoped record of store events

use crate::core::catalog::RoomType;
use crate::core::event::SelectionEvent;
use std::collections::HashMap;

/// Trait for selection journal implementations
pub trait SelectionJournal {
    /// Append an event to the journal
    fn append(&mut self, event: SelectionEvent);

    /// All events in append order
    fn events(&self) -> &[SelectionEvent];

    /// Events recorded for one room, in append order
    fn room_events(&self, room_type: RoomType) -> Vec<&SelectionEvent>;

    fn len(&self) -> usize {
        self.events().len()
    }

    fn is_empty(&self) -> bool {
        self.events().is_empty()
    }
}

/// In-memory implementation of the selection journal
#[derive(Debug, Default)]
pub struct InMemoryJournal {
    events: Vec<SelectionEvent>,
    /// Map from room type to positions in `events`
    by_room: HashMap<RoomType, Vec<usize>>,
}

impl InMemoryJournal {
    /// Create a new in-memory journal
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionJournal for InMemoryJournal {
    fn append(&mut self, event: SelectionEvent) {
        self.by_room
            .entry(event.room_type())
            .or_default()
            .push(self.events.len());
        self.events.push(event);
    }

    fn events(&self) -> &[SelectionEvent] {
        &self.events
    }

    fn room_events(&self, room_type: RoomType) -> Vec<&SelectionEvent> {
        self.by_room
            .get(&room_type)
            .map(|positions| positions.iter().map(|&i| &self.events[i]).collect())
            .unwrap_or_default()
    }
}

/// Journal that keeps nothing, for callers that never replay
#[derive(Debug, Default)]
pub struct NullJournal;

impl SelectionJournal for NullJournal {
    fn append(&mut self, _event: SelectionEvent) {}

    fn events(&self) -> &[SelectionEvent] {
        &[]
    }

    fn room_events(&self, _room_type: RoomType) -> Vec<&SelectionEvent> {
        Vec::new()
    }
}
