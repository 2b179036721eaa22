//! Selection events: every store mutation is recorded as one of these

use crate::core::catalog::{CatalogItem, CategoryId, RoomType};
use crate::core::selection::{ChosenItem, UniqueId};
use crate::core::temporal::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique event identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    /// UUID of the event
    pub id: Uuid,
}

impl EventId {
    /// Generate a new event ID
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Event metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Event ID
    pub id: EventId,
    /// Position in the session's journal, starting at 1
    pub sequence: u64,
    /// When the store recorded the change
    pub recorded_at: Timestamp,
    /// Room whose selection changed
    pub room_type: RoomType,
}

/// What changed in a room's selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SelectionChange {
    /// The preview item of a category was replaced
    #[serde(rename_all = "camelCase")]
    CurrentSelected {
        category_id: CategoryId,
        item: CatalogItem,
    },
    /// An item was added to the chosen list (and the cart)
    ItemChosen { item: ChosenItem },
    /// A chosen item was removed
    #[serde(rename_all = "camelCase")]
    ItemRemoved {
        category_id: CategoryId,
        unique_id: UniqueId,
    },
    /// Every chosen item of the room was dropped, ahead of a preset load
    RoomCleared { removed: Vec<UniqueId> },
}

/// Complete event with metadata and change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub metadata: EventMetadata,
    pub change: SelectionChange,
}

impl SelectionEvent {
    /// Create a new event, stamped with the current time
    pub fn new(sequence: u64, room_type: RoomType, change: SelectionChange) -> Self {
        Self {
            metadata: EventMetadata {
                id: EventId::new(),
                sequence,
                recorded_at: Timestamp::now(),
                room_type,
            },
            change,
        }
    }

    /// Get event ID
    pub fn id(&self) -> EventId {
        self.metadata.id
    }

    pub fn sequence(&self) -> u64 {
        self.metadata.sequence
    }

    pub fn room_type(&self) -> RoomType {
        self.metadata.room_type
    }

    pub fn change(&self) -> &SelectionChange {
        &self.change
    }

    /// Short name of the change, used in logs
    pub fn kind(&self) -> &'static str {
        match self.change {
            SelectionChange::CurrentSelected { .. } => "current_selected",
            SelectionChange::ItemChosen { .. } => "item_chosen",
            SelectionChange::ItemRemoved { .. } => "item_removed",
            SelectionChange::RoomCleared { .. } => "room_cleared",
        }
    }
}
