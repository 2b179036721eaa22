//! Cart projection: the flat, purchasable view of every chosen item.
//!
//! The projection is kept up to date incrementally from selection events.
//! Entries are keyed by (room position, category position, unique id), so
//! iteration yields rooms and categories in catalog order and items in
//! insertion order without re-sorting.

use crate::core::catalog::{Catalog, CatalogItem, CategoryId, RoomType};
use crate::core::event::{SelectionChange, SelectionEvent};
use crate::core::money::Price;
use crate::core::selection::{ChosenItem, UniqueId};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Trait for views maintained from the selection event stream.
pub trait Projection {
    /// Apply a single event to the view.
    fn apply_event(&mut self, event: &SelectionEvent);
}

/// One cart line, decorated for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub unique_id: UniqueId,
    pub room_type: RoomType,
    pub room_name: String,
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(flatten)]
    pub item: CatalogItem,
}

impl CartEntry {
    pub fn price(&self) -> Price {
        self.item.price
    }
}

type CartKey = (usize, usize, UniqueId);

/// Incrementally maintained cart
#[derive(Debug, Clone)]
pub struct CartProjection {
    catalog: Arc<Catalog>,
    entries: BTreeMap<CartKey, CartEntry>,
    keys: HashMap<UniqueId, CartKey>,
    total: Price,
}

impl CartProjection {
    /// Create an empty cart for the given catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            entries: BTreeMap::new(),
            keys: HashMap::new(),
            total: Price::ZERO,
        }
    }

    /// Build a cart from scratch by replaying events
    pub fn rebuild<'a>(catalog: Arc<Catalog>, events: impl IntoIterator<Item = &'a SelectionEvent>) -> Self {
        let mut cart = Self::new(catalog);
        for event in events {
            cart.apply_event(event);
        }
        cart
    }

    /// Entries in catalog order, then insertion order
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Owned copy of all entries
    pub fn list_entries(&self) -> Vec<CartEntry> {
        self.entries.values().cloned().collect()
    }

    /// Sum of entry prices
    pub fn total(&self) -> Price {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, unique_id: UniqueId) -> bool {
        self.keys.contains_key(&unique_id)
    }

    pub fn entry(&self, unique_id: UniqueId) -> Option<&CartEntry> {
        self.keys.get(&unique_id).and_then(|key| self.entries.get(key))
    }

    /// Entries grouped by room, rooms in catalog order, empty rooms omitted
    pub fn entries_by_room(&self) -> Vec<(RoomType, Vec<&CartEntry>)> {
        let mut groups: Vec<(RoomType, Vec<&CartEntry>)> = Vec::new();
        for entry in self.entries.values() {
            match groups.last_mut() {
                Some((room_type, items)) if *room_type == entry.room_type => items.push(entry),
                _ => groups.push((entry.room_type, vec![entry])),
            }
        }
        groups
    }

    /// Whether any cart entry belongs to the room (drives the tab marker)
    pub fn has_room(&self, room_type: RoomType) -> bool {
        self.entries.values().any(|entry| entry.room_type == room_type)
    }

    fn insert(&mut self, chosen: &ChosenItem) {
        let room = self.catalog.room(chosen.room_type);
        let room_position = self
            .catalog
            .room_position(chosen.room_type)
            .unwrap_or(usize::MAX);
        let category = room.and_then(|r| r.category(chosen.category_id));
        let category_position = room
            .and_then(|r| r.category_position(chosen.category_id))
            .unwrap_or(usize::MAX);

        let entry = CartEntry {
            unique_id: chosen.unique_id,
            room_type: chosen.room_type,
            room_name: chosen.room_type.display_name().to_string(),
            category_id: chosen.category_id,
            category_name: category
                .map(|c| c.name.clone())
                .unwrap_or_else(|| chosen.category_id.to_string()),
            item: chosen.item.clone(),
        };

        let key = (room_position, category_position, chosen.unique_id);
        if let Some(previous) = self.entries.insert(key, entry) {
            self.total = self.total.saturating_sub(previous.price());
        }
        self.total = self.total + chosen.item.price;
        self.keys.insert(chosen.unique_id, key);
    }

    fn remove(&mut self, unique_id: UniqueId) {
        if let Some(key) = self.keys.remove(&unique_id) {
            if let Some(entry) = self.entries.remove(&key) {
                self.total = self.total.saturating_sub(entry.price());
            }
        }
    }
}

impl Projection for CartProjection {
    fn apply_event(&mut self, event: &SelectionEvent) {
        match event.change() {
            SelectionChange::CurrentSelected { .. } => {}
            SelectionChange::ItemChosen { item } => self.insert(item),
            SelectionChange::ItemRemoved { unique_id, .. } => self.remove(*unique_id),
            SelectionChange::RoomCleared { removed } => {
                for unique_id in removed {
                    self.remove(*unique_id);
                }
            }
        }
    }
}

impl PartialEq for CartProjection {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.total == other.total
    }
}
