//! Per-room selection state: chosen items and current previews
//!
//! `SelectionState` is only ever changed by applying a [`SelectionEvent`];
//! the store builds the event, and the same event then feeds the journal
//! and the cart projection.

use crate::core::catalog::{Catalog, CatalogItem, CategoryId, RoomCatalog, RoomType};
use crate::core::event::{SelectionChange, SelectionEvent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one add-to-chosen event.
///
/// Distinct per add, not per catalog item: choosing the same chair twice
/// yields two ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueId(u64);

impl UniqueId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog item placed into a room's chosen list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenItem {
    pub unique_id: UniqueId,
    pub room_type: RoomType,
    pub category_id: CategoryId,
    #[serde(flatten)]
    pub item: CatalogItem,
}

/// Chosen list and preview for one category of one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySelection {
    pub category_id: CategoryId,
    pub chosen: Vec<ChosenItem>,
    /// Item being previewed; absent for categories without items
    pub current: Option<CatalogItem>,
}

/// Selection of every category of one room, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSelection {
    pub room_type: RoomType,
    pub categories: Vec<CategorySelection>,
}

impl RoomSelection {
    /// Empty chosen lists, first item of each category as preview
    pub fn seed(room: &RoomCatalog) -> Self {
        Self {
            room_type: room.room_type,
            categories: room
                .categories
                .iter()
                .map(|category| CategorySelection {
                    category_id: category.id,
                    chosen: Vec::new(),
                    current: category.first_item().cloned(),
                })
                .collect(),
        }
    }

    pub fn category(&self, category_id: CategoryId) -> Option<&CategorySelection> {
        self.categories.iter().find(|c| c.category_id == category_id)
    }

    fn category_mut(&mut self, category_id: CategoryId) -> Option<&mut CategorySelection> {
        self.categories.iter_mut().find(|c| c.category_id == category_id)
    }

    /// Chosen items across all categories, in catalog then insertion order
    pub fn chosen_items(&self) -> impl Iterator<Item = &ChosenItem> {
        self.categories.iter().flat_map(|c| c.chosen.iter())
    }

    pub fn chosen_count(&self) -> usize {
        self.categories.iter().map(|c| c.chosen.len()).sum()
    }
}

/// Selection state of every room in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    rooms: Vec<RoomSelection>,
}

impl SelectionState {
    /// Walk the catalog and seed every room and category
    pub fn seed(catalog: &Catalog) -> Self {
        Self {
            rooms: catalog.rooms().iter().map(RoomSelection::seed).collect(),
        }
    }

    /// Rebuild a state by replaying events over a freshly seeded catalog
    pub fn replay<'a>(catalog: &Catalog, events: impl IntoIterator<Item = &'a SelectionEvent>) -> Self {
        let mut state = Self::seed(catalog);
        for event in events {
            state.apply(event);
        }
        state
    }

    pub fn rooms(&self) -> &[RoomSelection] {
        &self.rooms
    }

    pub fn room(&self, room_type: RoomType) -> Option<&RoomSelection> {
        self.rooms.iter().find(|r| r.room_type == room_type)
    }

    pub fn category(&self, room_type: RoomType, category_id: CategoryId) -> Option<&CategorySelection> {
        self.room(room_type)?.category(category_id)
    }

    fn room_mut(&mut self, room_type: RoomType) -> Option<&mut RoomSelection> {
        self.rooms.iter_mut().find(|r| r.room_type == room_type)
    }

    /// Chosen items of every room
    pub fn chosen_items(&self) -> impl Iterator<Item = &ChosenItem> {
        self.rooms.iter().flat_map(|r| r.chosen_items())
    }

    /// Apply a single event. Events naming an unknown room or category are
    /// ignored.
    pub fn apply(&mut self, event: &SelectionEvent) {
        let Some(room) = self.room_mut(event.room_type()) else {
            return;
        };

        match event.change() {
            SelectionChange::CurrentSelected { category_id, item } => {
                if let Some(slot) = room.category_mut(*category_id) {
                    slot.current = Some(item.clone());
                }
            }
            SelectionChange::ItemChosen { item } => {
                if let Some(slot) = room.category_mut(item.category_id) {
                    slot.chosen.push(item.clone());
                }
            }
            SelectionChange::ItemRemoved {
                category_id,
                unique_id,
            } => {
                if let Some(slot) = room.category_mut(*category_id) {
                    slot.chosen.retain(|chosen| chosen.unique_id != *unique_id);
                }
            }
            SelectionChange::RoomCleared { .. } => {
                for slot in &mut room.categories {
                    slot.chosen.clear();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::tests::sample_catalog;

    fn chosen(id: u64, room_type: RoomType, category_id: CategoryId, item: &CatalogItem) -> SelectionEvent {
        SelectionEvent::new(
            id,
            room_type,
            SelectionChange::ItemChosen {
                item: ChosenItem {
                    unique_id: UniqueId::new(id),
                    room_type,
                    category_id,
                    item: item.clone(),
                },
            },
        )
    }

    #[test]
    fn test_seed_covers_every_category() {
        let catalog = sample_catalog();
        let state = SelectionState::seed(&catalog);

        assert_eq!(state.rooms().len(), 2);
        let living = state.room(RoomType::LivingRoom).unwrap();
        assert_eq!(living.categories.len(), 3);
        assert_eq!(living.chosen_count(), 0);
        assert_eq!(living.category(CategoryId::Sofas).unwrap().current.as_ref().unwrap().id, 1);
        // Empty category keeps its slot but has nothing to preview
        let rugs = living.category(CategoryId::Rugs).unwrap();
        assert!(rugs.current.is_none());
        assert!(rugs.chosen.is_empty());
    }

    #[test]
    fn test_apply_choose_and_remove() {
        let catalog = sample_catalog();
        let mut state = SelectionState::seed(&catalog);
        let chair = catalog.item(RoomType::LivingRoom, CategoryId::Chairs, 3).unwrap();

        state.apply(&chosen(1, RoomType::LivingRoom, CategoryId::Chairs, chair));
        state.apply(&chosen(2, RoomType::LivingRoom, CategoryId::Chairs, chair));
        assert_eq!(state.category(RoomType::LivingRoom, CategoryId::Chairs).unwrap().chosen.len(), 2);

        state.apply(&SelectionEvent::new(
            3,
            RoomType::LivingRoom,
            SelectionChange::ItemRemoved {
                category_id: CategoryId::Chairs,
                unique_id: UniqueId::new(1),
            },
        ));
        let chairs = &state.category(RoomType::LivingRoom, CategoryId::Chairs).unwrap().chosen;
        assert_eq!(chairs.len(), 1);
        assert_eq!(chairs[0].unique_id, UniqueId::new(2));
    }

    #[test]
    fn test_room_cleared_only_touches_its_room() {
        let catalog = sample_catalog();
        let mut state = SelectionState::seed(&catalog);
        let chair = catalog.item(RoomType::LivingRoom, CategoryId::Chairs, 3).unwrap();

        state.apply(&chosen(1, RoomType::LivingRoom, CategoryId::Chairs, chair));
        state.apply(&chosen(2, RoomType::Bedroom, CategoryId::Chairs, chair));
        state.apply(&SelectionEvent::new(
            3,
            RoomType::LivingRoom,
            SelectionChange::RoomCleared { removed: vec![UniqueId::new(1)] },
        ));

        assert_eq!(state.room(RoomType::LivingRoom).unwrap().chosen_count(), 0);
        assert_eq!(state.room(RoomType::Bedroom).unwrap().chosen_count(), 1);
    }

    #[test]
    fn test_unknown_room_is_ignored() {
        let catalog = sample_catalog();
        let mut state = SelectionState::seed(&catalog);
        let before = state.clone();
        let chair = catalog.item(RoomType::LivingRoom, CategoryId::Chairs, 3).unwrap();

        state.apply(&chosen(1, RoomType::Kitchen, CategoryId::Chairs, chair));
        assert_eq!(state, before);
    }

    #[test]
    fn test_chosen_item_json_is_flat() {
        let catalog = sample_catalog();
        let chair = catalog.item(RoomType::LivingRoom, CategoryId::Chairs, 3).unwrap();
        let chosen = ChosenItem {
            unique_id: UniqueId::new(42),
            room_type: RoomType::LivingRoom,
            category_id: CategoryId::Chairs,
            item: chair.clone(),
        };
        let json = serde_json::to_value(&chosen).unwrap();
        assert_eq!(json["uniqueId"], 42);
        assert_eq!(json["roomType"], "living-room");
        assert_eq!(json["name"], "Gray Modern Chair");
    }
}
