//! Selection store: the single owner of chosen and previewed furniture
//!
//! Every mutation is turned into a [`SelectionEvent`] and committed in one
//! step: applied to the selection state, applied to the cart projection and
//! appended to the journal. A chosen item can therefore never be missing
//! from the cart, or the other way round.

use crate::core::catalog::{Catalog, CatalogItem, CategoryId, RoomType};
use crate::core::event::{SelectionChange, SelectionEvent};
use crate::core::money::Price;
use crate::core::preset::{FurnishedRoom, FurnitureRef};
use crate::core::selection::{ChosenItem, RoomSelection, SelectionState, UniqueId};
use crate::render::{render_scene, RenderScene, RenderScope};
use crate::storage::{CartEntry, CartProjection, InMemoryJournal, Projection, SelectionJournal};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of loading a preset into a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetReport {
    pub room_type: RoomType,
    /// Ids of the chosen items that were added, in preset order
    pub added: Vec<UniqueId>,
    /// References that did not resolve against the catalog
    pub skipped: Vec<FurnitureRef>,
}

/// Main selection store
pub struct SelectionStore {
    catalog: Arc<Catalog>,
    state: SelectionState,
    /// Reverse index from chosen item to its owning room and category
    owners: HashMap<UniqueId, (RoomType, CategoryId)>,
    cart: CartProjection,
    journal: Box<dyn SelectionJournal>,
    next_unique_id: u64,
    next_sequence: u64,
}

impl SelectionStore {
    /// Create a store with an in-memory journal, seeded from the catalog
    pub fn new(catalog: Catalog) -> Self {
        Self::with_journal(Arc::new(catalog), Box::new(InMemoryJournal::new()))
    }

    /// Create a store over a shared catalog with a custom journal
    pub fn with_journal(catalog: Arc<Catalog>, journal: Box<dyn SelectionJournal>) -> Self {
        let state = SelectionState::seed(&catalog);
        info!(
            rooms = state.rooms().len(),
            journal_events = journal.len(),
            "selection store seeded"
        );
        Self {
            cart: CartProjection::new(Arc::clone(&catalog)),
            catalog,
            state,
            owners: HashMap::new(),
            journal,
            next_unique_id: 1,
            next_sequence: 1,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn cart(&self) -> &CartProjection {
        &self.cart
    }

    pub fn journal(&self) -> &dyn SelectionJournal {
        self.journal.as_ref()
    }

    /// Replace the preview item of a room's category.
    ///
    /// Returns `false` and changes nothing if the item is not part of that
    /// category's catalog list.
    pub fn set_current_selection(
        &mut self,
        room_type: RoomType,
        category_id: CategoryId,
        item: &CatalogItem,
    ) -> bool {
        let belongs = self
            .catalog
            .category(room_type, category_id)
            .is_some_and(|category| category.contains(item));
        if !belongs {
            warn!(
                room = %room_type,
                category = %category_id,
                item = item.id,
                "ignoring preview of item outside its category"
            );
            return false;
        }

        self.commit(
            room_type,
            SelectionChange::CurrentSelected {
                category_id,
                item: item.clone(),
            },
        );
        true
    }

    /// Add an item to a room's chosen list, and so to the cart.
    ///
    /// The same item may be added any number of times; each add gets a
    /// fresh [`UniqueId`]. Returns `None` if the item is not part of that
    /// category's catalog list.
    pub fn add_to_chosen(
        &mut self,
        room_type: RoomType,
        category_id: CategoryId,
        item: &CatalogItem,
    ) -> Option<UniqueId> {
        let belongs = self
            .catalog
            .category(room_type, category_id)
            .is_some_and(|category| category.contains(item));
        if !belongs {
            warn!(
                room = %room_type,
                category = %category_id,
                item = item.id,
                "ignoring add of item outside its category"
            );
            return None;
        }

        let unique_id = UniqueId::new(self.next_unique_id);
        self.next_unique_id += 1;

        self.commit(
            room_type,
            SelectionChange::ItemChosen {
                item: ChosenItem {
                    unique_id,
                    room_type,
                    category_id,
                    item: item.clone(),
                },
            },
        );
        self.owners.insert(unique_id, (room_type, category_id));
        Some(unique_id)
    }

    /// Remove one chosen item from whichever room owns it.
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn remove_from_chosen(&mut self, unique_id: UniqueId) -> Option<ChosenItem> {
        let (room_type, category_id) = *self.owners.get(&unique_id)?;
        let removed = self
            .state
            .category(room_type, category_id)?
            .chosen
            .iter()
            .find(|chosen| chosen.unique_id == unique_id)
            .cloned()?;

        self.commit(
            room_type,
            SelectionChange::ItemRemoved {
                category_id,
                unique_id,
            },
        );
        self.owners.remove(&unique_id);
        Some(removed)
    }

    /// Replace a room's chosen items with the referenced catalog items.
    ///
    /// Only `room_type` is cleared. References that do not resolve against
    /// the catalog are skipped and reported.
    pub fn load_preset(&mut self, room_type: RoomType, items: &[FurnitureRef]) -> PresetReport {
        let mut report = PresetReport {
            room_type,
            added: Vec::new(),
            skipped: Vec::new(),
        };

        let Some(room) = self.state.room(room_type) else {
            warn!(room = %room_type, "preset targets a room missing from the catalog");
            report.skipped = items.to_vec();
            return report;
        };

        let removed: Vec<UniqueId> = room.chosen_items().map(|chosen| chosen.unique_id).collect();
        for unique_id in &removed {
            self.owners.remove(unique_id);
        }
        self.commit(room_type, SelectionChange::RoomCleared { removed });

        let catalog = Arc::clone(&self.catalog);
        for reference in items {
            match catalog.item(room_type, reference.category_id, reference.item_id) {
                Some(item) => {
                    if let Some(unique_id) = self.add_to_chosen(room_type, reference.category_id, item) {
                        report.added.push(unique_id);
                    }
                }
                None => {
                    debug!(
                        room = %room_type,
                        category = %reference.category_id,
                        item = reference.item_id,
                        "skipping unresolved preset reference"
                    );
                    report.skipped.push(*reference);
                }
            }
        }

        info!(
            room = %room_type,
            added = report.added.len(),
            skipped = report.skipped.len(),
            "preset loaded"
        );
        report
    }

    /// Load a furnished-room design into its room type
    pub fn load_furnished_room(&mut self, preset: &FurnishedRoom) -> PresetReport {
        self.load_preset(preset.room_type, &preset.furniture)
    }

    /// Chosen items of one room and category, in insertion order
    pub fn chosen(&self, room_type: RoomType, category_id: CategoryId) -> &[ChosenItem] {
        self.state
            .category(room_type, category_id)
            .map(|slot| slot.chosen.as_slice())
            .unwrap_or_default()
    }

    /// Item being previewed; `None` means nothing to preview
    pub fn current_selection(&self, room_type: RoomType, category_id: CategoryId) -> Option<&CatalogItem> {
        self.state.category(room_type, category_id)?.current.as_ref()
    }

    pub fn room_state(&self, room_type: RoomType) -> Option<&RoomSelection> {
        self.state.room(room_type)
    }

    /// Room and category owning a chosen item
    pub fn owner_of(&self, unique_id: UniqueId) -> Option<(RoomType, CategoryId)> {
        self.owners.get(&unique_id).copied()
    }

    /// Number of chosen items across all rooms
    pub fn chosen_count(&self) -> usize {
        self.owners.len()
    }

    /// Cart entries across all rooms
    pub fn list_entries(&self) -> Vec<CartEntry> {
        self.cart.list_entries()
    }

    /// Cart total across all rooms
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Furniture to hand to the 3D preview
    pub fn render_scene(&self, scope: RenderScope) -> RenderScene {
        render_scene(&self.state, scope)
    }

    fn commit(&mut self, room_type: RoomType, change: SelectionChange) {
        let event = SelectionEvent::new(self.next_sequence, room_type, change);
        self.next_sequence += 1;

        self.state.apply(&event);
        self.cart.apply_event(&event);
        debug!(
            sequence = event.sequence(),
            room = %room_type,
            kind = event.kind(),
            cart_entries = self.cart.len(),
            "selection event committed"
        );
        self.journal.append(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::tests::sample_catalog;
    use crate::storage::NullJournal;

    fn item(store: &SelectionStore, room: RoomType, category: CategoryId, id: u32) -> CatalogItem {
        store.catalog().item(room, category, id).unwrap().clone()
    }

    #[test]
    fn test_add_and_remove_update_cart() {
        let mut store = SelectionStore::new(sample_catalog());
        let sofa = item(&store, RoomType::LivingRoom, CategoryId::Sofas, 5);
        let chair = item(&store, RoomType::LivingRoom, CategoryId::Chairs, 3);

        let sofa_id = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &sofa).unwrap();
        let chair_id = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Chairs, &chair).unwrap();
        assert_eq!(store.total().to_string(), "629.99");
        assert_eq!(store.list_entries().len(), 2);

        let removed = store.remove_from_chosen(chair_id).unwrap();
        assert_eq!(removed.item, chair);
        assert_eq!(store.total().to_string(), "540.00");
        assert!(store.chosen(RoomType::LivingRoom, CategoryId::Chairs).is_empty());
        assert_eq!(store.owner_of(sofa_id), Some((RoomType::LivingRoom, CategoryId::Sofas)));
        assert_eq!(store.owner_of(chair_id), None);
    }

    #[test]
    fn test_same_item_twice() {
        let mut store = SelectionStore::new(sample_catalog());
        let chair = item(&store, RoomType::LivingRoom, CategoryId::Chairs, 3);

        let a = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Chairs, &chair).unwrap();
        let b = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Chairs, &chair).unwrap();
        assert_ne!(a, b);

        let entries = store.list_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].item, entries[1].item);
        assert_ne!(entries[0].unique_id, entries[1].unique_id);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = SelectionStore::new(sample_catalog());
        let sofa = item(&store, RoomType::LivingRoom, CategoryId::Sofas, 5);
        store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &sofa).unwrap();
        let events = store.journal().len();

        assert!(store.remove_from_chosen(UniqueId::new(999)).is_none());
        assert_eq!(store.chosen_count(), 1);
        assert_eq!(store.journal().len(), events);
    }

    #[test]
    fn test_unique_ids_never_reused() {
        let mut store = SelectionStore::new(sample_catalog());
        let sofa = item(&store, RoomType::LivingRoom, CategoryId::Sofas, 5);

        let first = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &sofa).unwrap();
        store.remove_from_chosen(first);
        let second = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &sofa).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_remove_from_other_room() {
        let mut store = SelectionStore::new(sample_catalog());
        let living_chair = item(&store, RoomType::LivingRoom, CategoryId::Chairs, 3);
        let bedroom_chair = item(&store, RoomType::Bedroom, CategoryId::Chairs, 3);

        let living = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Chairs, &living_chair).unwrap();
        let bedroom = store.add_to_chosen(RoomType::Bedroom, CategoryId::Chairs, &bedroom_chair).unwrap();

        store.remove_from_chosen(bedroom).unwrap();
        assert!(store.chosen(RoomType::Bedroom, CategoryId::Chairs).is_empty());
        assert_eq!(store.chosen(RoomType::LivingRoom, CategoryId::Chairs)[0].unique_id, living);
    }

    #[test]
    fn test_preview_never_reaches_cart() {
        let mut store = SelectionStore::new(sample_catalog());
        let lounge = item(&store, RoomType::LivingRoom, CategoryId::Chairs, 4);

        assert_eq!(store.current_selection(RoomType::LivingRoom, CategoryId::Chairs).unwrap().id, 3);
        assert!(store.set_current_selection(RoomType::LivingRoom, CategoryId::Chairs, &lounge));
        assert_eq!(store.current_selection(RoomType::LivingRoom, CategoryId::Chairs), Some(&lounge));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_rejects_item_outside_category() {
        let mut store = SelectionStore::new(sample_catalog());
        let bed = item(&store, RoomType::Bedroom, CategoryId::Beds, 1);

        assert!(!store.set_current_selection(RoomType::LivingRoom, CategoryId::Sofas, &bed));
        assert!(store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &bed).is_none());
        assert!(store.add_to_chosen(RoomType::Office, CategoryId::Desks, &bed).is_none());
        assert!(store.journal().is_empty());
    }

    #[test]
    fn test_empty_category_has_no_preview() {
        let store = SelectionStore::new(sample_catalog());
        assert!(store.current_selection(RoomType::LivingRoom, CategoryId::Rugs).is_none());
        assert!(store.chosen(RoomType::LivingRoom, CategoryId::Rugs).is_empty());
    }

    #[test]
    fn test_load_preset_only_touches_target_room() {
        let mut store = SelectionStore::new(sample_catalog());
        let bed = item(&store, RoomType::Bedroom, CategoryId::Beds, 1);
        let chair = item(&store, RoomType::LivingRoom, CategoryId::Chairs, 4);
        let bed_id = store.add_to_chosen(RoomType::Bedroom, CategoryId::Beds, &bed).unwrap();
        let old_chair = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Chairs, &chair).unwrap();

        let report = store.load_preset(
            RoomType::LivingRoom,
            &[
                FurnitureRef::new(CategoryId::Sofas, 5),
                FurnitureRef::new(CategoryId::Chairs, 99),
                FurnitureRef::new(CategoryId::Beds, 1),
                FurnitureRef::new(CategoryId::Chairs, 3),
            ],
        );

        assert_eq!(report.added.len(), 2);
        assert_eq!(
            report.skipped,
            vec![FurnitureRef::new(CategoryId::Chairs, 99), FurnitureRef::new(CategoryId::Beds, 1)]
        );
        assert!(report.added.iter().all(|id| *id > old_chair));
        assert_eq!(store.owner_of(old_chair), None);
        assert_eq!(store.owner_of(bed_id), Some((RoomType::Bedroom, CategoryId::Beds)));
        assert_eq!(store.room_state(RoomType::LivingRoom).unwrap().chosen_count(), 2);
        assert_eq!(store.total().to_string(), "1428.99");
    }

    #[test]
    fn test_load_preset_unknown_room() {
        let mut store = SelectionStore::new(sample_catalog());
        let report = store.load_preset(RoomType::Patio, &[FurnitureRef::new(CategoryId::OutdoorTables, 1)]);
        assert!(report.added.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert!(store.journal().is_empty());
    }

    #[test]
    fn test_journal_replay_matches() {
        let mut store = SelectionStore::new(sample_catalog());
        let sofa = item(&store, RoomType::LivingRoom, CategoryId::Sofas, 5);
        let chair = item(&store, RoomType::LivingRoom, CategoryId::Chairs, 3);
        let id = store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &sofa).unwrap();
        store.add_to_chosen(RoomType::LivingRoom, CategoryId::Chairs, &chair).unwrap();
        store.set_current_selection(RoomType::LivingRoom, CategoryId::Sofas, &sofa);
        store.remove_from_chosen(id);
        store.load_preset(RoomType::Bedroom, &[FurnitureRef::new(CategoryId::Beds, 1)]);

        let catalog = Arc::new(sample_catalog());
        let events = store.journal().events();
        assert_eq!(CartProjection::rebuild(Arc::clone(&catalog), events), *store.cart());
        assert_eq!(SelectionState::replay(&catalog, events), *store.state());
    }

    #[test]
    fn test_room_events_follow_commits() {
        let mut store = SelectionStore::new(sample_catalog());
        let sofa = item(&store, RoomType::LivingRoom, CategoryId::Sofas, 5);
        let bed = item(&store, RoomType::Bedroom, CategoryId::Beds, 1);
        store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &sofa).unwrap();
        store.add_to_chosen(RoomType::Bedroom, CategoryId::Beds, &bed).unwrap();
        store.load_preset(RoomType::LivingRoom, &[FurnitureRef::new(CategoryId::Chairs, 3)]);

        let kinds: Vec<&str> = store
            .journal()
            .room_events(RoomType::LivingRoom)
            .iter()
            .map(|e| e.kind())
            .collect();
        assert_eq!(kinds, vec!["item_chosen", "room_cleared", "item_chosen"]);
        assert_eq!(store.journal().room_events(RoomType::Bedroom).len(), 1);
    }

    #[test]
    fn test_null_journal_store() {
        let mut store = SelectionStore::with_journal(Arc::new(sample_catalog()), Box::new(NullJournal));
        let sofa = item(&store, RoomType::LivingRoom, CategoryId::Sofas, 5);
        store.add_to_chosen(RoomType::LivingRoom, CategoryId::Sofas, &sofa).unwrap();
        assert_eq!(store.cart().len(), 1);
        assert!(store.journal().is_empty());
    }
}
