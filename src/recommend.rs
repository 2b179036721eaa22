//! Recommendations for the design panel of a room

use crate::core::catalog::{CatalogItem, CategoryId, RoomType};
use crate::store::SelectionStore;
use serde::Serialize;

/// A suggested catalog item, tagged with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(flatten)]
    pub item: CatalogItem,
}

/// Anchor pieces of each room are listed first; everything else ranks 4.
pub fn category_priority(room_type: RoomType, category_id: CategoryId) -> u8 {
    use CategoryId::*;

    let anchors: [CategoryId; 3] = match room_type {
        RoomType::LivingRoom => [Sofas, Chairs, CoffeeTables],
        RoomType::Bedroom => [Beds, Nightstands, Dressers],
        RoomType::DiningRoom => [DiningTables, DiningChairs, Buffets],
        RoomType::Office => [Desks, OfficeChairs, Bookcases],
        RoomType::Bathroom => [Vanities, BathroomStorage, BathroomFixtures],
        RoomType::Kitchen => [KitchenIslands, BarStools, KitchenStorage],
        RoomType::Patio => [OutdoorSeating, OutdoorTables, OutdoorLighting],
    };

    anchors
        .iter()
        .position(|anchor| *anchor == category_id)
        .map_or(4, |rank| rank as u8 + 1)
}

/// Up to `per_category` items per category not already chosen in the room,
/// anchor categories first, otherwise in catalog order.
pub fn recommend(store: &SelectionStore, room_type: RoomType, per_category: usize) -> Vec<Recommendation> {
    let Some(room) = store.catalog().room(room_type) else {
        return Vec::new();
    };

    let mut recommendations: Vec<Recommendation> = room
        .categories
        .iter()
        .flat_map(|category| {
            let chosen = store.chosen(room_type, category.id);
            category
                .items
                .iter()
                .filter(move |item| !chosen.iter().any(|c| c.item.id == item.id))
                .take(per_category)
                .map(move |item| Recommendation {
                    category_id: category.id,
                    category_name: category.name.clone(),
                    item: item.clone(),
                })
        })
        .collect();

    recommendations.sort_by_key(|r| category_priority(room_type, r.category_id));
    recommendations
}
