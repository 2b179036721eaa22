//! Render projection: what the 3D room preview should draw, per category
//!
//! The preview draws by category, not by room. Chosen items from every
//! contributing room are merged per category; a category with nothing
//! chosen falls back to its current preview item.

use crate::core::catalog::{CatalogItem, CategoryId, RoomType};
use crate::core::selection::{RoomSelection, SelectionState, UniqueId};
use serde::Serialize;

/// Which rooms contribute to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScope {
    /// Every room's furniture in one combined scene. Previews of the room
    /// being edited take precedence over other rooms' previews.
    AllRooms { active: RoomType },
    /// Only the given room
    Room(RoomType),
}

/// Why a slot's items are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderSource {
    Chosen,
    Preview,
}

/// One drawable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    /// Set for chosen items, absent for previews
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<UniqueId>,
    pub room_type: RoomType,
    #[serde(flatten)]
    pub item: CatalogItem,
}

/// Items drawn for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSlot {
    pub category_id: CategoryId,
    pub source: RenderSource,
    pub items: Vec<RenderItem>,
}

/// Scene handed to the renderer, categories in first-seen catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderScene {
    pub slots: Vec<RenderSlot>,
}

impl RenderScene {
    pub fn slot(&self, category_id: CategoryId) -> Option<&RenderSlot> {
        self.slots.iter().find(|slot| slot.category_id == category_id)
    }

    /// Items drawn for a category, empty if the category is not in the scene
    pub fn items(&self, category_id: CategoryId) -> &[RenderItem] {
        self.slot(category_id)
            .map(|slot| slot.items.as_slice())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Build the scene for the given scope
pub fn render_scene(state: &SelectionState, scope: RenderScope) -> RenderScene {
    let (active, combined) = match scope {
        RenderScope::AllRooms { active } => (active, true),
        RenderScope::Room(room_type) => (room_type, false),
    };
    let rooms: Vec<&RoomSelection> = state
        .rooms()
        .iter()
        .filter(|room| combined || room.room_type == active)
        .collect();

    let mut chosen: Vec<(CategoryId, Vec<RenderItem>)> = Vec::new();
    for room in &rooms {
        for slot in &room.categories {
            let position = match chosen.iter().position(|(id, _)| *id == slot.category_id) {
                Some(position) => position,
                None => {
                    chosen.push((slot.category_id, Vec::new()));
                    chosen.len() - 1
                }
            };
            chosen[position].1.extend(slot.chosen.iter().map(|c| RenderItem {
                unique_id: Some(c.unique_id),
                room_type: c.room_type,
                item: c.item.clone(),
            }));
        }
    }

    // Active room first, then the rest in catalog order
    let preview_order = rooms
        .iter()
        .filter(|room| room.room_type == active)
        .chain(rooms.iter().filter(|room| room.room_type != active));

    let mut previews: Vec<(CategoryId, RenderItem)> = Vec::new();
    for room in preview_order {
        for slot in &room.categories {
            let Some(current) = &slot.current else {
                continue;
            };
            if !previews.iter().any(|(id, _)| *id == slot.category_id) {
                previews.push((
                    slot.category_id,
                    RenderItem {
                        unique_id: None,
                        room_type: room.room_type,
                        item: current.clone(),
                    },
                ));
            }
        }
    }

    let slots = chosen
        .into_iter()
        .filter_map(|(category_id, items)| {
            if !items.is_empty() {
                return Some(RenderSlot {
                    category_id,
                    source: RenderSource::Chosen,
                    items,
                });
            }
            previews
                .iter()
                .find(|(id, _)| *id == category_id)
                .map(|(_, preview)| RenderSlot {
                    category_id,
                    source: RenderSource::Preview,
                    items: vec![preview.clone()],
                })
        })
        .collect();

    RenderScene { slots }
}
