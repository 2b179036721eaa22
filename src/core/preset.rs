//! Pre-designed furnished rooms that can be loaded into a room's selection

use crate::core::catalog::{CategoryId, RoomType};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Reference to a catalog item by category and item id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureRef {
    pub category_id: CategoryId,
    pub item_id: u32,
}

impl FurnitureRef {
    pub fn new(category_id: CategoryId, item_id: u32) -> Self {
        Self {
            category_id,
            item_id,
        }
    }
}

/// A curated room design, e.g. "Scandinavian Living Room"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnishedRoom {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub style: String,
    pub room_type: RoomType,
    #[serde(default)]
    pub furniture: Vec<FurnitureRef>,
}

/// Preset as written on disk; category ids are checked after parsing so
/// that one unknown category drops a single reference, not the file.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFurnishedRoom {
    id: u32,
    name: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    style: String,
    room_type: RoomType,
    #[serde(default)]
    furniture: Vec<RawFurnitureRef>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFurnitureRef {
    category_id: String,
    item_id: u32,
}

impl From<RawFurnishedRoom> for FurnishedRoom {
    fn from(raw: RawFurnishedRoom) -> Self {
        let furniture = raw
            .furniture
            .into_iter()
            .filter_map(|r| match r.category_id.parse() {
                Ok(category_id) => Some(FurnitureRef::new(category_id, r.item_id)),
                Err(_) => {
                    warn!(
                        preset = raw.id,
                        category = %r.category_id,
                        item = r.item_id,
                        "skipping reference to unknown category"
                    );
                    None
                }
            })
            .collect();

        Self {
            id: raw.id,
            name: raw.name,
            image: raw.image,
            style: raw.style,
            room_type: raw.room_type,
            furniture,
        }
    }
}

impl FurnishedRoom {
    /// Parse a JSON array of presets. Preset ids must be unique.
    pub fn from_json_str(json: &str) -> Result<Vec<FurnishedRoom>> {
        let raw: Vec<RawFurnishedRoom> = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        for preset in &raw {
            if !seen.insert(preset.id) {
                return Err(Error::Preset(format!("preset id {} declared twice", preset.id)));
            }
        }
        Ok(raw.into_iter().map(FurnishedRoom::from).collect())
    }

    /// Load a JSON array of presets from disk
    pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<FurnishedRoom>> {
        let path = path.as_ref();
        let presets = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), presets = presets.len(), "furnished rooms loaded");
        Ok(presets)
    }

    /// Find a preset by id
    pub fn find(presets: &[FurnishedRoom], id: u32) -> Result<&FurnishedRoom> {
        presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::Preset(format!("no furnished room with id {id}")))
    }
}
