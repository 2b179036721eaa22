//! Scripted sessions: a JSON list of user actions replayed against a store

use crate::core::catalog::{CategoryId, RoomType};
use crate::core::preset::FurnishedRoom;
use crate::core::selection::UniqueId;
use crate::error::Result;
use crate::ratings::{Rating, RoomRatings};
use crate::store::{PresetReport, SelectionStore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// One user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ScriptAction {
    /// Preview an item without adding it
    #[serde(rename_all = "camelCase")]
    Select {
        room: RoomType,
        category: CategoryId,
        item_id: u32,
    },
    /// Add an item to the room's chosen list
    #[serde(rename_all = "camelCase")]
    Add {
        room: RoomType,
        category: CategoryId,
        item_id: u32,
    },
    /// Remove a chosen item by the id it was given when added
    #[serde(rename_all = "camelCase")]
    Remove { unique_id: UniqueId },
    /// Load a furnished room by id
    Preset { id: u32 },
    /// Like a furnished room design
    Like { id: u32 },
    /// Dislike a furnished room design
    Dislike { id: u32 },
}

impl ScriptAction {
    /// Parse a JSON array of actions
    pub fn parse_all(json: &str) -> Result<Vec<ScriptAction>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptAction>> {
        Self::parse_all(&std::fs::read_to_string(path)?)
    }
}

/// What an action did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum StepOutcome {
    Selected,
    #[serde(rename_all = "camelCase")]
    Added { unique_id: UniqueId },
    #[serde(rename_all = "camelCase")]
    Removed { unique_id: UniqueId },
    PresetLoaded { report: PresetReport },
    Rated { rating: Rating },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptStep {
    pub action: ScriptAction,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Apply actions in order. Actions that cannot be applied are skipped.
pub fn run_script(
    store: &mut SelectionStore,
    ratings: &mut RoomRatings,
    actions: &[ScriptAction],
    presets: &[FurnishedRoom],
) -> Vec<ScriptStep> {
    actions
        .iter()
        .map(|action| {
            let outcome = apply_action(store, ratings, action, presets);
            if let StepOutcome::Skipped { reason } = &outcome {
                warn!(?action, %reason, "script action skipped");
            }
            ScriptStep {
                action: action.clone(),
                outcome,
            }
        })
        .collect()
}

fn apply_action(
    store: &mut SelectionStore,
    ratings: &mut RoomRatings,
    action: &ScriptAction,
    presets: &[FurnishedRoom],
) -> StepOutcome {
    match *action {
        ScriptAction::Select { room, category, item_id } => {
            let Some(item) = store.catalog().item(room, category, item_id).cloned() else {
                return unknown_item(room, category, item_id);
            };
            if store.set_current_selection(room, category, &item) {
                StepOutcome::Selected
            } else {
                unknown_item(room, category, item_id)
            }
        }
        ScriptAction::Add { room, category, item_id } => {
            let Some(item) = store.catalog().item(room, category, item_id).cloned() else {
                return unknown_item(room, category, item_id);
            };
            match store.add_to_chosen(room, category, &item) {
                Some(unique_id) => StepOutcome::Added { unique_id },
                None => unknown_item(room, category, item_id),
            }
        }
        ScriptAction::Remove { unique_id } => match store.remove_from_chosen(unique_id) {
            Some(_) => StepOutcome::Removed { unique_id },
            None => StepOutcome::Skipped {
                reason: format!("no chosen item {unique_id}"),
            },
        },
        ScriptAction::Preset { id } => match FurnishedRoom::find(presets, id) {
            Ok(preset) => StepOutcome::PresetLoaded {
                report: store.load_furnished_room(preset),
            },
            Err(e) => StepOutcome::Skipped { reason: e.to_string() },
        },
        ScriptAction::Like { id } | ScriptAction::Dislike { id } => {
            if let Err(e) = FurnishedRoom::find(presets, id) {
                return StepOutcome::Skipped { reason: e.to_string() };
            }
            if matches!(action, ScriptAction::Like { .. }) {
                ratings.like(id);
            } else {
                ratings.dislike(id);
            }
            StepOutcome::Rated {
                rating: ratings.rating(id),
            }
        }
    }
}

fn unknown_item(room: RoomType, category: CategoryId, item_id: u32) -> StepOutcome {
    StepOutcome::Skipped {
        reason: format!("no item {item_id} in {room}/{category}"),
    }
}
