//! Like/dislike ratings of furnished-room designs

use serde::Serialize;

/// How the user rated a furnished room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    Liked,
    Disliked,
    Unrated,
}

/// Liked and disliked room ids; a room is never in both lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRatings {
    liked: Vec<u32>,
    disliked: Vec<u32>,
}

impl RoomRatings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn like(&mut self, room_id: u32) {
        if !self.liked.contains(&room_id) {
            self.liked.push(room_id);
        }
        self.disliked.retain(|id| *id != room_id);
    }

    pub fn dislike(&mut self, room_id: u32) {
        if !self.disliked.contains(&room_id) {
            self.disliked.push(room_id);
        }
        self.liked.retain(|id| *id != room_id);
    }

    pub fn rating(&self, room_id: u32) -> Rating {
        if self.liked.contains(&room_id) {
            Rating::Liked
        } else if self.disliked.contains(&room_id) {
            Rating::Disliked
        } else {
            Rating::Unrated
        }
    }

    /// Liked ids in the order they were liked
    pub fn liked(&self) -> &[u32] {
        &self.liked
    }

    pub fn disliked(&self) -> &[u32] {
        &self.disliked
    }
}
