use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

use crate::utils::serialize_duration;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FavoriteSong {
    pub song_id: i32,
    pub title: String,
    pub artist: String,
    pub genre: Option<String>,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: i32,
    pub release_year: Option<i32>,
    pub favorited_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteRequest {
    pub user_id: Option<i32>,
    pub song_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Added,
    Removed,
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteResponse {
    pub success: bool,
    pub action: FavoriteAction,
    pub is_favorited: bool,
}

impl ToggleFavoriteResponse {
    pub fn new(is_favorited: bool) -> Self {
        let action = if is_favorited {
            FavoriteAction::Added
        } else {
            FavoriteAction::Removed
        };
        Self {
            success: true,
            action,
            is_favorited,
        }
    }
}
