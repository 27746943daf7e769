use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

use crate::models::song::SongListing;

pub const DEFAULT_PLAYLIST_COLOR: &str = "#a855f7";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Playlist {
    pub playlist_id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub color_hex: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistDetail {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub songs: Vec<SongListing>,
}

/// Playlist summary shown on someone's public profile.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublicPlaylist {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color_hex: Option<String>,
}

/// Validated insert for a new playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlaylist {
    pub user_id: i32,
    pub name: String,
    pub description: String,
    pub color_hex: String,
}

impl CreatePlaylistRequest {
    /// Presence check only: a user id and a non-blank name. Optional fields get their defaults.
    pub fn into_new_playlist(self) -> Option<NewPlaylist> {
        let user_id = self.user_id?;
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        Some(NewPlaylist {
            user_id,
            name,
            description: self.description.unwrap_or_default(),
            color_hex: self
                .color_hex
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_PLAYLIST_COLOR.to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaylistSongRequest {
    pub playlist_id: Option<i32>,
    pub song_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct DeletePlaylistRequest {
    pub playlist_id: Option<i32>,
}
