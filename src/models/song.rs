use serde::Serialize;
use sqlx::FromRow;

use crate::utils::serialize_duration;

/// A song as it appears in lists: joined with its artist, duration rendered `M:SS`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SongListing {
    pub song_id: i32,
    pub title: String,
    pub artist: String,
    pub genre: Option<String>,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: i32,
    pub release_year: Option<i32>,
}

/// Full song record, lyrics included. `duration` stays in raw seconds.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SongDetail {
    pub song_id: i32,
    pub title: String,
    pub artist: String,
    pub genre: Option<String>,
    pub lyrics: Option<String>,
    pub duration: i32,
    pub release_year: Option<i32>,
}
