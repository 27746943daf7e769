use serde::Serialize;
use sqlx::FromRow;

use crate::utils::serialize_duration;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Artist {
    pub artist_id: i32,
    pub name: String,
}

/// Song row under an artist; the artist name would be redundant here.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistSong {
    pub song_id: i32,
    pub title: String,
    pub genre: Option<String>,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: i32,
    pub release_year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub songs: Vec<ArtistSong>,
}
