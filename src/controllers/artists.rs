use axum::Json;
use serde_json::{Value, json};
use tracing::debug;

use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::models::artist::ArtistDetail;

pub struct ArtistController;

impl ArtistController {
    pub async fn list(database: &Database) -> ApiResult<Json<Value>> {
        let artists = database.list_artists().await?;
        debug!("Found {} artists", artists.len());
        Ok(Json(json!({ "artists": artists })))
    }

    pub async fn detail(database: &Database, artist_id: i32) -> ApiResult<Json<Value>> {
        let artist = database
            .get_artist(artist_id)
            .await?
            .ok_or(ApiError::NotFound("Artist"))?;
        let songs = database.get_artist_songs(artist_id).await?;
        debug!("Found artist {} with {} songs", artist.name, songs.len());

        let detail = ArtistDetail { artist, songs };
        Ok(Json(json!({ "artist": detail })))
    }
}
