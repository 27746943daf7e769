use axum::Json;
use serde_json::{Value, json};
use tracing::debug;

use crate::db::Database;
use crate::error::{ApiError, ApiResult};

pub struct SongController;

impl SongController {
    pub async fn list(database: &Database) -> ApiResult<Json<Value>> {
        let songs = database.list_songs().await?;
        debug!("Found {} songs", songs.len());
        Ok(Json(json!({ "songs": songs })))
    }

    pub async fn detail(database: &Database, song_id: i32) -> ApiResult<Json<Value>> {
        let song = database
            .get_song(song_id)
            .await?
            .ok_or(ApiError::NotFound("Song"))?;
        Ok(Json(json!({ "song": song })))
    }
}
