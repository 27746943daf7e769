use axum::Json;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::models::playlist::{
    CreatePlaylistRequest, DeletePlaylistRequest, PlaylistDetail, PlaylistSongRequest,
};

pub struct PlaylistController;

fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

impl PlaylistController {
    pub async fn list(database: &Database, user_id: i32) -> ApiResult<Json<Value>> {
        let playlists = database.list_playlists(user_id).await?;
        debug!("Found {} playlists for user {}", playlists.len(), user_id);
        Ok(Json(json!({ "playlists": playlists })))
    }

    pub async fn detail(database: &Database, playlist_id: i32) -> ApiResult<Json<Value>> {
        let playlist = database
            .get_playlist(playlist_id)
            .await?
            .ok_or(ApiError::NotFound("Playlist"))?;
        let songs = database.get_playlist_songs(playlist_id).await?;
        debug!("Found playlist {} with {} songs", playlist.name, songs.len());

        let detail = PlaylistDetail { playlist, songs };
        Ok(Json(json!({ "playlist": detail })))
    }

    pub async fn create(
        database: &Database,
        request: CreatePlaylistRequest,
    ) -> ApiResult<Json<Value>> {
        let playlist = request
            .into_new_playlist()
            .ok_or_else(|| ApiError::BadRequest("user_id and name required".into()))?;

        let playlist_id = database
            .create_playlist(&playlist)
            .await
            .map_err(|e| ApiError::missing_reference(e, "User"))?;
        info!(
            "Created playlist {} ({}) for user {}",
            playlist_id, playlist.name, playlist.user_id
        );

        Ok(Json(json!({ "success": true, "playlist_id": playlist_id })))
    }

    pub async fn add_song(
        database: &Database,
        request: PlaylistSongRequest,
    ) -> ApiResult<Json<Value>> {
        let (playlist_id, song_id) = require_pair(&request)?;
        database
            .add_song_to_playlist(playlist_id, song_id)
            .await
            .map_err(|e| ApiError::missing_reference(e, "Playlist or song"))?;
        info!("Added song {} to playlist {}", song_id, playlist_id);
        Ok(success())
    }

    pub async fn remove_song(
        database: &Database,
        request: PlaylistSongRequest,
    ) -> ApiResult<Json<Value>> {
        let (playlist_id, song_id) = require_pair(&request)?;
        let removed = database.remove_song_from_playlist(playlist_id, song_id).await?;
        info!(
            "Removed song {} from playlist {} ({} rows)",
            song_id, playlist_id, removed
        );
        Ok(success())
    }

    pub async fn delete(
        database: &Database,
        request: DeletePlaylistRequest,
    ) -> ApiResult<Json<Value>> {
        let playlist_id = request
            .playlist_id
            .ok_or_else(|| ApiError::BadRequest("playlist_id required".into()))?;
        let deleted = database.delete_playlist(playlist_id).await?;
        if deleted == 0 {
            debug!("Playlist {} did not exist, nothing deleted", playlist_id);
        } else {
            info!("Deleted playlist {}", playlist_id);
        }
        Ok(success())
    }
}

fn require_pair(request: &PlaylistSongRequest) -> ApiResult<(i32, i32)> {
    match (request.playlist_id, request.song_id) {
        (Some(playlist_id), Some(song_id)) => Ok((playlist_id, song_id)),
        _ => Err(ApiError::BadRequest("playlist_id and song_id required".into())),
    }
}
