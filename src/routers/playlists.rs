// Playlist routes
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde_json::Value;

use crate::controllers::PlaylistController;
use crate::db::Database;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::models::playlist::{CreatePlaylistRequest, DeletePlaylistRequest, PlaylistSongRequest};

pub fn playlist_routes() -> Router<Database> {
    Router::new()
        .route("/playlists/{user_id}", get(playlists_route))
        .route("/playlist", post(create_playlist_route))
        .route("/playlist/{playlist_id}", get(playlist_detail_route))
        .route("/playlist/song/add", post(add_playlist_song_route))
        .route("/playlist/song/remove", post(remove_playlist_song_route))
        .route("/playlist/delete", post(delete_playlist_route))
}

pub async fn playlists_route(
    State(database): State<Database>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    PlaylistController::list(&database, user_id).await
}

pub async fn playlist_detail_route(
    State(database): State<Database>,
    ApiPath(playlist_id): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    PlaylistController::detail(&database, playlist_id).await
}

pub async fn create_playlist_route(
    State(database): State<Database>,
    ApiJson(request): ApiJson<CreatePlaylistRequest>,
) -> ApiResult<Json<Value>> {
    PlaylistController::create(&database, request).await
}

pub async fn add_playlist_song_route(
    State(database): State<Database>,
    ApiJson(request): ApiJson<PlaylistSongRequest>,
) -> ApiResult<Json<Value>> {
    PlaylistController::add_song(&database, request).await
}

pub async fn remove_playlist_song_route(
    State(database): State<Database>,
    ApiJson(request): ApiJson<PlaylistSongRequest>,
) -> ApiResult<Json<Value>> {
    PlaylistController::remove_song(&database, request).await
}

pub async fn delete_playlist_route(
    State(database): State<Database>,
    ApiJson(request): ApiJson<DeletePlaylistRequest>,
) -> ApiResult<Json<Value>> {
    PlaylistController::delete(&database, request).await
}
