// Song routes
use axum::{Json, Router, extract::State, routing::get};
use serde_json::Value;

use crate::controllers::SongController;
use crate::db::Database;
use crate::error::ApiResult;
use crate::extract::ApiPath;

pub fn song_routes() -> Router<Database> {
    Router::new()
        .route("/songs", get(songs_route))
        .route("/song/{song_id}", get(song_detail_route))
}

pub async fn songs_route(State(database): State<Database>) -> ApiResult<Json<Value>> {
    SongController::list(&database).await
}

pub async fn song_detail_route(
    State(database): State<Database>,
    ApiPath(song_id): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    SongController::detail(&database, song_id).await
}
