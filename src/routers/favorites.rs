// Favorites routes
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::controllers::FavoriteController;
use crate::db::Database;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::models::favorite::{ToggleFavoriteRequest, ToggleFavoriteResponse};
use serde_json::Value;

pub fn favorite_routes() -> Router<Database> {
    Router::new()
        .route("/favorites/song/toggle", post(toggle_favorite_route))
        .route("/favorites/songs/{user_id}", get(favorite_songs_route))
}

pub async fn toggle_favorite_route(
    State(database): State<Database>,
    ApiJson(request): ApiJson<ToggleFavoriteRequest>,
) -> ApiResult<Json<ToggleFavoriteResponse>> {
    FavoriteController::toggle(&database, request).await
}

pub async fn favorite_songs_route(
    State(database): State<Database>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    FavoriteController::list(&database, user_id).await
}
