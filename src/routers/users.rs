// User search & public profile routes
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde_json::Value;

use crate::controllers::UserController;
use crate::db::Database;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::models::user::{SearchQuery, UpdateProfileRequest};

pub fn user_routes() -> Router<Database> {
    Router::new()
        .route("/users/search", get(search_users_route))
        .route(
            "/users/{user_id}/profile",
            get(user_profile_route).put(update_profile_route),
        )
        .route("/users/{user_id}/playlists", get(user_playlists_route))
}

pub async fn search_users_route(
    State(database): State<Database>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Value>> {
    UserController::search(&database, &query.q).await
}

pub async fn user_profile_route(
    State(database): State<Database>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    UserController::profile(&database, user_id).await
}

pub async fn user_playlists_route(
    State(database): State<Database>,
    ApiPath(user_id): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    UserController::public_playlists(&database, user_id).await
}

pub async fn update_profile_route(
    State(database): State<Database>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateProfileRequest>,
) -> ApiResult<Json<Value>> {
    UserController::update_profile(&database, user_id, request).await
}
