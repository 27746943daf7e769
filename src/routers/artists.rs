// Artist routes
use axum::{Json, Router, extract::State, routing::get};
use serde_json::Value;

use crate::controllers::ArtistController;
use crate::db::Database;
use crate::error::ApiResult;
use crate::extract::ApiPath;

pub fn artist_routes() -> Router<Database> {
    Router::new()
        .route("/artists", get(artists_route))
        .route("/artist/{artist_id}", get(artist_detail_route))
}

pub async fn artists_route(State(database): State<Database>) -> ApiResult<Json<Value>> {
    ArtistController::list(&database).await
}

pub async fn artist_detail_route(
    State(database): State<Database>,
    ApiPath(artist_id): ApiPath<i32>,
) -> ApiResult<Json<Value>> {
    ArtistController::detail(&database, artist_id).await
}
