use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::controllers::RootController;
use crate::db::Database;

pub async fn root_route(State(_database): State<Database>) -> impl IntoResponse {
    RootController::root().await
}

pub async fn health_check_route(State(database): State<Database>) -> impl IntoResponse {
    RootController::health_check(&database).await
}

pub async fn fallback_route() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}

pub async fn method_not_allowed_route() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
