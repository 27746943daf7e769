use axum::{Json, Router, extract::State, routing::get};
use serde_json::Value;

use crate::controllers::BillboardController;
use crate::db::Database;
use crate::error::ApiResult;

pub fn billboard_routes() -> Router<Database> {
    Router::new().route("/billboard/top10", get(billboard_top10_route))
}

pub async fn billboard_top10_route(State(database): State<Database>) -> ApiResult<Json<Value>> {
    BillboardController::top10(&database).await
}
