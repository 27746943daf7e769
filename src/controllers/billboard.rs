use axum::Json;
use serde_json::{Value, json};
use tracing::debug;

use crate::db::Database;
use crate::error::ApiResult;

pub struct BillboardController;

impl BillboardController {
    pub async fn top10(database: &Database) -> ApiResult<Json<Value>> {
        let songs = database.billboard_top().await?;
        debug!("Billboard top 10 loaded: {} songs", songs.len());
        Ok(Json(json!({ "songs": songs })))
    }
}
