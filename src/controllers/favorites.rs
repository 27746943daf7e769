use axum::Json;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::models::favorite::{ToggleFavoriteRequest, ToggleFavoriteResponse};

pub struct FavoriteController;

impl FavoriteController {
    pub async fn toggle(
        database: &Database,
        request: ToggleFavoriteRequest,
    ) -> ApiResult<Json<ToggleFavoriteResponse>> {
        let (Some(user_id), Some(song_id)) = (request.user_id, request.song_id) else {
            return Err(ApiError::BadRequest("user_id and song_id required".into()));
        };

        let is_favorited = database
            .toggle_favorite_song(user_id, song_id)
            .await
            .map_err(|e| ApiError::missing_reference(e, "User or song"))?;

        let response = ToggleFavoriteResponse::new(is_favorited);
        info!(
            "Favorite {:?} - user: {}, song: {}",
            response.action, user_id, song_id
        );
        Ok(Json(response))
    }

    pub async fn list(database: &Database, user_id: i32) -> ApiResult<Json<Value>> {
        let favorites = database.list_favorite_songs(user_id).await?;
        debug!("Found {} favorite songs for user {}", favorites.len(), user_id);
        Ok(Json(json!({ "favorites": favorites })))
    }
}
