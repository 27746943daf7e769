use axum::Json;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::models::user::{ProfileUpdate, UpdateProfileRequest, UserProfile};

/// Queries shorter than this return no users without touching the database.
pub const MIN_SEARCH_LEN: usize = 2;

pub struct UserController;

impl UserController {
    pub async fn search(database: &Database, query: &str) -> ApiResult<Json<Value>> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Ok(Json(json!({ "users": [] })));
        }

        let users = database.search_users(query).await?;
        debug!("User search {:?} matched {} users", query, users.len());
        Ok(Json(json!({ "users": users })))
    }

    pub async fn profile(database: &Database, user_id: i32) -> ApiResult<Json<Value>> {
        let user = database
            .get_user(user_id)
            .await?
            .ok_or(ApiError::NotFound("User"))?;
        let playlist_count = database.count_user_playlists(user_id).await?;
        let total_songs = database.count_user_distinct_songs(user_id).await?;

        let profile = UserProfile {
            user,
            playlist_count,
            total_songs,
        };
        Ok(Json(json!({ "user": profile })))
    }

    pub async fn public_playlists(database: &Database, user_id: i32) -> ApiResult<Json<Value>> {
        let playlists = database.list_public_playlists(user_id).await?;
        Ok(Json(json!({ "playlists": playlists })))
    }

    pub async fn update_profile(
        database: &Database,
        user_id: i32,
        request: UpdateProfileRequest,
    ) -> ApiResult<Json<Value>> {
        let username = request
            .new_username()
            .ok_or_else(|| ApiError::BadRequest("username required".into()))?;
        if let Some(bio) = &request.bio {
            debug!("Ignoring bio ({} chars) for user {}", bio.len(), user_id);
        }

        match database.update_username(user_id, username).await? {
            ProfileUpdate::UsernameTaken => {
                Err(ApiError::Conflict("Username already taken".into()))
            }
            ProfileUpdate::Updated => {
                info!("Profile updated for user {}: username={}", user_id, username);
                Ok(Json(json!({
                    "success": true,
                    "message": "Profile updated successfully"
                })))
            }
        }
    }
}
