use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::types::chrono::Utc;
use tracing::error;

use crate::db::Database;

pub struct RootController;

impl RootController {
    pub async fn root() -> Response {
        Json(json!({
            "message": "Music Player Backend API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "artists": "/api/artists",
                "songs": "/api/songs",
                "playlists": "/api/playlists/{user_id}",
                "favorites": "/api/favorites/songs/{user_id}",
                "search": "/api/users/search?q=query",
                "billboard": "/api/billboard/top10",
                "health": "/api/health"
            }
        }))
        .into_response()
    }

    pub async fn health_check(database: &Database) -> Response {
        match database.ping().await {
            Ok(()) => Json(json!({
                "status": "ok",
                "database": "connected",
                "timestamp": Utc::now().to_rfc3339()
            }))
            .into_response(),
            Err(e) => {
                error!("Health check failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "status": "error",
                        "database": "disconnected",
                        "error": "Database unavailable"
                    })),
                )
                    .into_response()
            }
        }
    }
}
