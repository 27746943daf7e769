pub mod artists;
pub mod billboard;
pub mod favorites;
pub mod playlists;
pub mod root;
pub mod songs;
pub mod users;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use artists::artist_routes;
pub use billboard::billboard_routes;
pub use favorites::favorite_routes;
pub use playlists::playlist_routes;
pub use root::{fallback_route, health_check_route, method_not_allowed_route, root_route};
pub use songs::song_routes;
pub use users::user_routes;

use crate::db::Database;

/// Every `/api/*` route, still waiting for its `Database` state.
pub fn api_routes() -> Router<Database> {
    Router::new()
        .route("/health", get(health_check_route))
        .merge(favorite_routes())
        .merge(artist_routes())
        .merge(song_routes())
        .merge(playlist_routes())
        .merge(user_routes())
        .merge(billboard_routes())
        .method_not_allowed_fallback(method_not_allowed_route)
}

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

pub fn build_router(database: Database, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root_route))
        .nest("/api", api_routes())
        .method_not_allowed_fallback(method_not_allowed_route)
        .fallback(fallback_route)
        // Middleware
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{Value, json};
    use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
    use std::time::Duration;
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:5173";

    // Nothing listens on port 1, so any route that reaches the pool fails fast.
    fn test_app() -> Router {
        let options = MySqlConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("nobody")
            .database("music_player_db");
        let pool = MySqlPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy_with(options);
        build_router(Database::from_pool(pool), &[ORIGIN.to_string()])
    }

    async fn send(request: Request<Body>) -> Response {
        test_app().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let response = send(get_request("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Music Player Backend API");
        assert_eq!(body["endpoints"]["billboard"], "/api/billboard/top10");
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let response = send(get_request("/api/does-not-exist")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({ "error": "Endpoint not found" }));
    }

    #[tokio::test]
    async fn wrong_method_is_json_405() {
        for (method, uri) in [
            (Method::GET, "/api/playlist/delete"),
            (Method::DELETE, "/api/songs"),
            (Method::POST, "/"),
        ] {
            let response = send(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
            assert_eq!(json_body(response).await, json!({ "error": "Method not allowed" }));
        }
    }

    #[tokio::test]
    async fn short_search_skips_the_database() {
        for uri in ["/api/users/search?q=a", "/api/users/search?q=%20b%20", "/api/users/search"] {
            let response = send(get_request(uri)).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(json_body(response).await, json!({ "users": [] }));
        }
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let response = send(get_request("/api/song/abc")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn create_playlist_requires_user_and_name() {
        let response = send(json_request(Method::POST, "/api/playlist", json!({ "user_id": 1 }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "user_id and name required" })
        );
    }

    #[tokio::test]
    async fn membership_changes_require_both_ids() {
        for uri in ["/api/playlist/song/add", "/api/playlist/song/remove"] {
            let response = send(json_request(Method::POST, uri, json!({ "playlist_id": 4 }))).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
        let response = send(json_request(Method::POST, "/api/playlist/delete", json!({}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "error": "playlist_id required" }));
    }

    #[tokio::test]
    async fn malformed_toggle_body_is_a_json_error() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/favorites/song/toggle")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = send(request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());

        let response = send(json_request(
            Method::POST,
            "/api/favorites/song/toggle",
            json!({ "user_id": 1 }),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn profile_update_requires_username() {
        let response = send(json_request(
            Method::PUT,
            "/api/users/7/profile",
            json!({ "bio": "hello", "username": "  " }),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "error": "username required" }));
    }

    #[tokio::test]
    async fn database_failure_is_sanitized() {
        let response = send(get_request("/api/songs")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn health_reports_disconnected_database() {
        let response = send(get_request("/api/health")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["database"], "disconnected");
    }

    #[tokio::test]
    async fn cors_allows_only_configured_origins() {
        let preflight = |origin: &str| {
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/songs")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap()
        };

        let allowed = send(preflight(ORIGIN)).await;
        assert_eq!(
            allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static(ORIGIN))
        );

        let denied = send(preflight("https://evil.example")).await;
        assert!(denied.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    async fn database_app() -> (Router, Database) {
        let secrets = crate::secrets::SecretManager::from_lookup(|key| std::env::var(key).ok());
        let database = Database::new(&secrets).await.unwrap();
        sqlx::migrate!("./migrations").run(database.pool()).await.unwrap();
        (build_router(database.clone(), &[ORIGIN.to_string()]), database)
    }

    #[tokio::test]
    #[ignore = "needs a MySQL database"]
    async fn missing_resources_are_json_404s() {
        let (app, _) = database_app().await;
        let missing = i32::MAX;
        for (uri, entity, key) in [
            (format!("/api/artist/{missing}"), "Artist", "artist"),
            (format!("/api/song/{missing}"), "Song", "song"),
            (format!("/api/playlist/{missing}"), "Playlist", "playlist"),
            (format!("/api/users/{missing}/profile"), "User", "user"),
        ] {
            let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            let body = json_body(response).await;
            assert_eq!(body, json!({ "error": format!("{entity} not found") }));
            assert!(body.get(key).is_none());
        }
    }

    #[tokio::test]
    #[ignore = "needs a MySQL database"]
    async fn profile_update_stores_username_as_sent() {
        let (app, database) = database_app().await;
        let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let user_id = sqlx::query("INSERT INTO Users (username, email, created_at) VALUES (?, ?, ?)")
            .bind(format!("before_{stamp}"))
            .bind(format!("before_{stamp}@example.com"))
            .bind(chrono::Utc::now())
            .execute(database.pool())
            .await
            .unwrap()
            .last_insert_id() as i32;

        let username = format!("  after {stamp} ");
        let response = app
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/users/{user_id}/profile"),
                json!({ "username": username }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stored = database.get_user(user_id).await.unwrap().unwrap().username;
        assert_eq!(stored, username);
    }
}
