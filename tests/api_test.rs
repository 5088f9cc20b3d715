use std::net::SocketAddr;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};

use trackpop::{management::TokenManager, spotify, types::Error, utils};

async fn token_grant() -> Json<Value> {
    Json(json!({
        "access_token": "test-token",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
}

async fn top_tracks(Path(artist_id): Path<String>) -> impl IntoResponse {
    let body = match artist_id.as_str() {
        "788HzQOFhN3mcDo0InBqbJ" => json!({
            "tracks": [
                {"name": "Song A", "popularity": 42, "duration_ms": 210000}
            ]
        }),
        "artist-empty" => json!({"tracks": []}),
        "artist-null" => json!({"tracks": null}),
        "artist-unknown" => {
            let error = json!({"error": {"status": 404, "message": "Non existing id"}});
            return (StatusCode::NOT_FOUND, Json(error)).into_response();
        }
        "artist-unavailable" => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "server error").into_response();
        }
        _ => json!({}),
    };
    Json(body).into_response()
}

// Every grant from this handler is already inside the 60 second expiry
// buffer, so each get_valid_token call must request a fresh one.
async fn short_lived_token_grant(State(grants): State<Arc<AtomicUsize>>) -> Json<Value> {
    let n = grants.fetch_add(1, Ordering::SeqCst) + 1;
    Json(json!({
        "access_token": format!("short-lived-{}", n),
        "token_type": "Bearer",
        "expires_in": 1
    }))
}

async fn spawn_mock_api() -> SocketAddr {
    let app = Router::new()
        .route("/token", post(token_grant))
        .route("/artists/{artist_id}/top-tracks", get(top_tracks));

    spawn_server(app).await
}

async fn spawn_short_lived_token_server(grants: Arc<AtomicUsize>) -> SocketAddr {
    let app = Router::new()
        .route("/token", post(short_lived_token_grant))
        .with_state(grants);

    spawn_server(app).await
}

async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

// Single test function: the environment is process-global, so all scenarios
// against the mock servers run sequentially here.
#[tokio::test]
async fn test_end_to_end_fetch_and_shape() {
    let addr = spawn_mock_api().await;

    unsafe {
        std::env::set_var("CLIENT_ID", "test-client-id");
        std::env::set_var("CLIENT_SECRET", "test-client-secret");
        std::env::set_var("SPOTIFY_API_URL", format!("http://{}", addr));
        std::env::set_var("SPOTIFY_API_TOKEN_URL", format!("http://{}/token", addr));
    }

    let mut token_mgr = TokenManager::bootstrap()
        .await
        .expect("bootstrap should succeed against the mock token endpoint");
    let token = token_mgr
        .get_valid_token()
        .await
        .expect("freshly granted token should be valid");
    assert_eq!(token, "test-token");

    // Known artist: one raw track comes back shaped with exact duration math
    let raw = spotify::tracks::get_top_tracks(&token, "788HzQOFhN3mcDo0InBqbJ")
        .await
        .expect("top tracks request should succeed");
    let shaped = utils::shape_tracks(raw, true);

    assert_eq!(shaped.len(), 1);
    assert_eq!(shaped[0].name, "Song A");
    assert_eq!(shaped[0].popularity, 42);
    assert_eq!(shaped[0].duration_minutes, 3.5);
    assert_eq!(shaped[0].formatted_duration.as_deref(), Some("3:30"));

    // Empty array, null and missing `tracks` are all valid empty results
    for artist in ["artist-empty", "artist-null", "artist-without-tracks-key"] {
        let raw = spotify::tracks::get_top_tracks(&token, artist)
            .await
            .unwrap_or_else(|e| panic!("expected empty result for {}, got error {}", artist, e));
        assert!(raw.is_empty(), "expected empty result for {}", artist);
    }

    // Non-success statuses surface as remote service errors, not empty results
    for artist in ["artist-unknown", "artist-unavailable"] {
        let err = spotify::tracks::get_top_tracks(&token, artist)
            .await
            .expect_err("a non-success status must be an error");
        assert!(
            matches!(err, Error::RemoteService(_)),
            "expected RemoteService error for {}, got {}",
            artist,
            err
        );
    }

    // A token within 60 seconds of expiry is replaced by a fresh grant
    let grants = Arc::new(AtomicUsize::new(0));
    let short_addr = spawn_short_lived_token_server(Arc::clone(&grants)).await;
    unsafe {
        std::env::set_var("SPOTIFY_API_TOKEN_URL", format!("http://{}/token", short_addr));
    }

    let mut short_mgr = TokenManager::bootstrap()
        .await
        .expect("bootstrap should succeed against the short-lived grant endpoint");
    assert_eq!(grants.load(Ordering::SeqCst), 1);

    let first = short_mgr
        .get_valid_token()
        .await
        .expect("re-grant should succeed");
    assert_eq!(grants.load(Ordering::SeqCst), 2);
    assert_eq!(first, "short-lived-2");

    let second = short_mgr
        .get_valid_token()
        .await
        .expect("re-grant should succeed");
    assert_eq!(grants.load(Ordering::SeqCst), 3);
    assert_eq!(second, "short-lived-3");
}
