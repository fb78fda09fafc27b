//! Shared mock BADSEC server for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;

/// Token the mock server hands out on `/auth`.
pub const TOKEN: &str = "12345";

/// checksum("12345", "users")
pub const USERS_CHECKSUM: &str =
    "c20acb14a3d3339b9e92daebb173e41379f9f2fad4aa6a6326a696bd90c67419";

/// Behavior knobs plus attempt counters for one mock server instance.
pub struct BadsecMock {
    pub auth_attempts: AtomicU32,
    pub users_attempts: AtomicU32,
    /// Number of initial `/auth` requests answered with 500.
    pub auth_failures: u32,
    /// Number of initial `/auth` requests answered 200 without the token
    /// header, after any `auth_failures`.
    pub auth_omit_header: u32,
    /// Number of initial `/users` requests answered with 500.
    pub users_failures: u32,
    pub users_body: &'static str,
}

impl Default for BadsecMock {
    fn default() -> Self {
        Self {
            auth_attempts: AtomicU32::new(0),
            users_attempts: AtomicU32::new(0),
            auth_failures: 0,
            auth_omit_header: 0,
            users_failures: 0,
            users_body: "alice\nbob\ncarol",
        }
    }
}

/// Start a mock BADSEC server on an ephemeral port and return its address.
pub async fn start_badsec_mock(state: Arc<BadsecMock>) -> SocketAddr {
    let app = Router::new()
        .route("/auth", get(auth_handler))
        .route("/users", get(users_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn auth_handler(
    State(state): State<Arc<BadsecMock>>,
) -> (StatusCode, HeaderMap, &'static str) {
    let attempt = state.auth_attempts.fetch_add(1, Ordering::SeqCst);
    let mut headers = HeaderMap::new();
    if attempt < state.auth_failures {
        return (StatusCode::INTERNAL_SERVER_ERROR, headers, "");
    }
    if attempt < state.auth_failures + state.auth_omit_header {
        return (StatusCode::OK, headers, "");
    }
    headers.insert("Badsec-Authentication-Token", TOKEN.parse().unwrap());
    (StatusCode::OK, headers, "")
}

async fn users_handler(
    State(state): State<Arc<BadsecMock>>,
    request_headers: HeaderMap,
) -> (StatusCode, String) {
    let attempt = state.users_attempts.fetch_add(1, Ordering::SeqCst);
    if attempt < state.users_failures {
        return (StatusCode::INTERNAL_SERVER_ERROR, String::new());
    }
    match request_headers.get("X-Request-Checksum") {
        Some(value) if value == USERS_CHECKSUM => (StatusCode::OK, state.users_body.to_string()),
        _ => (StatusCode::FORBIDDEN, String::new()),
    }
}
