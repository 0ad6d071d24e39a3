//! Integration tests for ComXStore.
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`;
//! no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p comxstore-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use comxstore_integration_tests::TestContext;
//!
//! #[tokio::test]
//! async fn test_health() {
//!     let mut ctx = TestContext::new().await;
//!     let resp = ctx.get("/health").await;
//!     assert_eq!(resp.status, StatusCode::OK);
//! }
//! ```

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use comxstore_core::UserRole;
use comxstore_server::config::ServerConfig;
use comxstore_server::middleware::SESSION_COOKIE_NAME;
use comxstore_server::state::AppState;

static NEXT_CONTEXT: AtomicUsize = AtomicUsize::new(0);

/// A decoded response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// JSON body, a string for plain-text bodies, or null when empty.
    pub body: Value,
}

/// One isolated store: fresh seed data, its own preference file and a
/// cookie jar holding the session cookie.
pub struct TestContext {
    app: Router,
    state: AppState,
    cookie: Option<String>,
}

/// A preference file path no other test uses.
#[must_use]
pub fn unique_preferences_path() -> PathBuf {
    let n = NEXT_CONTEXT.fetch_add(1, Ordering::Relaxed);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    std::env::temp_dir()
        .join(format!("comxstore-it-{}-{nanos}-{n}", std::process::id()))
        .join("preferences.json")
}

impl TestContext {
    /// Fresh store without simulated latency.
    pub async fn new() -> Self {
        Self::with_preferences(unique_preferences_path()).await
    }

    /// Fresh store reading preferences from `path`.
    pub async fn with_preferences(path: PathBuf) -> Self {
        let config = ServerConfig {
            preferences_path: path,
            simulate_latency: false,
            ..ServerConfig::default()
        };
        let state = AppState::new(config).await;
        Self {
            app: comxstore_server::app(state.clone()),
            state,
            cookie: None,
        }
    }

    /// Shared state, for inspecting the store directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request, keeping the session cookie between calls.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    #[allow(clippy::unwrap_used)]
    pub async fn request(&mut self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            let pair = raw.split(';').next().unwrap_or_default().trim();
            if pair.starts_with(SESSION_COOKIE_NAME) {
                self.cookie = Some(pair.to_string());
            }
        }

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&mut self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn post_empty(&mut self, uri: &str) -> TestResponse {
        self.request(Method::POST, uri, None).await
    }

    pub async fn put(&mut self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Sign in as a role.
    ///
    /// # Panics
    ///
    /// Panics if the login request fails.
    pub async fn login(&mut self, role: UserRole) {
        let resp = self
            .post("/api/session/login", serde_json::json!({ "role": role }))
            .await;
        assert_eq!(resp.status, StatusCode::OK, "login failed: {:?}", resp.body);
    }
}
