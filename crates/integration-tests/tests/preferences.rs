//! Role and theme persistence tests.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use comxstore_core::{Theme, UserRole};
use comxstore_integration_tests::{TestContext, unique_preferences_path};

#[tokio::test]
async fn test_guest_defaults() {
    let mut ctx = TestContext::new().await;
    let resp = ctx.get("/api/session").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body["role"].is_null());
    assert_eq!(resp.body["theme"], "LIGHT");
    assert_eq!(resp.body["landingTab"], "home");
}

#[tokio::test]
async fn test_login_survives_restart() {
    let path = unique_preferences_path();

    let mut first = TestContext::with_preferences(path.clone()).await;
    first.login(UserRole::Admin).await;
    let resp = first
        .post("/api/session/theme", json!({ "theme": "DARK" }))
        .await;
    assert_eq!(resp.body["theme"], "DARK");

    let mut second = TestContext::with_preferences(path).await;
    let resp = second.get("/api/session").await;
    assert_eq!(resp.body["role"], "ADMIN");
    assert_eq!(resp.body["theme"], "DARK");
    assert_eq!(resp.body["landingTab"], "dashboard");
    assert_eq!(second.get("/admin/api/dashboard").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_clears_role_and_cart() {
    let mut ctx = TestContext::new().await;
    ctx.login(UserRole::Customer).await;
    ctx.post("/api/cart/add", json!({ "product_id": "p1" })).await;

    let resp = ctx.post_empty("/api/session/logout").await;
    assert!(resp.body["role"].is_null());

    let prefs = ctx.state().preferences().reload().await;
    assert_eq!(prefs.role, None);
    assert_eq!(prefs.theme, Theme::Light);

    let cart = ctx.get("/api/cart").await;
    assert_eq!(cart.body["state"], "empty");
    assert_eq!(
        ctx.get("/api/account/orders").await.status,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_unknown_role_rejected() {
    let mut ctx = TestContext::new().await;
    let resp = ctx
        .post("/api/session/login", json!({ "role": "OWNER" }))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["error"].is_string());

    let resp = ctx
        .post("/api/session/theme", json!({ "theme": "SEPIA" }))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
