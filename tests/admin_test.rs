mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, ADMIN_PASSWORD, ADMIN_USERNAME};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.server.get("/").await;

    response.assert_status(StatusCode::OK);
    response.assert_text("Hello, WeChatterBot!");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/admin/login")
        .json(&json!({
            "username": ADMIN_USERNAME,
            "password": ADMIN_PASSWORD
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], 1);
    assert_eq!(body["expires_in"], 3600);
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_token_grants_admin_access() {
    let app = TestApp::new().await;

    let login = app
        .server
        .post("/admin/login")
        .json(&json!({
            "username": ADMIN_USERNAME,
            "password": ADMIN_PASSWORD
        }))
        .await;
    let body: serde_json::Value = login.json();
    let token = body["token"].as_str().unwrap().to_string();

    let response = app
        .server
        .post("/admin/create_rule")
        .json(&json!({
            "text": "你好",
            "response": "你好呀",
            "username": ADMIN_USERNAME,
            "token": token
        }))
        .await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/admin/login")
        .json(&json!({
            "username": ADMIN_USERNAME,
            "password": "wrong-password"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], 10000042);
}

#[tokio::test]
async fn test_login_unknown_username() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/admin/login")
        .json(&json!({
            "username": "nobody",
            "password": ADMIN_PASSWORD
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], 10000042);
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/admin/login")
        .json(&json!({ "username": ADMIN_USERNAME }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], 10000001);
}
