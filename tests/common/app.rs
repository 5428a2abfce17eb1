use axum_test::TestServer;
use wechatterbot::build_router;
use wechatterbot::config::Config;
use wechatterbot::state::AppState;

pub const ADMIN_USERNAME: &str = "wechatterbot";
pub const ADMIN_PASSWORD: &str = "buaa-admin-password";

/// Test configuration backed by a private in-memory database
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-jwt-secret-that-is-at-least-32-characters-long".to_string(),
        token_expires_in: 3600,
        admin_username: Some(ADMIN_USERNAME.to_string()),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        default_response: "我还不知道该怎么回答".to_string(),
        log_json: false,
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let state = AppState::new(test_config())
            .await
            .expect("Failed to create test app state");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
