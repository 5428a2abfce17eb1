// Library crate for the WeChatterBot admin backend
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handlers::{
    chat, create_rule, create_statement, delete_rule, delete_statement, login, search_rule,
    search_statement,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // Admin routes authenticate through the username/token pair carried
    // by each request, checked in the AdminJson/AdminQuery extractors
    let admin_routes = Router::new()
        .route("/admin/login", post(login))
        // Rule routes
        .route("/admin/create_rule", post(create_rule))
        .route("/admin/search_rule", get(search_rule))
        .route("/admin/delete_rule", post(delete_rule))
        // Statement routes
        .route("/admin/create_statement", post(create_statement))
        .route("/admin/search_statement", get(search_statement))
        .route("/admin/delete_statement", post(delete_statement));

    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        .route("/", get(|| async { "Hello, WeChatterBot!" }))
        .route("/chat", post(chat))
        .merge(admin_routes)
        .layer(middleware)
        .with_state(state)
}
