use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use wechatterbot::config::Config;
use wechatterbot::handlers::{
    ChatRequest, ChatResponse, CodeResponse, CreateRuleRequest, CreateRuleResponse,
    CreateStatementRequest, CreateStatementResponse, DeleteRequest, LoginRequest, LoginResponse,
    RuleSearchResponse, StatementSearchResponse,
};
use wechatterbot::models::{Rule, Statement};
use wechatterbot::services::ReplySource;
use wechatterbot::state::AppState;
use wechatterbot::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::admin::login,
        handlers::rule::create_rule,
        handlers::rule::search_rule,
        handlers::rule::delete_rule,
        handlers::statement::create_statement,
        handlers::statement::search_statement,
        handlers::statement::delete_statement,
        handlers::chat::chat,
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        CreateRuleRequest,
        CreateRuleResponse,
        RuleSearchResponse,
        CreateStatementRequest,
        CreateStatementResponse,
        StatementSearchResponse,
        DeleteRequest,
        CodeResponse,
        ChatRequest,
        ChatResponse,
        ReplySource,
        Rule,
        Statement,
    )),
    tags(
        (name = "Admin", description = "Admin authentication"),
        (name = "Rules", description = "Rule management endpoints"),
        (name = "Statements", description = "Statement management endpoints"),
        (name = "Chat", description = "Conversation endpoint")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    init_tracing(config.log_json);
    let addr = config.server_addr();

    // Initialize application state (connects to the database)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config).await?;
    tracing::info!("Database ready");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing, optionally as JSON lines
fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wechatterbot=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true).compact())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
