//! HTTP API server implementation

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::core::client::TranslationClient;
use crate::core::config::ServerConfig;
use crate::core::models::{TranslationRequest, TranslationResult};
use crate::server::error::{rejection_response, ErrorResponse};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    translator: TranslationClient,
    static_dir: PathBuf,
}

impl AppState {
    /// Bundle the proxy client with the directory served at `/` and `/static`
    pub fn new(translator: TranslationClient, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            translator,
            static_dir: static_dir.into(),
        }
    }
}

/// OpenAPI document for the JSON API
#[derive(OpenApi)]
#[openapi(
    paths(translate),
    components(schemas(TranslationRequest, TranslationResult)),
    tags((name = "translate", description = "Text translation proxy"))
)]
pub struct ApiDoc;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Serve the translator page
async fn index(State(state): State<Arc<AppState>>) -> Response {
    let index_file = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index_file).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!("Cannot read {}: {}", index_file.display(), e);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("index.html not found")),
            )
                .into_response()
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Translation handler
#[utoipa::path(
    post,
    path = "/api/translate",
    tag = "translate",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Translated text", body = TranslationResult),
        (status = 400, description = "Blank text or target language, or a body that is not JSON"),
        (status = 415, description = "Body is not sent as application/json"),
        (status = 422, description = "Missing or mistyped `text`/`target` field"),
        (status = 502, description = "Translation service unreachable or returned an unusable response"),
    )
)]
async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.translator.handle(&payload).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/translate", post(translate))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest_service("/static", assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(server: ServerConfig, translator: TranslationClient) -> anyhow::Result<()> {
    info!("Forwarding translations to {}", translator.config().translate_url());

    let state = Arc::new(AppState::new(translator, server.static_dir.clone()));
    let app = build_router(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", server.host, server.port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
