use axum::{
    routing::{get, post},
    Form, Router,
    extract::{Json, State},
    response::{Html, IntoResponse, Redirect},
};
use tower_http::cors::{CorsLayer, Any};
use tracing::info;

use crate::api::models::{AnalyzeRequest, StateResponse};
use crate::api::response;
use crate::render;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/analyze", post(form_analyze_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/state", get(state_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    info!("Processing analyze request for URL: {}", req.url);
    let start_time = std::time::Instant::now();

    let snapshot = state.analyzer.analyze(&req.url).await;

    info!(
        "Analyze request for {} finished in {:?} (populated: {})",
        req.url,
        start_time.elapsed(),
        snapshot.display.is_populated()
    );
    response::success(StateResponse::from(snapshot))
}

async fn state_handler(State(state): State<AppState>) -> impl IntoResponse {
    response::success(StateResponse::from(state.analyzer.snapshot()))
}

async fn page_handler(State(state): State<AppState>) -> Html<String> {
    Html(render::page(&state.analyzer.snapshot()))
}

async fn form_analyze_handler(
    State(state): State<AppState>,
    Form(req): Form<AnalyzeRequest>,
) -> Redirect {
    state.analyzer.analyze(&req.url).await;
    Redirect::to("/")
}
