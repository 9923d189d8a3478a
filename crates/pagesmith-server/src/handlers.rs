//! Request handlers and router

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::instrument;

use pagesmith::generator::ChatSession;
use pagesmith::messages::Turn;

use crate::error::ApiError;
use crate::page;

/// Shared server state: one conversation for the whole process.
///
/// The session is behind an async mutex, so concurrent submissions are
/// serialized and each turn's user/assistant pair stays adjacent in the
/// transcript.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<ChatSession>>,
}

impl AppState {
    /// Wrap a session for sharing across handlers.
    #[must_use]
    pub fn new(session: ChatSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's page description
    pub message: String,
}

/// Successful response of `POST /chat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated HTML document, verbatim model output
    pub html: String,
}

/// Response of `GET /transcript`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
    /// All turns in submission order
    pub turns: Vec<Turn>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .route("/transcript", get(transcript))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(page::CHAT_PAGE)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[instrument(skip(state, request), fields(message_len = request.message.len()))]
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    metrics::counter!("pagesmith_chat_requests_total").increment(1);
    let started = std::time::Instant::now();

    let mut session = state.session.lock().await;
    let html = session.submit(&request.message).await.inspect_err(|_| {
        metrics::counter!("pagesmith_chat_failures_total").increment(1);
    })?;

    let elapsed = started.elapsed();
    metrics::histogram!("pagesmith_chat_duration_seconds").record(elapsed.as_secs_f64());
    tracing::info!(html_len = html.len(), duration_ms = elapsed.as_millis() as u64, "generated page");
    Ok(Json(ChatResponse { html }))
}

#[instrument(skip(state))]
async fn transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let session = state.session.lock().await;
    Json(TranscriptResponse {
        turns: session.transcript().turns().to_vec(),
    })
}
