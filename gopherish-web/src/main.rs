use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode},
    routing::{get, post},
};
use clap::{Arg, Command, value_parser};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gopherish::{translate_sentence, translate_word};

mod history;

use history::{History, HistoryListing};

#[derive(Serialize, Deserialize)]
pub struct WordRequest {
    #[serde(rename = "english-word")]
    pub english_word: String,
}

#[derive(Serialize, Deserialize)]
pub struct WordResponse {
    #[serde(rename = "gopher-word")]
    pub gopher_word: String,
}

#[derive(Serialize, Deserialize)]
pub struct SentenceRequest {
    #[serde(rename = "english-sentence")]
    pub english_sentence: String,
}

#[derive(Serialize, Deserialize)]
pub struct SentenceResponse {
    #[serde(rename = "gopher-sentence")]
    pub gopher_sentence: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: impl ToString) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

#[derive(Clone, Default)]
pub struct AppState {
    pub history: Arc<History>,
}

fn cli() -> Command {
    Command::new("gopherish-web")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Start the server that translates English into Gopherish")
        .arg(
            Arg::new("port")
                .help("Port number for the HTTP server")
                .required(true)
                .value_parser(value_parser!(u16))
                .index(1),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Address to listen on")
                .default_value("0.0.0.0"),
        )
}

fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/word",
            post(translate_word_handler).fallback(method_not_supported),
        )
        .route(
            "/sentence",
            post(translate_sentence_handler).fallback(method_not_supported),
        )
        .route(
            "/history",
            get(list_history).fallback(method_not_supported),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = *matches
        .get_one::<u16>("port")
        .ok_or("missing port argument")?;
    let host = matches
        .get_one::<String>("host")
        .ok_or("missing host argument")?;

    info!("🐹 Starting Gopherish translation server");

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("🚀 Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app(AppState::default())).await?;

    Ok(())
}

async fn method_not_supported(method: Method) -> ApiError {
    warn!("Rejected {} request", method);
    bad_request(format!("Method {} not supported", method))
}

async fn translate_word_handler(
    State(state): State<AppState>,
    request: Result<Json<WordRequest>, JsonRejection>,
) -> Result<Json<WordResponse>, ApiError> {
    let Json(request) = request.map_err(|e| bad_request(e.body_text()))?;

    let gopher_word = translate_word(&request.english_word);
    info!("Translated word: {} → {}", &request.english_word, &gopher_word);

    state.history.record(&request.english_word, &gopher_word);

    Ok(Json(WordResponse { gopher_word }))
}

async fn translate_sentence_handler(
    State(state): State<AppState>,
    request: Result<Json<SentenceRequest>, JsonRejection>,
) -> Result<Json<SentenceResponse>, ApiError> {
    let Json(request) = request.map_err(|e| bad_request(e.body_text()))?;

    let gopher_sentence = translate_sentence(&request.english_sentence).map_err(|e| {
        warn!("Failed to translate sentence: {}", e);
        bad_request(e)
    })?;
    info!(
        "Translated sentence: {} → {}",
        &request.english_sentence, &gopher_sentence
    );

    state
        .history
        .record(&request.english_sentence, &gopher_sentence);

    Ok(Json(SentenceResponse { gopher_sentence }))
}

async fn list_history(State(state): State<AppState>) -> Json<HistoryListing> {
    Json(state.history.listing())
}
