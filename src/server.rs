//! HTTP server exposing the gap pair finder.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Liveness banner |
//! | `GET`  | `/health` | Health check (returns version) |
//! | `POST` | `/api/price-gap-pair` | Run a gap search |
//!
//! # `POST /api/price-gap-pair`
//!
//! ```json
//! { "nums": [4, 1, 6, 3, 8], "k": 2 }
//! ```
//!
//! An optional `"tie_break"` (`"earliest_second"` or `"lexicographic"`)
//! overrides `[search].tie_break` for that request. Both a found pair and an
//! absent pair answer `200` with a [`GapReport`]:
//!
//! ```json
//! { "indices": [0, 2], "values": [4, 6], "message": "Valid pair found" }
//! ```
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "invalid_argument", "message": "invalid argument: gap must be non-negative, got -1" } }
//! ```
//!
//! Error codes: `invalid_argument` (422) for a negative `k`, `bad_request`
//! (400/415/422, whatever the JSON extractor reports) for bodies that are not
//! valid JSON, miss a field, or hold non-integer elements.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use price_gap_core::gap::{GapError, TieBreak};
use price_gap_core::report::GapReport;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::find::find_report;

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
}

/// Build the application router. Exposed so callers can embed the routes in
/// their own server.
pub fn router(config: Arc<Config>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/api/price-gap-pair", post(handle_price_gap_pair))
        .layer(cors)
        .with_state(AppState { config })
}

/// Starts the HTTP server.
///
/// Binds to the address configured in `[server].bind` and runs until the
/// process is terminated. Returns an error if binding fails.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr()?;
    let app = router(Arc::new(config.clone()));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!(
        tie_break = %config.search.tie_break,
        "price gap server listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"invalid_argument"`).
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<GapError> for AppError {
    fn from(err: GapError) -> Self {
        match err {
            GapError::InvalidArgument { .. } => AppError {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                code: "invalid_argument".to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError {
            status: rejection.status(),
            code: "bad_request".to_string(),
            message: rejection.body_text(),
        }
    }
}

// ============ GET / ============

#[derive(Serialize)]
struct RootResponse {
    message: String,
}

async fn handle_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Price Gap API is running".to_string(),
    })
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ POST /api/price-gap-pair ============

/// Request body for `POST /api/price-gap-pair`.
#[derive(Debug, Deserialize)]
struct PriceGapRequest {
    nums: Vec<i64>,
    k: i64,
    #[serde(default)]
    tie_break: Option<TieBreak>,
}

/// Handler for `POST /api/price-gap-pair`.
///
/// Returns `200` with a [`GapReport`] whether or not a pair exists, `422`
/// for a negative `k`, and the extractor's client-error status for a
/// malformed body.
async fn handle_price_gap_pair(
    State(state): State<AppState>,
    payload: Result<Json<PriceGapRequest>, JsonRejection>,
) -> Result<Json<GapReport>, AppError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("rejected price-gap request: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    let report = find_report(&state.config, &req.nums, req.k, req.tie_break)?;

    tracing::info!(
        len = req.nums.len(),
        k = req.k,
        found = report.found(),
        "price-gap-pair"
    );

    Ok(Json(report))
}
