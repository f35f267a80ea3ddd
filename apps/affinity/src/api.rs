//! # HTTP API
//!
//! axum-based REST surface over the classifier.
//!
//! | Method | Path              | Body                     | Response           |
//! |--------|-------------------|--------------------------|--------------------|
//! | GET    | `/health`         |                          | `HealthResponse`   |
//! | GET    | `/bands`          |                          | `[Band; 5]`        |
//! | POST   | `/classify`       | `{"level": f32}`         | `Evaluation`       |
//! | POST   | `/classify/batch` | `{"levels": [num, ...]}` | `EvaluationReport` |
//!
//! JSON has no NaN or infinity literals, but numbers beyond the `f32` range
//! (e.g. `1e39`) narrow to `±inf`. Handlers use the strict path, so those
//! levels answer 422 from `/classify` and become rejections in a batch. Batch
//! rejections echo the number as the client sent it, before narrowing.

use affinity_core::{AffinityError, Band, Evaluation, EvaluationReport, Love, Rejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Maximum number of levels accepted by `/classify/batch`.
pub const MAX_BATCH_LEVELS: usize = 10_000;

// =============================================================================
// STATE
// =============================================================================

/// Shared handler state. The classifier is immutable, so cloning is all the
/// sharing it needs.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    love: Love,
}

impl AppState {
    #[must_use]
    pub fn new(love: Love) -> Self {
        Self { love }
    }
}

// =============================================================================
// REQUEST / RESPONSE TYPES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub level: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub levels: Vec<serde_json::Number>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] AffinityError),

    #[error("batch of {len} levels exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Core(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BatchTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the router with tracing and permissive CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/bands", get(bands_handler))
        .route("/classify", post(classify_handler))
        .route("/classify/batch", post(classify_batch_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, love: Love) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        mild = love.thresholds().mild(),
        strong = love.thresholds().strong(),
        "affinity API listening"
    );

    axum::serve(listener, create_router(AppState::new(love)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("affinity API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn bands_handler(State(state): State<AppState>) -> Json<Vec<Band>> {
    Json(state.love.thresholds().bands().to_vec())
}

async fn classify_handler(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<Evaluation>, ApiError> {
    Ok(Json(state.love.try_evaluation(request.level)?))
}

async fn classify_batch_handler(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<EvaluationReport>, ApiError> {
    if request.levels.len() > MAX_BATCH_LEVELS {
        return Err(ApiError::BatchTooLarge {
            len: request.levels.len(),
            max: MAX_BATCH_LEVELS,
        });
    }

    let mut report = EvaluationReport::new();
    for number in request.levels {
        let Some(wide) = number.as_f64() else {
            report.add_rejection(Rejection::new(number.to_string(), "not representable as f64"));
            continue;
        };
        // Same narrowing serde applies to an `f32` field.
        match state.love.try_evaluation(wide as f32) {
            Ok(evaluation) => report.add_evaluation(evaluation),
            Err(e) => report.add_rejection(Rejection::new(number.to_string(), e.to_string())),
        }
    }
    Ok(Json(report))
}
