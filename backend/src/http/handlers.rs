//! HTTP handlers for the status API.
//!
//! Each handler resolves the queue, asks the provider for its raw sample,
//! and encodes the answer for its endpoint.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use log::debug;

use super::dto::{HealthResponse, QueueInfo, QueueListResponse, QueueQuery, StatusResponse};
use super::error::AppError;
use super::state::AppState;
use crate::client::GRPC_WEB_CONTENT_TYPE;
use crate::codec;
use crate::models::{QueueId, DEFAULT_QUEUE};
use crate::services::ScheduleView;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let provider_status = match state.provider.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: provider_status,
    }))
}

// =============================================================================
// JSON Endpoints
// =============================================================================

/// GET /api/queues
pub async fn list_queues() -> HandlerResult<QueueListResponse> {
    let queues = QueueId::known()
        .into_iter()
        .map(|q| QueueInfo {
            label: q.label(),
            id: q.to_string(),
        })
        .collect();

    Ok(Json(QueueListResponse {
        queues,
        default: DEFAULT_QUEUE.to_string(),
    }))
}

/// GET /api/status?queue=31
///
/// Raw per-slot values exactly as the provider reported them.
pub async fn get_status(
    State(state): State<AppState>,
    Query(query): Query<QueueQuery>,
) -> HandlerResult<StatusResponse> {
    let queue = QueueId::resolve(query.queue.as_deref());
    let status = state.provider.statuses(&queue).await?;
    Ok(Json(StatusResponse { status }))
}

/// GET /api/schedule?queue=31
///
/// Normalized 48-slot schedule plus its outage intervals.
pub async fn get_schedule(
    State(state): State<AppState>,
    Query(query): Query<QueueQuery>,
) -> HandlerResult<ScheduleView> {
    let queue = QueueId::resolve(query.queue.as_deref());
    let raw = state.provider.statuses(&queue).await?;
    Ok(Json(ScheduleView::from_raw(queue, &raw)))
}

// =============================================================================
// gRPC-Web
// =============================================================================

/// POST /grpc/StatusService/GetStatus
///
/// Body is one data frame holding the queue request; the reply is a data
/// frame with the packed statuses followed by an OK trailer frame.
pub async fn grpc_get_status(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let message = codec::unwrap(&body)?;
    let requested = codec::decode_status_request(message)?;
    let queue = QueueId::resolve(requested.as_deref());
    debug!("gRPC status request for {:?} -> queue {}", requested, queue);

    let raw = state.provider.statuses(&queue).await?;
    let statuses: Vec<bool> = raw.iter().map(|&v| v != 0).collect();

    Ok((
        [(header::CONTENT_TYPE, GRPC_WEB_CONTENT_TYPE)],
        codec::encode_response_body(&statuses),
    ))
}
