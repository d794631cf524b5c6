//! HTTP endpoint handlers for the card API.
//!
//! Endpoints:
//! - POST /cards      — Create a card from `{name, predictions}` (201)
//! - GET  /cards      — Summaries of all cards, ordered by name
//! - GET  /cards/:id  — One full card
//! - PUT  /cards/:id  — Replace a card wholesale
//! - GET  /           — Health check (only when no assets are served)

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bingo_core::{Card, CardDraft, CardStore, CardSummary, StoreError, StoreResult};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::service::AppState;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "bingo-backend";

/// Failure of a single request, rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Body rejected by the JSON extractor (bad syntax, wrong shape such as a
    /// missing `name` or `predictions`, wrong content type).
    #[error("{message}")]
    Payload { status: StatusCode, message: String },

    #[error("{0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Payload {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Payload { status, .. } => *status,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => "Card not found".to_string(),
            ApiError::Store(_) | ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {}", self);
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

/// Run a blocking store call off the async workers.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn CardStore) -> StoreResult<T> + Send + 'static,
{
    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {}", e)))?;
    Ok(result?)
}

/// POST /cards
pub(crate) async fn create_card(
    State(state): State<AppState>,
    payload: Result<Json<CardDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    let Json(draft) = payload?;
    let card = with_store(&state, move |store| store.create(draft)).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /cards/:id
pub(crate) async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Card>, ApiError> {
    let card = with_store(&state, move |store| store.get(&id)).await?;
    Ok(Json(card))
}

/// GET /cards
pub(crate) async fn list_cards(
    State(state): State<AppState>,
) -> Result<Json<Vec<CardSummary>>, ApiError> {
    let cards = with_store(&state, |store| store.list()).await?;
    Ok(Json(cards))
}

/// PUT /cards/:id
pub(crate) async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CardDraft>, JsonRejection>,
) -> Result<Json<Card>, ApiError> {
    let Json(draft) = payload?;
    let card = with_store(&state, move |store| store.update(&id, draft)).await?;
    Ok(Json(card))
}

/// GET /
pub(crate) async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true, "service": SERVICE_NAME }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            ApiError::from(StoreError::NotFound("x".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::Corrupt { id: "x".into(), reason: "eof".into() }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Payload {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "missing field `name`".into(),
            }
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_detail_hides_internals() {
        let err = ApiError::from(StoreError::Backend("IO: disk on fire".into()));
        assert_eq!(err.detail(), "Internal server error");
        assert_eq!(
            ApiError::from(StoreError::NotFound("x".into())).detail(),
            "Card not found"
        );
    }
}
