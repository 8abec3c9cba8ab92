use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::{db::EventStore, domain::Event, errors::AppError};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/:id", get(get_event))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.store.list_events().await?))
}

async fn create_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Event>), AppError> {
    // Decoded by hand from the raw bytes so a malformed body maps to the
    // contract's "Invalid JSON" response instead of axum's rejection text.
    let event: Event = serde_json::from_slice(&body).map_err(|_| AppError::InvalidPayload)?;

    if event.id.is_empty() {
        return Err(AppError::MissingId);
    }

    let stored = state.store.put_event(event).await?;

    Ok((StatusCode::CREATED, Json(stored)))
}

async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(state.store.get_event(&id).await?))
}
