use crate::events::error::RegistryError;
use crate::events::model::Event;
use crate::web::error::ApiError;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    let registry = state.registry.read().await;

    Json(registry.list_all().to_vec())
}

#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let registry = state.registry.read().await;

    registry
        .find_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| RegistryError::event_not_found().into())
}
