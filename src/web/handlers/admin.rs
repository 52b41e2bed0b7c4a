use crate::events::validation::EventDraft;
use crate::web::flash::{redirect_with, Flash, FlashQuery};
use crate::web::forms::CreateEventForm;
use crate::web::state::AppState;
use crate::web::view;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{instrument, warn};

pub async fn dashboard(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Html<String> {
    let registry = state.registry.read().await;

    view::admin_page(
        &registry.stats(),
        registry.list_all(),
        flash.into_flash().as_ref(),
    )
}

pub async fn create_form() -> Html<String> {
    view::create_event_page(&CreateEventForm::default(), None)
}

#[instrument(skip(state, form), fields(title = %form.title))]
pub async fn create(State(state): State<AppState>, Form(form): Form<CreateEventForm>) -> Response {
    let result = state.registry.write().await.create(&EventDraft::from(&form));

    match result {
        Ok(event) => redirect_with(
            &view::event_path(&event),
            Flash::success("Evento creado exitosamente"),
        )
        .into_response(),
        Err(err) => {
            warn!("Event creation rejected: {}", err);

            view::create_event_page(&form, Some(&Flash::error(err.to_string()))).into_response()
        }
    }
}

#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let result = state.registry.write().await.delete(&slug);

    let flash = match result {
        Ok(event) => Flash::success(format!("Evento \"{}\" eliminado", event.title)),
        Err(err) => Flash::error(err.to_string()),
    };

    redirect_with("/admin/", flash).into_response()
}

#[instrument(skip(state))]
pub async fn toggle_featured(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let result = state.registry.write().await.toggle_featured(&slug);

    let flash = match result {
        Ok(event) if event.featured => {
            Flash::success(format!("\"{}\" ahora es un evento destacado", event.title))
        }
        Ok(event) => Flash::success(format!("\"{}\" ya no es un evento destacado", event.title)),
        Err(err) => Flash::error(err.to_string()),
    };

    redirect_with("/admin/", flash).into_response()
}
