use crate::events::error::RegistryError;
use crate::events::validation::validate_search;
use crate::web::flash::{redirect_with, Flash, FlashQuery};
use crate::web::forms::{RegisterForm, SearchForm, UnregisterForm};
use crate::web::state::AppState;
use crate::web::view;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{debug, info, instrument, warn};

pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Html<String> {
    let events = state.registry.read().await.upcoming();

    debug!("Showing {} upcoming events", events.len());

    view::index_page(&events, flash.into_flash().as_ref())
}

#[instrument(skip(state, flash))]
pub async fn event_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(flash): Query<FlashQuery>,
) -> Response {
    let registry = state.registry.read().await;

    match registry.find_by_slug(&slug) {
        Some(event) => view::event_detail_page(event, flash.into_flash().as_ref()).into_response(),
        None => event_not_found(),
    }
}

#[instrument(skip(state))]
pub async fn register_form(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let registry = state.registry.read().await;

    match registry.find_by_slug(&slug) {
        Some(event) => view::register_page(event, &RegisterForm::default(), None).into_response(),
        None => event_not_found(),
    }
}

#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let mut registry = state.registry.write().await;

    match registry.register(&slug, &form.name, &form.email) {
        Ok(()) => redirect_with(
            &format!("/event/{}/", slug),
            Flash::success("Te has registrado exitosamente para el evento"),
        )
        .into_response(),
        Err(RegistryError::NotFound(_)) => event_not_found(),
        Err(err) => {
            warn!("Registration rejected: {}", err);

            match registry.find_by_slug(&slug) {
                Some(event) => {
                    view::register_page(event, &form, Some(&Flash::error(err.to_string())))
                        .into_response()
                }
                None => event_not_found(),
            }
        }
    }
}

#[instrument(skip(state, form))]
pub async fn unregister(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<UnregisterForm>,
) -> Response {
    let mut registry = state.registry.write().await;
    let result = registry.unregister(&slug, &form.email);
    let event_exists = registry.find_by_slug(&slug).is_some();
    drop(registry);

    let event_path = format!("/event/{}/", slug);

    match result {
        Ok(attendee) => {
            info!("Attendee removed");

            redirect_with(
                &event_path,
                Flash::success(format!("Se canceló el registro de {}", attendee.name)),
            )
            .into_response()
        }
        Err(err) => {
            let target = if event_exists {
                event_path.as_str()
            } else {
                "/"
            };

            redirect_with(target, Flash::error(err.to_string())).into_response()
        }
    }
}

pub async fn search(State(state): State<AppState>, Query(form): Query<SearchForm>) -> Html<String> {
    render_search(&state, form).await
}

pub async fn search_submit(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    render_search(&state, form).await
}

async fn render_search(state: &AppState, form: SearchForm) -> Html<String> {
    match validate_search(&form.q, &form.category) {
        Ok(filter) => {
            let results = state
                .registry
                .read()
                .await
                .search(&filter.query, filter.category);

            view::search_page(&form, &results, None)
        }
        Err(errors) => view::search_page(&form, &[], Some(&Flash::error(errors.to_string()))),
    }
}

pub async fn past_events(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Html<String> {
    let events = state.registry.read().await.past();

    view::events_page("Eventos pasados", &events, flash.into_flash().as_ref())
}

#[instrument(skip(state))]
pub async fn events_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Response {
    let result = state.registry.read().await.filter_by_category(&category);

    match result {
        Ok(events) => view::events_page(&format!("Eventos de {}", category), &events, None)
            .into_response(),
        Err(err) => redirect_with("/", Flash::error(err.to_string())).into_response(),
    }
}

fn event_not_found() -> Response {
    redirect_with("/", Flash::error(RegistryError::event_not_found().to_string())).into_response()
}
