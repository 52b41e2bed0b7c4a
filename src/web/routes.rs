use super::handlers::{admin, api, pages};
use super::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the whole application router.
///
/// Paths keep their trailing slash; `/admin` and `/admin/` are different routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(pages::index))
        .route("/event/:slug/", get(pages::event_detail))
        .route(
            "/event/:slug/register/",
            get(pages::register_form).post(pages::register),
        )
        .route("/event/:slug/unregister/", post(pages::unregister))
        .route("/search/", get(pages::search).post(pages::search_submit))
        .route("/events/past/", get(pages::past_events))
        .route("/events/category/:category/", get(pages::events_by_category))
        // Administration
        .route("/admin/", get(admin::dashboard))
        .route("/admin/event/", get(admin::create_form).post(admin::create))
        .route("/admin/event/:slug/delete/", post(admin::delete))
        .route(
            "/admin/event/:slug/toggle-featured/",
            post(admin::toggle_featured),
        )
        // Read-only JSON API
        .route("/api/events/", get(api::list_events))
        .route("/api/events/:slug/", get(api::get_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
