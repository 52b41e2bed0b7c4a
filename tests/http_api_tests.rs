use agendaeventos::clock::FixedClock;
use agendaeventos::events::model::Event;
use agendaeventos::events::registry::EventRegistry;
use agendaeventos::web::routes::build_router;
use agendaeventos::web::state::AppState;
use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use chrono::NaiveDate;
use serde_json::{json, Value};

fn build_server() -> TestServer {
    let today = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();
    let registry = EventRegistry::seeded(FixedClock::new(today));

    TestServer::new(build_router(AppState::new(registry))).unwrap()
}

fn location(response: &TestResponse) -> String {
    response.header("location").to_str().unwrap().to_string()
}

fn event_form(title: &str, max_attendees: &str) -> Vec<(&'static str, String)> {
    vec![
        ("title", title.to_string()),
        (
            "description",
            "Charla sobre las novedades del lenguaje".to_string(),
        ),
        ("date", "2025-01-19".to_string()),
        ("time", "18:00".to_string()),
        ("location", "Aula Magna".to_string()),
        ("category", "Tecnología".to_string()),
        ("max_attendees", max_attendees.to_string()),
        ("featured", "on".to_string()),
    ]
}

#[test_log::test(tokio::test)]
async fn should_list_all_events_as_json() {
    let server = build_server();

    let response = server.get("/api/events/").await;

    response.assert_status_ok();
    let events = response.json::<Vec<Event>>();
    assert_eq!(events.len(), 3);

    let raw = response.json::<Value>();
    assert_eq!(raw[0]["slug"], "conferencia-python");
    assert_eq!(raw[0]["date"], "2025-01-15");
    assert_eq!(raw[0]["category"], "Tecnología");
    assert_eq!(
        raw[0]["attendees"],
        json!([{"name": "Juan Pérez", "email": "juan@example.com"}])
    );
}

#[test_log::test(tokio::test)]
async fn should_get_single_event_as_json() {
    let server = build_server();

    let response = server.get("/api/events/maraton-programacion/").await;

    response.assert_status_ok();
    let event = response.json::<Event>();
    assert_eq!(event.id, 3);
    assert_eq!(event.attendees.len(), 2);
}

#[test_log::test(tokio::test)]
async fn unknown_event_should_return_404_json() {
    let server = build_server();

    let response = server.get("/api/events/does-not-exist/").await;

    response.assert_status_not_found();
    response.assert_json(&json!({"error": "Evento no encontrado"}));
}

#[test_log::test(tokio::test)]
async fn index_should_show_only_upcoming_events() {
    let server = build_server();

    let page = server.get("/").await.text();

    assert!(page.contains("Taller de Arte Digital"));
    assert!(page.contains("Maratón de Programación"));
    assert!(!page.contains("Conferencia de Python"));
}

#[test_log::test(tokio::test)]
async fn unknown_event_page_should_redirect_home_with_flash() {
    let server = build_server();

    let response = server.get("/event/does-not-exist/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/?flash=Evento+no+encontrado&level=error"
    );

    let home = server.get(&location(&response)).await.text();
    assert!(home.contains("Evento no encontrado"));
}

#[test_log::test(tokio::test)]
async fn creating_an_event_should_redirect_to_its_page() {
    let server = build_server();

    let response = server
        .post("/admin/event/")
        .form(&event_form("Python Talk!!", "20"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let target = location(&response);
    assert!(target.starts_with("/event/python-talk/?"), "{target}");

    let page = server.get(&target).await.text();
    assert!(page.contains("Evento creado exitosamente"));
    assert!(page.contains("Python Talk!!"));

    let event = server.get("/api/events/python-talk/").await.json::<Event>();
    assert_eq!(event.id, 4);
    assert!(event.featured);
}

#[test_log::test(tokio::test)]
async fn invalid_event_form_should_be_shown_again_with_errors() {
    let server = build_server();

    let response = server
        .post("/admin/event/")
        .form(&event_form("Python Talk", "cero"))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("El número máximo de asistentes debe ser un número positivo"));
    assert!(page.contains(r#"value="Python Talk""#));

    let events = server.get("/api/events/").await.json::<Vec<Event>>();
    assert_eq!(events.len(), 3);
}

#[test_log::test(tokio::test)]
async fn registration_should_add_attendee() {
    let server = build_server();

    let response = server
        .post("/event/taller-arte-digital/register/")
        .form(&[("name", "Lucía Martín"), ("email", "lucia@example.com")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/event/taller-arte-digital/?"));

    let event = server
        .get("/api/events/taller-arte-digital/")
        .await
        .json::<Event>();
    assert_eq!(event.attendees.len(), 1);
    assert_eq!(event.attendees[0].email, "lucia@example.com");
}

#[test_log::test(tokio::test)]
async fn duplicate_registration_should_show_error() {
    let server = build_server();

    let response = server
        .post("/event/conferencia-python/register/")
        .form(&[("name", "Juan Pérez"), ("email", "juan@example.com")])
        .await;

    response.assert_status_ok();
    assert!(response
        .text()
        .contains("Ya estás registrado para este evento"));
}

#[test_log::test(tokio::test)]
async fn full_event_should_reject_registration() {
    let server = build_server();
    server
        .post("/admin/event/")
        .form(&event_form("Tutoria individual", "1"))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    server
        .post("/event/tutoria-individual/register/")
        .form(&[("name", "Ana"), ("email", "ana@example.com")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let response = server
        .post("/event/tutoria-individual/register/")
        .form(&[("name", "Luis"), ("email", "luis@example.com")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("El evento ya está completo"));
}

#[test_log::test(tokio::test)]
async fn unregister_should_remove_attendee() {
    let server = build_server();

    let response = server
        .post("/event/maraton-programacion/unregister/")
        .form(&[("email", "maria@example.com")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);

    let event = server
        .get("/api/events/maraton-programacion/")
        .await
        .json::<Event>();
    assert_eq!(event.attendees.len(), 1);
    assert_eq!(event.attendees[0].email, "carlos@example.com");
}

#[test_log::test(tokio::test)]
async fn category_page_should_filter_events() {
    let server = build_server();

    let response = server.get("/events/category/Tecnolog%C3%ADa/").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Conferencia de Python"));
    assert!(!page.contains("Taller de Arte Digital"));
}

#[test_log::test(tokio::test)]
async fn invalid_category_should_redirect_home() {
    let server = build_server();

    let response = server.get("/events/category/M%C3%BAsica/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/?flash=Categor"));
}

#[test_log::test(tokio::test)]
async fn search_should_match_text_and_category() {
    let server = build_server();

    let by_text = server.get("/search/").add_query_param("q", "ARTE").await.text();
    assert!(by_text.contains("Taller de Arte Digital"));
    assert!(!by_text.contains("Maratón de Programación"));

    let by_form = server
        .post("/search/")
        .form(&[("q", ""), ("category", "Tecnología")])
        .await
        .text();
    assert!(by_form.contains("Conferencia de Python"));
    assert!(by_form.contains("Maratón de Programación"));
    assert!(!by_form.contains("Taller de Arte Digital"));
}

#[test_log::test(tokio::test)]
async fn past_events_page_should_list_past_events() {
    let server = build_server();

    let page = server.get("/events/past/").await.text();

    assert!(page.contains("Conferencia de Python"));
    assert!(!page.contains("Taller de Arte Digital"));
}

#[test_log::test(tokio::test)]
async fn admin_dashboard_should_show_stats() {
    let server = build_server();

    let page = server.get("/admin/").await.text();

    assert!(page.contains("Total de eventos: 3"));
    assert!(page.contains("Total de asistentes: 3"));
    assert!(page.contains("Eventos destacados: 2"));
}

#[test_log::test(tokio::test)]
async fn admin_should_toggle_featured_and_delete() {
    let server = build_server();

    server
        .post("/admin/event/taller-arte-digital/toggle-featured/")
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let event = server
        .get("/api/events/taller-arte-digital/")
        .await
        .json::<Event>();
    assert!(event.featured);

    let response = server.post("/admin/event/taller-arte-digital/delete/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/admin/?"));

    server
        .get("/api/events/taller-arte-digital/")
        .await
        .assert_status_not_found();
}

#[test_log::test(tokio::test)]
async fn deleting_unknown_event_should_report_error() {
    let server = build_server();

    let response = server.post("/admin/event/nope/delete/").await;

    assert_eq!(
        location(&response),
        "/admin/?flash=Evento+no+encontrado&level=error"
    );
    assert_eq!(
        server.get("/api/events/").await.json::<Vec<Event>>().len(),
        3
    );
}
