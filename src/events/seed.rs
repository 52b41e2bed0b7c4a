use super::model::{Attendee, Category, Event};
use chrono::NaiveDate;

/// Events the registry starts with.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Conferencia de Python".to_string(),
            slug: "conferencia-python".to_string(),
            description: "Una conferencia sobre las últimas tendencias en Python y desarrollo web."
                .to_string(),
            date: seed_date(2025, 1, 15),
            time: "14:00".to_string(),
            location: "Auditorio Principal".to_string(),
            category: Category::Tecnologia,
            max_attendees: 50,
            attendees: vec![attendee("Juan Pérez", "juan@example.com")],
            featured: true,
        },
        Event {
            id: 2,
            title: "Taller de Arte Digital".to_string(),
            slug: "taller-arte-digital".to_string(),
            description: "Aprende técnicas de arte digital con herramientas modernas.".to_string(),
            date: seed_date(2025, 1, 20),
            time: "10:00".to_string(),
            location: "Sala de Arte".to_string(),
            category: Category::Cultural,
            max_attendees: 25,
            attendees: vec![],
            featured: false,
        },
        Event {
            id: 3,
            title: "Maratón de Programación".to_string(),
            slug: "maraton-programacion".to_string(),
            description: "Compite con otros programadores en este evento de 24 horas.".to_string(),
            date: seed_date(2025, 1, 25),
            time: "09:00".to_string(),
            location: "Centro de Innovación".to_string(),
            category: Category::Tecnologia,
            max_attendees: 100,
            attendees: vec![
                attendee("María García", "maria@example.com"),
                attendee("Carlos López", "carlos@example.com"),
            ],
            featured: true,
        },
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn attendee(name: &str, email: &str) -> Attendee {
    Attendee::new(name.to_string(), email.to_string())
}
