use super::validation::ValidEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub max_attendees: u32,
    pub attendees: Vec<Attendee>,
    pub featured: bool,
}

impl Event {
    pub fn new(id: u32, slug: String, fields: ValidEvent) -> Self {
        Self {
            id,
            slug,
            title: fields.title,
            description: fields.description,
            date: fields.date,
            time: fields.time,
            location: fields.location,
            category: fields.category,
            max_attendees: fields.max_attendees,
            attendees: Vec::new(),
            featured: fields.featured,
        }
    }

    pub fn is_full(&self) -> bool {
        self.attendees.len() >= self.max_attendees as usize
    }

    pub fn spots_left(&self) -> usize {
        (self.max_attendees as usize).saturating_sub(self.attendees.len())
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.attendees.iter().any(|attendee| attendee.email == email)
    }

    /// Text matched by free-text search
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub email: String,
}

impl Attendee {
    pub fn new(name: String, email: String) -> Self {
        Self { name, email }
    }
}

/// The closed set of event categories.
///
/// Display names, URL segments and JSON values all use the Spanish label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Category {
    #[strum(serialize = "Tecnología")]
    #[serde(rename = "Tecnología")]
    Tecnologia,
    #[strum(serialize = "Académico")]
    #[serde(rename = "Académico")]
    Academico,
    Cultural,
    Deportivo,
    Social,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_events: usize,
    pub upcoming_count: usize,
    pub total_attendees: usize,
    pub featured_count: usize,
    pub counts_by_category: Vec<(Category, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test_log::test]
    fn should_parse_categories_by_their_spanish_name() {
        assert_eq!(Category::from_str("Tecnología").unwrap(), Category::Tecnologia);
        assert_eq!(Category::from_str("Académico").unwrap(), Category::Academico);
        assert_eq!(Category::from_str("Social").unwrap(), Category::Social);
    }

    #[test_log::test]
    fn should_not_parse_unaccented_or_lowercase_names() {
        assert!(Category::from_str("Tecnologia").is_err());
        assert!(Category::from_str("cultural").is_err());
    }

    #[test_log::test]
    fn categories_should_keep_their_canonical_order() {
        let names: Vec<String> = Category::iter().map(|c| c.to_string()).collect();

        assert_eq!(
            names,
            vec!["Tecnología", "Académico", "Cultural", "Deportivo", "Social"]
        );
    }

    #[test_log::test]
    fn should_serialize_category_with_display_name() {
        let json = serde_json::to_string(&Category::Academico).unwrap();

        assert_eq!(json, "\"Académico\"");
    }

    #[test_log::test]
    fn should_report_remaining_capacity() {
        let mut event = Event {
            id: 1,
            title: "Charla".to_string(),
            slug: "charla".to_string(),
            description: "Una charla corta".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            time: "10:00".to_string(),
            location: "Aula 1".to_string(),
            category: Category::Academico,
            max_attendees: 2,
            attendees: vec![],
            featured: false,
        };

        assert_eq!(event.spots_left(), 2);
        assert!(!event.is_full());

        event.attendees.push(Attendee::new("Ana".into(), "ana@example.com".into()));
        event.attendees.push(Attendee::new("Luis".into(), "luis@example.com".into()));

        assert_eq!(event.spots_left(), 0);
        assert!(event.is_full());
        assert!(event.is_registered("luis@example.com"));
    }
}
