use super::error::RegistryError;
use super::model::{Attendee, Category, Event, Stats};
use super::seed::seed_events;
use super::slug::create_slug;
use super::validation::{parse_category, validate_event, validate_registration, EventDraft, ValidationErrors};
use crate::clock::Clock;
use chrono::NaiveDate;
use itertools::Itertools;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// In-memory store of every event, kept in insertion order.
///
/// Not synchronized: callers sharing it between requests wrap it in a lock and hold the
/// write guard for the whole of each mutating call.
#[derive(Debug)]
pub struct EventRegistry {
    events: Vec<Event>,
    clock: Arc<dyn Clock>,
}

impl EventRegistry {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self::with_events(clock, Vec::new())
    }

    /// Registry holding the startup events.
    pub fn seeded(clock: impl Clock + 'static) -> Self {
        Self::with_events(clock, seed_events())
    }

    pub fn with_events(clock: impl Clock + 'static, events: Vec<Event>) -> Self {
        Self {
            events,
            clock: Arc::new(clock),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn list_all(&self) -> &[Event] {
        &self.events
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.slug == slug)
    }

    fn find_by_slug_mut(&mut self, slug: &str) -> Result<&mut Event, RegistryError> {
        self.events
            .iter_mut()
            .find(|event| event.slug == slug)
            .ok_or_else(RegistryError::event_not_found)
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create(&mut self, draft: &EventDraft) -> Result<Event, RegistryError> {
        let fields = validate_event(draft, self.today()).inspect_err(|errors| {
            warn!("Rejected event: {}", errors);
        })?;

        let slug = create_slug(&fields.title);
        if slug.is_empty() {
            return Err(ValidationErrors::single(
                "title",
                "El título debe contener letras o números",
            )
            .into());
        }
        if self.find_by_slug(&slug).is_some() {
            warn!("Slug '{}' is already taken", slug);
            return Err(RegistryError::duplicate_slug());
        }

        let id = self.events.iter().map(|event| event.id).max().unwrap_or(0) + 1;
        let event = Event::new(id, slug, fields);

        self.events.push(event.clone());

        info!("Created event '{}' with id {}", event.slug, event.id);

        Ok(event)
    }

    /// Removes the event together with its attendees.
    #[instrument(skip(self))]
    pub fn delete(&mut self, slug: &str) -> Result<Event, RegistryError> {
        let position = self
            .events
            .iter()
            .position(|event| event.slug == slug)
            .ok_or_else(RegistryError::event_not_found)?;

        let event = self.events.remove(position);

        info!(
            "Deleted event '{}' ({} attendees dropped)",
            event.slug,
            event.attendees.len()
        );

        Ok(event)
    }

    #[instrument(skip(self))]
    pub fn toggle_featured(&mut self, slug: &str) -> Result<Event, RegistryError> {
        let event = self.find_by_slug_mut(slug)?;

        event.featured = !event.featured;

        info!("Event '{}' featured: {}", event.slug, event.featured);

        Ok(event.clone())
    }

    #[instrument(skip(self, name))]
    pub fn register(&mut self, slug: &str, name: &str, email: &str) -> Result<(), RegistryError> {
        let event = self.find_by_slug_mut(slug)?;
        let registration = validate_registration(name, email)?;

        if event.is_registered(&registration.email) {
            warn!("Email already registered");
            return Err(RegistryError::already_registered());
        }
        if event.is_full() {
            warn!("Event is full ({} attendees)", event.max_attendees);
            return Err(RegistryError::event_full());
        }

        event
            .attendees
            .push(Attendee::new(registration.name, registration.email));

        info!(
            "Registered attendee ({}/{})",
            event.attendees.len(),
            event.max_attendees
        );

        Ok(())
    }

    #[instrument(skip(self))]
    pub fn unregister(&mut self, slug: &str, email: &str) -> Result<Attendee, RegistryError> {
        let event = self.find_by_slug_mut(slug)?;
        let email = email.trim();

        let position = event
            .attendees
            .iter()
            .position(|attendee| attendee.email == email)
            .ok_or_else(RegistryError::attendee_not_found)?;

        let attendee = event.attendees.remove(position);

        info!("Unregistered attendee from '{}'", event.slug);

        Ok(attendee)
    }

    pub fn filter_by_category(&self, category: &str) -> Result<Vec<Event>, RegistryError> {
        let category = parse_category(category)?;

        Ok(self.in_category(category))
    }

    pub fn in_category(&self, category: Category) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.category == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive match on title, description and location; a blank query matches all.
    pub fn search(&self, query: &str, category: Option<Category>) -> Vec<Event> {
        let query = query.trim().to_lowercase();

        debug!("Searching '{}' in {:?}", query, category);

        self.events
            .iter()
            .filter(|event| category.map_or(true, |category| event.category == category))
            .filter(|event| {
                query.is_empty() || event.searchable_text().to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Events from today onwards, soonest first.
    pub fn upcoming(&self) -> Vec<Event> {
        let today = self.today();

        self.events
            .iter()
            .filter(|event| event.date >= today)
            .sorted_by_key(|event| event.date)
            .cloned()
            .collect()
    }

    /// Events before today, most recent first.
    pub fn past(&self) -> Vec<Event> {
        let today = self.today();

        self.events
            .iter()
            .filter(|event| event.date < today)
            .sorted_by(|a, b| b.date.cmp(&a.date))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> Stats {
        let today = self.today();
        let counts = self.events.iter().map(|event| event.category).counts();

        Stats {
            total_events: self.events.len(),
            upcoming_count: self.events.iter().filter(|e| e.date >= today).count(),
            total_attendees: self.events.iter().map(|e| e.attendees.len()).sum(),
            featured_count: self.events.iter().filter(|e| e.featured).count(),
            counts_by_category: Category::iter()
                .map(|category| (category, counts.get(&category).copied().unwrap_or(0)))
                .collect(),
        }
    }
}
