use crate::events::validation::EventDraft;
use serde::Deserialize;

/// Body of the admin event creation form.
///
/// Every field is kept as typed so the form can be shown again after a failed submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub max_attendees: String,
    /// Checkbox; browsers send "on" when ticked and omit the field otherwise
    pub featured: Option<String>,
}

impl CreateEventForm {
    pub fn is_featured(&self) -> bool {
        self.featured.as_deref() == Some("on")
    }
}

impl From<&CreateEventForm> for EventDraft {
    fn from(form: &CreateEventForm) -> Self {
        EventDraft {
            title: form.title.clone(),
            description: form.description.clone(),
            date: form.date.clone(),
            time: form.time.clone(),
            location: form.location.clone(),
            category: form.category.clone(),
            max_attendees: form.max_attendees.clone(),
            featured: form.is_featured(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UnregisterForm {
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub q: String,
    pub category: String,
}
