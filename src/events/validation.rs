//! Input validation for event creation, registration and search.
//!
//! Every function returns either the cleaned-up value or the full list of field errors,
//! so callers can show all problems at once.

use super::model::Category;
use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

const TITLE_LENGTH: (usize, usize) = (3, 100);
const DESCRIPTION_LENGTH: (usize, usize) = (10, 1000);
const LOCATION_LENGTH: (usize, usize) = (3, 200);
const NAME_LENGTH: (usize, usize) = (2, 100);
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_QUERY_LENGTH: usize = 100;
const MAX_CAPACITY: i64 = 1000;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw event creation input, as typed into the admin form.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub max_attendees: String,
    pub featured: bool,
}

/// Event fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub max_attendees: u32,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub query: String,
    pub category: Option<Category>,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn parse_category(name: &str) -> Result<Category, ValidationErrors> {
    Category::from_str(name.trim())
        .map_err(|_| ValidationErrors::single("category", "Categoría no válida"))
}

pub fn validate_event(draft: &EventDraft, today: NaiveDate) -> Result<ValidEvent, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = required(&mut errors, "title", &draft.title, "El título es obligatorio");
    let description = required(
        &mut errors,
        "description",
        &draft.description,
        "La descripción es obligatoria",
    );
    let date = required(&mut errors, "date", &draft.date, "La fecha es obligatoria");
    let time = required(&mut errors, "time", &draft.time, "La hora es obligatoria");
    let location = required(
        &mut errors,
        "location",
        &draft.location,
        "La ubicación es obligatoria",
    );
    let category = required(
        &mut errors,
        "category",
        &draft.category,
        "Debes seleccionar una categoría",
    );
    let max_attendees = required(
        &mut errors,
        "max_attendees",
        &draft.max_attendees,
        "El número máximo de asistentes es obligatorio",
    );

    if let Some(title) = title {
        check_length(
            &mut errors,
            "title",
            title,
            TITLE_LENGTH,
            "El título debe tener entre 3 y 100 caracteres",
        );
    }
    if let Some(description) = description {
        check_length(
            &mut errors,
            "description",
            description,
            DESCRIPTION_LENGTH,
            "La descripción debe tener entre 10 y 1000 caracteres",
        );
    }
    if let Some(location) = location {
        check_length(
            &mut errors,
            "location",
            location,
            LOCATION_LENGTH,
            "La ubicación debe tener entre 3 y 200 caracteres",
        );
    }

    let max_attendees = max_attendees.and_then(|raw| match raw.parse::<i64>() {
        Ok(value) if value <= 0 => {
            errors.add(
                "max_attendees",
                "El número máximo de asistentes debe ser un número positivo",
            );
            None
        }
        Ok(value) if value > MAX_CAPACITY => {
            errors.add("max_attendees", "Debe ser un número entre 1 y 1000");
            None
        }
        Ok(value) => u32::try_from(value).ok(),
        Err(_) => {
            errors.add(
                "max_attendees",
                "El número máximo de asistentes debe ser un número positivo",
            );
            None
        }
    });

    let date = date.and_then(|raw| match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) if date < today => {
            errors.add("date", "La fecha del evento no puede ser en el pasado");
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            errors.add("date", "Formato de fecha inválido");
            None
        }
    });

    if let Some(raw) = time {
        if NaiveTime::parse_from_str(raw, TIME_FORMAT).is_err() {
            errors.add("time", "Formato de hora inválido");
        }
    }

    let category = category.and_then(|raw| match Category::from_str(raw) {
        Ok(category) => Some(category),
        Err(_) => {
            errors.add("category", "Categoría no válida");
            None
        }
    });

    match (title, description, date, time, location, category, max_attendees) {
        (
            Some(title),
            Some(description),
            Some(date),
            Some(time),
            Some(location),
            Some(category),
            Some(max_attendees),
        ) if errors.is_empty() => Ok(ValidEvent {
            title: title.to_string(),
            description: description.to_string(),
            date,
            time: time.to_string(),
            location: location.to_string(),
            category,
            max_attendees,
            featured: draft.featured,
        }),
        _ => Err(errors),
    }
}

pub fn validate_registration(name: &str, email: &str) -> Result<ValidRegistration, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required(&mut errors, "name", name, "El nombre es obligatorio");
    let email = required(
        &mut errors,
        "email",
        email,
        "El correo electrónico es obligatorio",
    );

    if let Some(name) = name {
        check_length(
            &mut errors,
            "name",
            name,
            NAME_LENGTH,
            "El nombre debe tener entre 2 y 100 caracteres",
        );
    }
    if let Some(email) = email {
        if email.chars().count() > MAX_EMAIL_LENGTH {
            errors.add("email", "El correo electrónico es demasiado largo");
        } else if !is_valid_email(email) {
            errors.add("email", "Formato de email inválido");
        }
    }

    let name = name.unwrap_or_default().to_string();
    let email = email.unwrap_or_default().to_string();

    errors.into_result(|| ValidRegistration { name, email })
}

/// Blank category means "any category".
pub fn validate_search(query: &str, category: &str) -> Result<SearchFilter, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LENGTH {
        errors.add("q", "La búsqueda no puede exceder 100 caracteres");
    }

    let category = match category.trim() {
        "" => None,
        name => match Category::from_str(name) {
            Ok(category) => Some(category),
            Err(_) => {
                errors.add("category", "Categoría no válida");
                None
            }
        },
    };

    let query = query.to_string();

    errors.into_result(|| SearchFilter { query, category })
}

fn required<'a>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &'a str,
    message: &str,
) -> Option<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        errors.add(field, message);
        None
    } else {
        Some(value)
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    (min, max): (usize, usize),
    message: &str,
) {
    let length = value.chars().count();

    if length < min || length > max {
        errors.add(field, message);
    }
}
