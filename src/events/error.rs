use super::validation::ValidationErrors;
use thiserror::Error;

/// Errors of the event registry; messages are shown to users as-is.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    CapacityExceeded(String),
}

impl RegistryError {
    pub fn event_not_found() -> Self {
        Self::NotFound("Evento no encontrado".to_string())
    }

    pub fn attendee_not_found() -> Self {
        Self::NotFound("No hay ningún asistente registrado con ese email".to_string())
    }

    pub fn already_registered() -> Self {
        Self::Conflict("Ya estás registrado para este evento".to_string())
    }

    pub fn duplicate_slug() -> Self {
        Self::Conflict("Ya existe un evento con un título equivalente".to_string())
    }

    pub fn event_full() -> Self {
        Self::CapacityExceeded("El evento ya está completo".to_string())
    }
}
