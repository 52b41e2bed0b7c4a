use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

/// One-shot notice shown on the page after an action.
///
/// Travels in the query string of the redirect that follows a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    #[serde(rename = "flash")]
    pub message: String,
    pub level: Level,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: Level::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: Level::Error,
        }
    }
}

/// Query parameters any page may receive after a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
    pub level: Option<String>,
}

impl FlashQuery {
    pub fn into_flash(self) -> Option<Flash> {
        let message = self.flash.filter(|message| !message.is_empty())?;

        Some(match self.level.as_deref() {
            Some("success") => Flash::success(message),
            _ => Flash::error(message),
        })
    }
}

pub fn redirect_with(path: &str, flash: Flash) -> Redirect {
    match serde_urlencoded::to_string(&flash) {
        Ok(query) => Redirect::to(&format!("{}?{}", path, query)),
        Err(err) => {
            error!("Failed encoding flash message: {:?}", err);
            Redirect::to(path)
        }
    }
}
