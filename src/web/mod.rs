//! HTTP adapter over the event registry: routes, handlers, forms and HTML views.

pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod view;
