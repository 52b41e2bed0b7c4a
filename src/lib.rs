pub mod clock;
pub mod config;
pub mod events;
pub mod tracing;
pub mod web;
