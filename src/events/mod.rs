pub mod error;
pub mod model;
pub mod registry;
pub mod seed;
pub mod slug;
pub mod validation;
