//! Parsing and validation of the day-input JSON record into a [`crate::model::DomainModel`].

mod loader;
mod schema;

pub use loader::load_input;
