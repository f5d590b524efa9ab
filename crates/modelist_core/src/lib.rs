pub mod models;
pub mod providers;

pub use models::{Model, sort_by_id};
pub use providers::{ListModelsError, ListModelsProvider};
