mod model;

pub use model::{MISSING_ID, Model, UNKNOWN_OWNER, sort_by_id};
