pub mod config;
pub mod error;
pub mod listing;
pub mod report;

pub use modelist_core::*;
pub use modelist_openai::*;

pub use error::ListingError;
pub use report::OutputFormat;
