#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod time;

pub use catalog::{CatalogError, QuizCatalog};
pub use time::{Countdown, format_countdown};
