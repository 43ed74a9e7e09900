pub mod analytics;
pub mod app;
pub mod assistant;
pub mod config;
pub mod error;
pub mod event;
pub mod fixtures;
pub mod lang;
pub mod speech;
pub mod ui;

pub use error::{CivicError, Result};
