pub mod models;
pub mod query;
pub mod service;
pub mod view;

pub use service::{AppState, create_app};
