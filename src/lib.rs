//! Bilingual CMS - content backend for an English/Urdu publishing site
//!
//! Serves four content types over HTTP: articles, events, questions and
//! writers. Each supports create, list, get, image, partial update and
//! soft delete.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: One generic content manager
//! - **Models**: Static per-table schemas and the decoded submission
//! - **Db**: Statement building and execution

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
