//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by content type.

pub mod content;
pub mod health;

use axum::Router;

use crate::state::AppState;

use content::{Articles, Events, Questions, Writers};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/articles", content::routes::<Articles>())
        .nest("/events", content::routes::<Events>())
        .nest("/questions", content::routes::<Questions>())
        .nest("/writers", content::routes::<Writers>())
}
