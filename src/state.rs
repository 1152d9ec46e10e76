//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    db::{PgExecutor, QueryExecutor},
    models::{EntitySchema, ARTICLES, EVENTS, QUESTIONS, WRITERS},
    services::ContentManager,
    utils::{Clock, SystemClock},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    articles: ContentManager,
    events: ContentManager,
    questions: ContentManager,
    writers: ContentManager,
}

impl AppState {
    /// Create a new application state executing against `db` with the wall clock
    pub fn new(db: PgPool) -> Self {
        let executor = Arc::new(PgExecutor::new(db.clone()));
        Self::with_executor(db, executor, Arc::new(SystemClock))
    }

    /// Create a state whose managers run on the given executor and clock
    pub fn with_executor(
        db: PgPool,
        executor: Arc<dyn QueryExecutor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let manager = |schema: &'static EntitySchema| {
            ContentManager::new(schema, executor.clone(), clock.clone())
        };

        Self {
            inner: Arc::new(AppStateInner {
                articles: manager(&ARTICLES),
                events: manager(&EVENTS),
                questions: manager(&QUESTIONS),
                writers: manager(&WRITERS),
                db,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub fn articles(&self) -> &ContentManager {
        &self.inner.articles
    }

    pub fn events(&self) -> &ContentManager {
        &self.inner.events
    }

    pub fn questions(&self) -> &ContentManager {
        &self.inner.questions
    }

    pub fn writers(&self) -> &ContentManager {
        &self.inner.writers
    }
}
