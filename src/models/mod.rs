//! Domain models
//!
//! This module contains the entity schema descriptors and the decoded request
//! input shared by every content manager.

pub mod article;
pub mod event;
pub mod question;
pub mod schema;
pub mod submission;
pub mod writer;

pub use article::ARTICLES;
pub use event::EVENTS;
pub use question::QUESTIONS;
pub use schema::*;
pub use submission::*;
pub use writer::WRITERS;

/// Every content table, in routing order
pub static ALL_SCHEMAS: [&EntitySchema; 4] = [&ARTICLES, &EVENTS, &QUESTIONS, &WRITERS];
