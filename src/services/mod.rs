//! Business logic services

pub mod content_service;

pub use content_service::{ContentManager, PatchOutcome};
