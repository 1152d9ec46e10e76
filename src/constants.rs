//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Default wait for a pooled connection before a query fails (seconds)
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// UPLOAD DEFAULTS
// =============================================================================

/// Default upper bound for a request body carrying an image (10 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Content type declared for every served image (no format sniffing)
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Multipart/JSON field name carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

// =============================================================================
// SHARED COLUMNS
// =============================================================================

/// Column names shared by every content table
pub mod columns {
    pub const ID: &str = "id";
    pub const IMAGE: &str = "image";
    pub const SLUG: &str = "slug";
    pub const VIEWS: &str = "views";
    pub const IS_PUBLISHED: &str = "isPublished";
    pub const CREATED_ON: &str = "createdOn";
    pub const MODIFIED_ON: &str = "modifiedOn";
    pub const IS_DELETED: &str = "isDeleted";
}

// =============================================================================
// TEXT PROCESSING
// =============================================================================

/// Pattern matching a single HTML tag
pub const HTML_TAG_PATTERN: &str = "<[^>]*>";

/// Pattern matching characters in the Arabic/Urdu Unicode block
pub const URDU_RANGE_PATTERN: &str = "[\u{0600}-\u{06FF}]+";

/// Pattern matching runs of characters that may not appear in a slug
pub const SLUG_SEPARATOR_PATTERN: &str = "[^a-z0-9]+";
