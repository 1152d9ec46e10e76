//! Utility functions

pub mod text;
pub mod time;
pub mod validation;

pub use text::{slugify, strip_html};
pub use time::{now_utc, parse_date, Clock, FixedClock, SystemClock};
pub use validation::{clean_text, parse_flag, parse_record_id};
