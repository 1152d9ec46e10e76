//! Input validation utilities

use crate::error::{AppError, AppResult};

/// Trim a text value; empty-after-trim becomes `None`
pub fn clean_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Interpret a form flag: `"true"` or `"1"` is set, anything else is clear
pub fn parse_flag(input: &str) -> i16 {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => 1,
        _ => 0,
    }
}

/// Parse a path-embedded record identifier
pub fn parse_record_id(raw: &str, entity: &str) -> AppResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::validation(format!("{} ID is required.", entity)));
    }
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::validation(format!("Invalid {} ID.", entity))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Ali "), Some("Ali".to_string()));
        assert_eq!(clean_text("   "), None);
        assert_eq!(clean_text(""), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), 1);
        assert_eq!(parse_flag("TRUE"), 1);
        assert_eq!(parse_flag("1"), 1);
        assert_eq!(parse_flag("false"), 0);
        assert_eq!(parse_flag("0"), 0);
        assert_eq!(parse_flag("yes"), 0);
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("42", "Article").unwrap(), 42);
        assert!(matches!(
            parse_record_id("", "Article"),
            Err(AppError::Validation(msg)) if msg == "Article ID is required."
        ));
        assert!(parse_record_id("abc", "Event").is_err());
        assert!(parse_record_id("0", "Event").is_err());
        assert!(parse_record_id("-3", "Writer").is_err());
    }
}
