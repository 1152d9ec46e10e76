//! Text transforms applied to stored content

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{HTML_TAG_PATTERN, SLUG_SEPARATOR_PATTERN, URDU_RANGE_PATTERN};

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HTML_TAG_PATTERN).expect("valid HTML tag pattern"));

static URDU_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URDU_RANGE_PATTERN).expect("valid Urdu range pattern"));

static SLUG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_SEPARATOR_PATTERN).expect("valid slug separator pattern"));

/// Remove every `<...>` substring
pub fn strip_html(input: &str) -> String {
    HTML_TAG.replace_all(input, "").into_owned()
}

/// Derive a URL-safe slug from question text.
///
/// Lowercases and trims, drops Urdu script, turns every run of characters
/// outside `[a-z0-9]` into one hyphen and trims hyphens at both ends. Text
/// written only in Urdu therefore yields an empty slug.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urdu = URDU_RUN.replace_all(lowered.trim(), "");
    let hyphenated = SLUG_SEPARATOR.replace_all(&without_urdu, "-");
    hyphenated.trim_matches('-').to_string()
}
