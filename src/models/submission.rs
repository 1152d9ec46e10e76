//! Decoded request input

use std::collections::HashMap;

/// State of one named field in a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Not mentioned by the caller
    Absent,
    /// Explicitly null
    Null,
    /// Raw, untrimmed text
    Value(String),
}

impl FieldInput {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldInput::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldInput::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Named field values plus an optional, already-decoded image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    fields: HashMap<String, FieldInput>,
    image: Option<Vec<u8>>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, FieldInput::Value(value.into()));
        self
    }

    pub fn with_null(mut self, name: impl Into<String>) -> Self {
        self.set(name, FieldInput::Null);
        self
    }

    pub fn with_image(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.set_image(bytes.into());
        self
    }

    /// Record a field; setting `Absent` forgets it
    pub fn set(&mut self, name: impl Into<String>, value: FieldInput) {
        let name = name.into();
        if value.is_absent() {
            self.fields.remove(&name);
        } else {
            self.fields.insert(name, value);
        }
    }

    /// An empty buffer counts as no upload
    pub fn set_image(&mut self, bytes: Vec<u8>) {
        self.image = if bytes.is_empty() { None } else { Some(bytes) };
    }

    pub fn field(&self, name: &str) -> FieldInput {
        self.fields.get(name).cloned().unwrap_or(FieldInput::Absent)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldInput::as_str)
    }

    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    pub fn take_image(&mut self) -> Option<Vec<u8>> {
        self.image.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_states() {
        let submission = Submission::new()
            .with_field("title", " Hello ")
            .with_null("tags");

        assert_eq!(submission.field("title"), FieldInput::Value(" Hello ".to_string()));
        assert_eq!(submission.field("tags"), FieldInput::Null);
        assert_eq!(submission.field("topic"), FieldInput::Absent);
        assert_eq!(submission.text("tags"), None);
    }

    #[test]
    fn test_empty_image_is_no_image() {
        let submission = Submission::new().with_image(Vec::new());
        assert!(submission.image().is_none());

        let mut submission = Submission::new().with_image(vec![0xFF, 0xD8]);
        assert_eq!(submission.image(), Some(&[0xFF, 0xD8][..]));
        assert_eq!(submission.take_image(), Some(vec![0xFF, 0xD8]));
        assert!(submission.image().is_none());
    }
}
