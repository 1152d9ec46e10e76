//! Request body decoding
//!
//! Create and patch bodies arrive as `multipart/form-data` (with an optional
//! `image` file part), as JSON (`image` as base64) or as a urlencoded form.
//! All three decode into a [`Submission`].

use std::collections::HashMap;

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form, Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;

use crate::{
    constants::IMAGE_FIELD,
    error::{AppError, AppResult},
    models::{FieldInput, Submission},
};

impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            read_multipart(multipart).await
        } else if content_type.starts_with("application/json") {
            let Json(body) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            read_json(body)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            Ok(read_form(fields))
        } else if content_type.is_empty() {
            Ok(Submission::new())
        } else {
            Err(AppError::validation(format!(
                "Unsupported content type: {}",
                content_type
            )))
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> AppResult<Submission> {
    let mut submission = Submission::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let bytes = field.bytes().await?;
            submission.set_image(bytes.to_vec());
        } else {
            let text = field.text().await?;
            submission.set(name, FieldInput::Value(text));
        }
    }

    Ok(submission)
}

fn read_json(body: Value) -> AppResult<Submission> {
    let Value::Object(map) = body else {
        return Err(AppError::validation("Request body must be a JSON object."));
    };

    let mut submission = Submission::new();
    for (name, value) in map {
        if name == IMAGE_FIELD {
            match value {
                Value::Null => {}
                Value::String(encoded) => submission.set_image(decode_image(&encoded)?),
                _ => return Err(AppError::validation("image must be a base64 string.")),
            }
            continue;
        }

        let input = match value {
            Value::Null => FieldInput::Null,
            Value::String(text) => FieldInput::Value(text),
            Value::Bool(flag) => FieldInput::Value(flag.to_string()),
            Value::Number(number) => FieldInput::Value(number.to_string()),
            other => FieldInput::Value(other.to_string()),
        };
        submission.set(name, input);
    }

    Ok(submission)
}

fn read_form(fields: HashMap<String, String>) -> Submission {
    fields
        .into_iter()
        .filter(|(name, _)| name != IMAGE_FIELD)
        .fold(Submission::new(), |mut submission, (name, value)| {
            submission.set(name, FieldInput::Value(value));
            submission
        })
}

/// Accepts bare base64 or a `data:<mime>;base64,` URL
fn decode_image(encoded: &str) -> AppResult<Vec<u8>> {
    let payload = match encoded.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => encoded,
    };

    STANDARD
        .decode(payload.trim())
        .map_err(|_| AppError::validation("image must be a base64 string."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_json_field_states() {
        let submission = read_json(json!({
            "title": "Zakat",
            "tags": null,
            "isPublished": true,
            "views": 3,
            "image": "/9j/"
        }))
        .unwrap();

        assert_eq!(submission.text("title"), Some("Zakat"));
        assert_eq!(submission.field("tags"), FieldInput::Null);
        assert_eq!(submission.text("isPublished"), Some("true"));
        assert_eq!(submission.text("views"), Some("3"));
        assert_eq!(submission.field("topic"), FieldInput::Absent);
        assert_eq!(submission.image(), Some(&[0xFF, 0xD8, 0xFF][..]));
    }

    #[test]
    fn test_read_json_rejects_non_object_and_bad_image() {
        assert!(read_json(json!(["title"])).is_err());
        assert!(read_json(json!({ "image": "***" })).is_err());
        assert!(read_json(json!({ "image": 42 })).is_err());
    }

    #[test]
    fn test_decode_data_url() {
        assert_eq!(
            decode_image("data:image/jpeg;base64,/9j/").unwrap(),
            vec![0xFF, 0xD8, 0xFF]
        );
    }

    #[test]
    fn test_read_form_ignores_image_text() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Ali".to_string());
        fields.insert("image".to_string(), "not a file".to_string());

        let submission = read_form(fields);
        assert_eq!(submission.text("name"), Some("Ali"));
        assert!(submission.image().is_none());
    }
}
