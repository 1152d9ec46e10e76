//! Content response bodies

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{constants::IMAGE_CONTENT_TYPE, db::Row, models::EntitySchema};

/// `{"message": ...}`
pub fn message(text: &str) -> Row {
    let mut body = Row::new();
    body.push("message", Value::from(text));
    body
}

/// Create acknowledgement, with the new id under the schema's key if it names one
pub fn created(schema: &EntitySchema, id: i64) -> Row {
    let mut body = message(schema.messages.created);
    if let Some(key) = schema.create_reply.id_key {
        body.push(key, Value::from(id));
    }
    body
}

/// Raw image bytes, always declared as JPEG
#[derive(Debug)]
pub struct ImageResponse(pub Vec<u8>);

impl IntoResponse for ImageResponse {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, IMAGE_CONTENT_TYPE)], self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ARTICLES, EVENTS, QUESTIONS};
    use serde_json::json;

    #[test]
    fn test_created_bodies() {
        assert_eq!(
            serde_json::to_value(created(&EVENTS, 4)).unwrap(),
            json!({ "message": "Event saved successfully!", "eventId": 4 })
        );
        assert_eq!(
            serde_json::to_value(created(&QUESTIONS, 9)).unwrap(),
            json!({ "message": "Question created successfully!", "id": 9 })
        );
        assert_eq!(
            serde_json::to_value(created(&ARTICLES, 1)).unwrap(),
            json!({ "message": "Article saved successfully!" })
        );
    }
}
