//! Content handler implementations
//!
//! Every handler is generic over a [`ContentKind`], which picks the manager
//! out of the application state.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    db::Row,
    error::AppResult,
    models::{PatchReply, Submission},
    services::ContentManager,
    state::AppState,
    utils::parse_record_id,
};

use super::response::{self, ImageResponse};

/// Selects one content manager from the shared state
pub trait ContentKind: Send + Sync + 'static {
    fn manager(state: &AppState) -> &ContentManager;
}

fn record_id<K: ContentKind>(state: &AppState, raw: &str) -> AppResult<i64> {
    parse_record_id(raw, K::manager(state).schema().entity)
}

/// List all non-deleted items, newest first
pub async fn list_items<K: ContentKind>(State(state): State<AppState>) -> AppResult<Json<Vec<Row>>> {
    let rows = K::manager(&state).list().await?;
    Ok(Json(rows))
}

/// Create an item
pub async fn create_item<K: ContentKind>(
    State(state): State<AppState>,
    submission: Submission,
) -> AppResult<(StatusCode, Json<Row>)> {
    let manager = K::manager(&state);
    let id = manager.create(submission).await?;

    let schema = manager.schema();
    let status = if schema.create_reply.created_status {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response::created(schema, id))))
}

/// Get one item (without its image)
pub async fn get_item<K: ContentKind>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Row>> {
    let id = record_id::<K>(&state, &id)?;
    let row = K::manager(&state).get(id).await?;
    Ok(Json(row))
}

/// Serve an item's image
pub async fn get_image<K: ContentKind>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ImageResponse> {
    let id = record_id::<K>(&state, &id)?;
    let bytes = K::manager(&state).image(id).await?;
    Ok(ImageResponse(bytes))
}

/// Overwrite only the supplied fields of an item
pub async fn update_item<K: ContentKind>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    submission: Submission,
) -> AppResult<Json<Row>> {
    let id = record_id::<K>(&state, &id)?;
    let manager = K::manager(&state);
    let outcome = manager.patch(id, submission).await?;

    let body = match manager.schema().patch_reply {
        PatchReply::Message => response::message(manager.schema().messages.updated),
        PatchReply::EchoFields => outcome.echo,
    };
    Ok(Json(body))
}

/// Soft-delete an item
pub async fn delete_item<K: ContentKind>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Row>> {
    let id = record_id::<K>(&state, &id)?;
    let manager = K::manager(&state);
    manager.delete(id).await?;
    Ok(Json(response::message(manager.schema().messages.deleted)))
}
