//! Content management handlers (articles, events, questions, writers)

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::{services::ContentManager, state::AppState};

/// `/articles`
pub struct Articles;

/// `/events`
pub struct Events;

/// `/questions`
pub struct Questions;

/// `/writers`
pub struct Writers;

impl ContentKind for Articles {
    fn manager(state: &AppState) -> &ContentManager {
        state.articles()
    }
}

impl ContentKind for Events {
    fn manager(state: &AppState) -> &ContentManager {
        state.events()
    }
}

impl ContentKind for Questions {
    fn manager(state: &AppState) -> &ContentManager {
        state.questions()
    }
}

impl ContentKind for Writers {
    fn manager(state: &AppState) -> &ContentManager {
        state.writers()
    }
}

/// Routes for one content type
pub fn routes<K: ContentKind>() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_items::<K>))
        .route("/", post(handler::create_item::<K>))
        .route("/{id}", get(handler::get_item::<K>))
        .route("/{id}", patch(handler::update_item::<K>))
        .route("/{id}", put(handler::update_item::<K>))
        .route("/{id}", delete(handler::delete_item::<K>))
        .route("/{id}/image", get(handler::get_image::<K>))
}
