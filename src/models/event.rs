//! Event schema

use crate::db::RowScope;

use super::schema::{
    CreateReply, DeletePolicy, EntitySchema, FieldKind, FieldSpec, ImagePolicy, Messages,
    PatchReply, Projection, Publication, SlugRule,
};

/// `events`: dated happenings; image mandatory, slug is the trimmed title.
pub static EVENTS: EntitySchema = EntitySchema {
    entity: "Event",
    table: "events",
    fields: &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("content", FieldKind::Text),
        FieldSpec::required("topic", FieldKind::Text),
        FieldSpec::required("language", FieldKind::Text),
        FieldSpec::required("writers", FieldKind::Text),
        FieldSpec::optional("translator", FieldKind::Text),
        FieldSpec::optional("tags", FieldKind::Text),
        FieldSpec::required("eventDate", FieldKind::Date),
    ],
    image: ImagePolicy::Required,
    publication: Publication::Implicit,
    slug: SlugRule::FromTitle,
    list: &[
        Projection::plain("id"),
        Projection::plain("slug"),
        Projection::plain("title"),
        Projection::stripped("content"),
        Projection::plain("topic"),
        Projection::plain("language"),
        Projection::plain("writers"),
        Projection::plain("translator"),
        Projection::plain("tags"),
        Projection::plain("eventDate"),
        Projection::plain("views"),
        Projection::plain("createdOn"),
        Projection::plain("modifiedOn"),
    ],
    detail: &[
        Projection::plain("id"),
        Projection::plain("slug"),
        Projection::plain("title"),
        Projection::stripped("content"),
        Projection::plain("topic"),
        Projection::plain("language"),
        Projection::plain("writers"),
        Projection::plain("translator"),
        Projection::plain("tags"),
        Projection::plain("eventDate"),
        Projection::plain("views"),
        Projection::plain("createdOn"),
        Projection::plain("modifiedOn"),
        Projection::plain("isDeleted"),
    ],
    patchable: &["title", "content"],
    delete: DeletePolicy {
        scope: RowScope::Active,
        require_match: true,
    },
    create_reply: CreateReply {
        created_status: true,
        id_key: Some("eventId"),
    },
    patch_reply: PatchReply::Message,
    messages: Messages {
        created: "Event saved successfully!",
        updated: "Event updated successfully!",
        deleted: "Event deleted successfully!",
        not_found: "Event not found.",
        gone: "Event not found or already deleted.",
        image_not_found: "Image not found.",
        missing_fields: "All required fields including image must be provided.",
        empty_patch: "At least one field must be provided for update.",
    },
};
