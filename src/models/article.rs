//! Article schema

use crate::db::RowScope;

use super::schema::{
    CreateReply, DeletePolicy, EntitySchema, FieldKind, FieldSpec, ImagePolicy, Messages,
    PatchReply, Projection, Publication, SlugRule,
};

/// `articles`: bilingual long-form pieces with an optional cover image.
///
/// Delete ignores the soft-delete flag and never reports not-found, so deleting
/// twice succeeds. The single-item read keeps HTML; only the listing strips it.
pub static ARTICLES: EntitySchema = EntitySchema {
    entity: "Article",
    table: "articles",
    fields: &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::optional("englishDescription", FieldKind::Text),
        FieldSpec::optional("urduDescription", FieldKind::Text),
        FieldSpec::required("topic", FieldKind::Text),
        FieldSpec::required("writers", FieldKind::Text),
        FieldSpec::optional("translator", FieldKind::Text),
        FieldSpec::required("language", FieldKind::Text),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::optional("tags", FieldKind::Text),
        FieldSpec::required("isPublished", FieldKind::Flag),
    ],
    image: ImagePolicy::Optional,
    publication: Publication::Supplied,
    slug: SlugRule::None,
    list: &[
        Projection::plain("id"),
        Projection::plain("title"),
        Projection::stripped("englishDescription"),
        Projection::stripped("urduDescription"),
        Projection::plain("topic"),
        Projection::plain("writers"),
        Projection::plain("translator"),
        Projection::plain("language"),
        Projection::plain("date"),
        Projection::plain("tags"),
        Projection::plain("views"),
        Projection::plain("createdOn"),
        Projection::plain("isPublished"),
    ],
    detail: &[
        Projection::plain("id"),
        Projection::plain("title"),
        Projection::plain("englishDescription"),
        Projection::plain("urduDescription"),
        Projection::plain("topic"),
        Projection::plain("writers"),
        Projection::plain("translator"),
        Projection::plain("language"),
        Projection::plain("date"),
        Projection::plain("tags"),
        Projection::plain("views"),
        Projection::plain("createdOn"),
        Projection::plain("isPublished"),
        Projection::plain("modifiedOn"),
        Projection::plain("isDeleted"),
    ],
    patchable: &["title", "englishDescription", "urduDescription"],
    delete: DeletePolicy {
        scope: RowScope::Any,
        require_match: false,
    },
    create_reply: CreateReply {
        created_status: false,
        id_key: None,
    },
    patch_reply: PatchReply::Message,
    messages: Messages {
        created: "Article saved successfully!",
        updated: "Article updated successfully!",
        deleted: "Article deleted (soft) successfully!",
        not_found: "Article not found.",
        gone: "Article not found or already deleted.",
        image_not_found: "Image not found",
        missing_fields: "Required fields are missing.",
        empty_patch: "No fields provided for update.",
    },
};
