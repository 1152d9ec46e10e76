//! Writer schema

use crate::db::RowScope;

use super::schema::{
    CreateReply, DeletePolicy, EntitySchema, FieldKind, FieldSpec, ImagePolicy, Messages,
    PatchReply, Projection, Publication, SlugRule,
};

/// `writers`: author profiles; every field and the portrait are mandatory.
pub static WRITERS: EntitySchema = EntitySchema {
    entity: "Writer",
    table: "writers",
    fields: &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("designation", FieldKind::Text),
        FieldSpec::required("englishDescription", FieldKind::Text),
        FieldSpec::required("urduDescription", FieldKind::Text),
        FieldSpec::required("isTeamMember", FieldKind::Flag),
    ],
    image: ImagePolicy::Required,
    publication: Publication::Implicit,
    slug: SlugRule::None,
    list: &[
        Projection::plain("id"),
        Projection::plain("name"),
        Projection::plain("designation"),
        Projection::stripped("englishDescription"),
        Projection::stripped("urduDescription"),
        Projection::plain("isTeamMember"),
        Projection::plain("createdOn"),
    ],
    detail: &[
        Projection::plain("id"),
        Projection::plain("name"),
        Projection::plain("designation"),
        Projection::plain("englishDescription"),
        Projection::plain("urduDescription"),
        Projection::plain("isTeamMember"),
        Projection::plain("views"),
        Projection::plain("createdOn"),
        Projection::plain("modifiedOn"),
        Projection::plain("isDeleted"),
    ],
    patchable: &[
        "name",
        "designation",
        "englishDescription",
        "urduDescription",
        "isTeamMember",
    ],
    delete: DeletePolicy {
        scope: RowScope::Active,
        require_match: true,
    },
    create_reply: CreateReply {
        created_status: false,
        id_key: None,
    },
    patch_reply: PatchReply::EchoFields,
    messages: Messages {
        created: "Writer saved successfully!",
        updated: "Writer updated successfully!",
        deleted: "Writer deleted (soft delete) successfully!",
        not_found: "Writer not found.",
        gone: "Writer not found or already deleted.",
        image_not_found: "Image not found",
        missing_fields: "All fields including isTeamMember and image are required.",
        empty_patch: "No fields provided for update.",
    },
};
