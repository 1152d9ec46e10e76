//! Question schema

use crate::db::RowScope;

use super::schema::{
    CreateReply, DeletePolicy, EntitySchema, FieldKind, FieldSpec, ImagePolicy, Messages,
    PatchReply, Projection, Publication, SlugRule,
};

/// English question text column, the preferred slug source
pub const QUESTION_ENGLISH: &str = "questionEnglish";

/// Urdu question text column
pub const QUESTION_URDU: &str = "questionUrdu";

/// `questions`: bilingual question/answer pairs, created unpublished.
///
/// Delete ignores the soft-delete flag but still reports not-found when no row
/// has the id at all.
pub static QUESTIONS: EntitySchema = EntitySchema {
    entity: "Question",
    table: "questions",
    fields: &[
        FieldSpec::optional(QUESTION_ENGLISH, FieldKind::Text),
        FieldSpec::optional("answerEnglish", FieldKind::Text),
        FieldSpec::optional(QUESTION_URDU, FieldKind::Text),
        FieldSpec::optional("answerUrdu", FieldKind::Text),
        FieldSpec::required("writer", FieldKind::Text),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::optional("tags", FieldKind::Text),
        FieldSpec::required("language", FieldKind::Text),
        FieldSpec::required("topic", FieldKind::Text),
        FieldSpec::optional("translator", FieldKind::Text),
    ],
    image: ImagePolicy::Required,
    publication: Publication::Unpublished,
    slug: SlugRule::FromQuestionText,
    list: &[
        Projection::plain("id"),
        Projection::plain("slug"),
        Projection::plain(QUESTION_ENGLISH),
        Projection::stripped("answerEnglish"),
        Projection::plain(QUESTION_URDU),
        Projection::stripped("answerUrdu"),
        Projection::plain("writer"),
        Projection::plain("date"),
        Projection::plain("tags"),
        Projection::plain("language"),
        Projection::plain("topic"),
        Projection::plain("translator"),
        Projection::plain("views"),
        Projection::plain("createdOn"),
        Projection::plain("isPublished"),
        Projection::plain("modifiedOn"),
        Projection::plain("isDeleted"),
    ],
    detail: &[
        Projection::plain("id"),
        Projection::plain("slug"),
        Projection::plain(QUESTION_ENGLISH),
        Projection::stripped("answerEnglish"),
        Projection::plain(QUESTION_URDU),
        Projection::stripped("answerUrdu"),
        Projection::plain("writer"),
        Projection::plain("date"),
        Projection::plain("tags"),
        Projection::plain("language"),
        Projection::plain("topic"),
        Projection::plain("translator"),
        Projection::plain("views"),
        Projection::plain("createdOn"),
        Projection::plain("isPublished"),
        Projection::plain("modifiedOn"),
        Projection::plain("isDeleted"),
    ],
    patchable: &[QUESTION_ENGLISH, "answerEnglish", QUESTION_URDU, "answerUrdu"],
    delete: DeletePolicy {
        scope: RowScope::Any,
        require_match: true,
    },
    create_reply: CreateReply {
        created_status: true,
        id_key: Some("id"),
    },
    patch_reply: PatchReply::Message,
    messages: Messages {
        created: "Question created successfully!",
        updated: "Question updated successfully!",
        deleted: "Question deleted (soft delete) successfully!",
        not_found: "Question not found.",
        gone: "Question not found.",
        image_not_found: "Image not found.",
        missing_fields: "Required fields (except question/answer, tags, translator) are missing.",
        empty_patch: "No fields provided for update.",
    },
};
