//! Entity schema descriptors
//!
//! A descriptor says everything the generic content manager needs to know
//! about one table: which inputs are required, how they are parsed, what each
//! read projects and which quirks the entity's delete and patch replies carry.

use crate::db::RowScope;

/// How a submitted string is turned into a column value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed text; empty-after-trim is NULL
    Text,
    /// Calendar date (`YYYY-MM-DD` or RFC 3339)
    Date,
    /// 0/1 flag; `"true"` and `"1"` set it
    Flag,
}

/// One caller-supplied column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub column: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(column: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            kind,
            required: true,
        }
    }

    pub const fn optional(column: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            kind,
            required: false,
        }
    }
}

/// Whether a create must carry an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePolicy {
    Optional,
    Required,
}

/// Initial publication state at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publication {
    /// `isPublished` is one of the entity's required fields
    Supplied,
    /// `isPublished` is written as 0
    Unpublished,
    /// The table has no publication column
    Implicit,
}

/// How the `slug` column is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugRule {
    None,
    /// Trimmed title, set once at creation
    FromTitle,
    /// Caller's slug or one derived from the question text; regenerated on patch
    /// when a question text changes
    FromQuestionText,
}

/// Soft-delete filtering and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePolicy {
    pub scope: RowScope,
    /// Report not-found when the update matched no row
    pub require_match: bool,
}

/// A column in a read projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub column: &'static str,
    pub strip_html: bool,
}

impl Projection {
    pub const fn plain(column: &'static str) -> Self {
        Self {
            column,
            strip_html: false,
        }
    }

    pub const fn stripped(column: &'static str) -> Self {
        Self {
            column,
            strip_html: true,
        }
    }
}

/// Shape of a successful create reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateReply {
    /// 201 instead of 200
    pub created_status: bool,
    /// Key under which the new id is echoed, if at all
    pub id_key: Option<&'static str>,
}

/// Shape of a successful patch reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchReply {
    Message,
    /// The caller's fields plus `id` and `modifiedOn`
    EchoFields,
}

/// User-facing texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub not_found: &'static str,
    pub gone: &'static str,
    pub image_not_found: &'static str,
    pub missing_fields: &'static str,
    pub empty_patch: &'static str,
}

/// Complete description of one content table
#[derive(Debug)]
pub struct EntitySchema {
    /// Display name, e.g. `Article`
    pub entity: &'static str,
    pub table: &'static str,
    pub fields: &'static [FieldSpec],
    pub image: ImagePolicy,
    pub publication: Publication,
    pub slug: SlugRule,
    pub list: &'static [Projection],
    pub detail: &'static [Projection],
    /// Columns a patch may overwrite, in statement order (image excluded)
    pub patchable: &'static [&'static str],
    pub delete: DeletePolicy,
    pub create_reply: CreateReply,
    pub patch_reply: PatchReply,
    pub messages: Messages,
}

impl EntitySchema {
    pub fn field(&self, column: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.column == column)
    }

    pub fn list_columns(&self) -> Vec<&'static str> {
        self.list.iter().map(|p| p.column).collect()
    }

    pub fn detail_columns(&self) -> Vec<&'static str> {
        self.detail.iter().map(|p| p.column).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::columns;
    use crate::models::{ALL_SCHEMAS, ARTICLES};

    #[test]
    fn test_patchable_columns_are_declared_fields() {
        for schema in ALL_SCHEMAS {
            for column in schema.patchable {
                assert!(
                    schema.field(column).is_some(),
                    "{}: patchable {} is not a field",
                    schema.entity,
                    column
                );
            }
        }
    }

    #[test]
    fn test_projections_never_include_image() {
        for schema in ALL_SCHEMAS {
            assert!(!schema.list_columns().contains(&columns::IMAGE));
            assert!(!schema.detail_columns().contains(&columns::IMAGE));
            assert_eq!(schema.list_columns()[0], columns::ID);
        }
    }

    #[test]
    fn test_detail_carries_lifecycle_columns() {
        for schema in ALL_SCHEMAS {
            let detail = schema.detail_columns();
            for column in [
                columns::VIEWS,
                columns::CREATED_ON,
                columns::MODIFIED_ON,
                columns::IS_DELETED,
            ] {
                assert!(detail.contains(&column), "{} lacks {}", schema.entity, column);
            }
        }
    }

    #[test]
    fn test_article_detail_keeps_markup() {
        assert!(ARTICLES.detail.iter().all(|p| !p.strip_html));
        assert!(ARTICLES.list.iter().any(|p| p.strip_html));
    }
}
