//! Generic content manager
//!
//! One implementation of create / list / get / image / patch / soft-delete,
//! driven by an [`EntitySchema`]. Articles, events, questions and writers
//! differ only in their descriptors.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::{
    constants::columns,
    db::{
        statement::{select_active, select_active_by_id, soft_delete},
        InsertBuilder, QueryExecutor, Row, RowScope, SqlValue, UpdateBuilder,
    },
    error::{AppError, AppResult},
    models::{
        question::{QUESTION_ENGLISH, QUESTION_URDU},
        EntitySchema, FieldInput, FieldKind, FieldSpec, ImagePolicy, Projection, Publication,
        SlugRule, Submission,
    },
    utils::{clean_text, parse_date, parse_flag, slugify, strip_html, Clock},
};

/// Result of a successful patch
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    pub modified_on: DateTime<Utc>,
    /// `id`, each supplied field with its stored value, then `modifiedOn`
    pub echo: Row,
}

/// CRUD + patch manager for one content table
#[derive(Clone)]
pub struct ContentManager {
    schema: &'static EntitySchema,
    executor: Arc<dyn QueryExecutor>,
    clock: Arc<dyn Clock>,
}

impl ContentManager {
    pub fn new(
        schema: &'static EntitySchema,
        executor: Arc<dyn QueryExecutor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            schema,
            executor,
            clock,
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    /// Validate and insert a new row, returning its id
    pub async fn create(&self, mut submission: Submission) -> AppResult<i64> {
        let schema = self.schema;
        let mut missing = Vec::new();
        let mut values = Vec::with_capacity(schema.fields.len());

        for spec in schema.fields {
            let value = convert(spec, &submission.field(spec.column))?;
            if spec.required && is_null(&value) {
                missing.push(spec.column);
            }
            values.push((spec.column, value));
        }

        let image = submission.take_image();
        if schema.image == ImagePolicy::Required && image.is_none() {
            missing.push(columns::IMAGE);
        }

        let slug = self.initial_slug(&submission);
        // an event's slug is its title, already reported above
        if schema.slug == SlugRule::FromQuestionText && slug.is_none() {
            missing.push(columns::SLUG);
        }

        if !missing.is_empty() {
            tracing::debug!(entity = schema.entity, ?missing, "create rejected");
            return Err(AppError::validation(format!(
                "{} Missing: {}.",
                schema.messages.missing_fields,
                missing.join(", ")
            )));
        }

        let now = self.clock.now();
        let mut insert = InsertBuilder::new(schema.table);
        insert.value(columns::IMAGE, SqlValue::Bytes(image));
        if let Some(slug) = slug {
            insert.value(columns::SLUG, SqlValue::Text(Some(slug)));
        }
        for (column, value) in values {
            insert.value(column, value);
        }
        insert
            .value(columns::VIEWS, SqlValue::SmallInt(0))
            .value(columns::CREATED_ON, SqlValue::Timestamp(now));
        if schema.publication == Publication::Unpublished {
            insert.value(columns::IS_PUBLISHED, SqlValue::SmallInt(0));
        }
        insert
            .value(columns::MODIFIED_ON, SqlValue::Timestamp(now))
            .value(columns::IS_DELETED, SqlValue::SmallInt(0));

        let id = self
            .executor
            .insert(insert.build())
            .await
            .inspect_err(|e| self.log_storage_failure("create", e))?;

        tracing::info!(entity = schema.entity, id, "created");
        Ok(id)
    }

    /// All non-deleted rows, newest first, markup stripped from long text
    pub async fn list(&self) -> AppResult<Vec<Row>> {
        let statement = select_active(self.schema.table, &self.schema.list_columns());
        let rows = self
            .executor
            .fetch_rows(statement)
            .await
            .inspect_err(|e| self.log_storage_failure("list", e))?;

        Ok(rows
            .into_iter()
            .map(|row| apply_projection(row, self.schema.list))
            .collect())
    }

    /// One non-deleted row, without its image
    pub async fn get(&self, id: i64) -> AppResult<Row> {
        let statement = select_active_by_id(self.schema.table, &self.schema.detail_columns(), id);
        let row = self
            .executor
            .fetch_rows(statement)
            .await
            .inspect_err(|e| self.log_storage_failure("get", e))?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(self.schema.messages.not_found))?;

        Ok(apply_projection(row, self.schema.detail))
    }

    /// Raw image bytes of a non-deleted row
    pub async fn image(&self, id: i64) -> AppResult<Vec<u8>> {
        let statement = select_active_by_id(self.schema.table, &[columns::IMAGE], id);
        self.executor
            .fetch_blob(statement)
            .await
            .inspect_err(|e| self.log_storage_failure("image", e))?
            .ok_or_else(|| AppError::not_found(self.schema.messages.image_not_found))
    }

    /// Overwrite only the supplied fields of a non-deleted row
    pub async fn patch(&self, id: i64, mut submission: Submission) -> AppResult<PatchOutcome> {
        let schema = self.schema;
        let mut update = UpdateBuilder::new(schema.table);
        let mut echo = Row::new();
        echo.push(columns::ID, Value::from(id));

        if let Some(image) = submission.take_image() {
            update.set(columns::IMAGE, SqlValue::Bytes(Some(image)));
        }

        for column in schema.patchable {
            let input = submission.field(column);
            if input.is_absent() {
                continue;
            }
            let Some(spec) = schema.field(column) else {
                continue;
            };
            let value = convert(spec, &input)?;
            if spec.required && is_null(&value) {
                return Err(AppError::validation(format!("{} cannot be empty.", column)));
            }
            echo.push(*column, echo_value(&value));
            update.set(spec.column, value);
        }

        if update.is_empty() {
            return Err(AppError::validation(schema.messages.empty_patch));
        }

        if schema.slug == SlugRule::FromQuestionText {
            if let Some(slug) = self.regenerated_slug(id, &submission).await? {
                update.set(columns::SLUG, SqlValue::Text(Some(slug)));
            }
        }

        let now = self.clock.now();
        let statement = update.build(now, id, RowScope::Active);
        let affected = self
            .executor
            .execute(statement)
            .await
            .inspect_err(|e| self.log_storage_failure("patch", e))?;

        if affected == 0 {
            return Err(AppError::not_found(schema.messages.gone));
        }

        echo.push(columns::MODIFIED_ON, Value::from(format_timestamp(now)));
        tracing::info!(entity = schema.entity, id, "updated");
        Ok(PatchOutcome {
            modified_on: now,
            echo,
        })
    }

    /// Flip the soft-delete flag
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let policy = self.schema.delete;
        let statement = soft_delete(self.schema.table, id, self.clock.now(), policy.scope);
        let affected = self
            .executor
            .execute(statement)
            .await
            .inspect_err(|e| self.log_storage_failure("delete", e))?;

        if affected == 0 && policy.require_match {
            let message = match policy.scope {
                RowScope::Active => self.schema.messages.gone,
                RowScope::Any => self.schema.messages.not_found,
            };
            return Err(AppError::not_found(message));
        }

        tracing::info!(entity = self.schema.entity, id, affected, "soft deleted");
        Ok(())
    }

    fn initial_slug(&self, submission: &Submission) -> Option<String> {
        match self.schema.slug {
            SlugRule::None => None,
            SlugRule::FromTitle => submission.text("title").and_then(clean_text),
            SlugRule::FromQuestionText => submission
                .text(columns::SLUG)
                .and_then(clean_text)
                .or_else(|| derived_slug(submission.text(QUESTION_ENGLISH)))
                .or_else(|| derived_slug(submission.text(QUESTION_URDU))),
        }
    }

    /// New slug when a supplied question text differs from the stored one.
    /// English wins when both changed.
    async fn regenerated_slug(&self, id: i64, submission: &Submission) -> AppResult<Option<String>> {
        let english = submission.text(QUESTION_ENGLISH).and_then(clean_text);
        let urdu = submission.text(QUESTION_URDU).and_then(clean_text);
        if english.is_none() && urdu.is_none() {
            return Ok(None);
        }

        let statement =
            select_active_by_id(self.schema.table, &[QUESTION_ENGLISH, QUESTION_URDU], id);
        let current = self
            .executor
            .fetch_rows(statement)
            .await
            .inspect_err(|e| self.log_storage_failure("patch", e))?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(self.schema.messages.not_found))?;

        let changed = |candidate: Option<String>, column: &str| {
            candidate.filter(|text| current.text(column) != Some(text.as_str()))
        };

        let slug = changed(english, QUESTION_ENGLISH)
            .or_else(|| changed(urdu, QUESTION_URDU))
            .map(|text| slugify(&text))
            .filter(|slug| !slug.is_empty());

        Ok(slug)
    }

    fn log_storage_failure(&self, operation: &str, error: &AppError) {
        tracing::error!(
            entity = self.schema.entity,
            operation,
            error = %error,
            "storage call failed"
        );
    }
}

/// Turn one raw input into a typed parameter for `spec`'s column
fn convert(spec: &FieldSpec, input: &FieldInput) -> AppResult<SqlValue> {
    let text = match input {
        FieldInput::Value(raw) => clean_text(raw),
        FieldInput::Absent | FieldInput::Null => None,
    };

    match spec.kind {
        FieldKind::Text => Ok(SqlValue::Text(text)),
        FieldKind::Date => match text {
            Some(raw) => parse_date(&raw)
                .map(SqlValue::Date)
                .ok_or_else(|| AppError::validation("Invalid date format.")),
            None => Ok(SqlValue::Text(None)),
        },
        FieldKind::Flag => match text {
            Some(raw) => Ok(SqlValue::SmallInt(parse_flag(&raw))),
            None => Ok(SqlValue::Text(None)),
        },
    }
}

fn is_null(value: &SqlValue) -> bool {
    matches!(value, SqlValue::Text(None) | SqlValue::Bytes(None))
}

fn echo_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::SmallInt(v) => Value::from(*v),
        SqlValue::BigInt(v) => Value::from(*v),
        SqlValue::Text(v) => v.clone().map(Value::from).unwrap_or(Value::Null),
        SqlValue::Bytes(_) => Value::Null,
        SqlValue::Date(d) => Value::from(d.format("%Y-%m-%d").to_string()),
        SqlValue::Timestamp(t) => Value::from(format_timestamp(*t)),
    }
}

fn derived_slug(text: Option<&str>) -> Option<String> {
    text.map(slugify).filter(|slug| !slug.is_empty())
}

fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Strip markup from the projection's flagged text columns
fn apply_projection(mut row: Row, projection: &[Projection]) -> Row {
    for column in projection.iter().filter(|p| p.strip_html) {
        if let Some(value) = row.get_mut(column.column) {
            if let Value::String(text) = value {
                *text = strip_html(text);
            }
        }
    }
    row
}
