//! Parameterized SQL statements and their builders
//!
//! Column names come from the static entity schemas and are always quoted, so
//! the camelCase names survive Postgres' identifier folding. Values are never
//! interpolated: every value is a `$n` placeholder whose number is its position
//! in `params`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::constants::columns;

/// A typed statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    SmallInt(i16),
    BigInt(i64),
    Text(Option<String>),
    Bytes(Option<Vec<u8>>),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Some(value.into()))
    }
}

/// SQL text plus its ordered parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter; the caller's SQL must already reference `$n` for it
    pub fn bind(mut self, value: SqlValue) -> Self {
        self.params.push(value);
        self
    }

    /// Number of distinct `$n` placeholders referenced by the SQL text
    pub fn placeholder_count(&self) -> usize {
        let mut highest = 0;
        let mut chars = self.sql.char_indices().peekable();
        while let Some((start, c)) = chars.next() {
            if c != '$' {
                continue;
            }
            let mut end = start + 1;
            while let Some(&(i, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                end = i + 1;
                chars.next();
            }
            if let Ok(n) = self.sql[start + 1..end].parse::<usize>() {
                highest = highest.max(n);
            }
        }
        highest
    }
}

/// Whether a statement may touch soft-deleted rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowScope {
    /// `AND "isDeleted" = 0`
    Active,
    /// No deleted-flag filter
    Any,
}

impl RowScope {
    fn clause(self) -> String {
        match self {
            RowScope::Active => format!(" AND {} = 0", quote(columns::IS_DELETED)),
            RowScope::Any => String::new(),
        }
    }
}

/// Quote an identifier
pub fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier)
}

/// `SELECT` of the given columns from the non-deleted rows of `table`, newest first
pub fn select_active(table: &str, projection: &[&str]) -> Statement {
    Statement::new(format!(
        "SELECT {} FROM {} WHERE {} = 0 ORDER BY {} DESC",
        column_list(projection),
        quote(table),
        quote(columns::IS_DELETED),
        quote(columns::CREATED_ON),
    ))
}

/// `SELECT` of the given columns from one non-deleted row of `table`
pub fn select_active_by_id(table: &str, projection: &[&str], id: i64) -> Statement {
    Statement::new(format!(
        "SELECT {} FROM {} WHERE {} = $1{}",
        column_list(projection),
        quote(table),
        quote(columns::ID),
        RowScope::Active.clause(),
    ))
    .bind(SqlValue::BigInt(id))
}

/// Flip the soft-delete flag and touch `modifiedOn`
pub fn soft_delete(table: &str, id: i64, modified_on: DateTime<Utc>, scope: RowScope) -> Statement {
    Statement::new(format!(
        "UPDATE {} SET {} = 1, {} = $1 WHERE {} = $2{}",
        quote(table),
        quote(columns::IS_DELETED),
        quote(columns::MODIFIED_ON),
        quote(columns::ID),
        scope.clause(),
    ))
    .bind(SqlValue::Timestamp(modified_on))
    .bind(SqlValue::BigInt(id))
}

fn column_list(projection: &[&str]) -> String {
    projection
        .iter()
        .map(|c| quote(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds a single-row `INSERT ... RETURNING id`
#[derive(Debug)]
pub struct InsertBuilder {
    table: &'static str,
    columns: Vec<&'static str>,
    params: Vec<SqlValue>,
}

impl InsertBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn value(&mut self, column: &'static str, value: SqlValue) -> &mut Self {
        self.columns.push(column);
        self.params.push(value);
        self
    }

    pub fn build(self) -> Statement {
        let placeholders = (1..=self.params.len())
            .map(|n| format!("${}", n))
            .collect::<Vec<_>>()
            .join(", ");

        Statement {
            sql: format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
                quote(self.table),
                column_list(&self.columns),
                placeholders,
                quote(columns::ID),
            ),
            params: self.params,
        }
    }
}

/// Assembles a partial `UPDATE` from only the fields a caller supplied.
///
/// Assignments keep insertion order. `build` always appends the `modifiedOn`
/// touch, then scopes the statement to one id.
#[derive(Debug)]
pub struct UpdateBuilder {
    table: &'static str,
    assignments: Vec<&'static str>,
    params: Vec<SqlValue>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn set(&mut self, column: &'static str, value: SqlValue) -> &mut Self {
        self.assignments.push(column);
        self.params.push(value);
        self
    }

    /// True when no caller-supplied field has been added
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn build(mut self, modified_on: DateTime<Utc>, id: i64, scope: RowScope) -> Statement {
        self.set(columns::MODIFIED_ON, SqlValue::Timestamp(modified_on));

        let set_clause = self
            .assignments
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", quote(column), i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        let id_placeholder = self.params.len() + 1;
        self.params.push(SqlValue::BigInt(id));

        Statement {
            sql: format!(
                "UPDATE {} SET {} WHERE {} = ${}{}",
                quote(self.table),
                set_clause,
                quote(columns::ID),
                id_placeholder,
                scope.clause(),
            ),
            params: self.params,
        }
    }
}

/// One result row: column name to JSON value, in projection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.columns.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.columns
            .iter_mut()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    /// Text value of a column, `None` when absent or SQL NULL
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
