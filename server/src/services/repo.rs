//! Generic CRUD repository over record tables.
//!
//! DESIGN
//! ======
//! Every resource is a flat row with a `BIGSERIAL id` plus scalar columns,
//! so one set of SQL builders serves all of them. A record type opts in by
//! implementing [`Table`], which names its table and columns and hands back
//! its column values in the same order.
//!
//! ERROR HANDLING
//! ==============
//! Postgres constraint violations are classified into [`RepoError`]
//! variants so routes can answer 409/422 instead of a blanket 500.

#[cfg(test)]
#[path = "repo_test.rs"]
mod repo_test;

use chrono::NaiveDate;
use records::Resource;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },
    #[error("duplicate value violates {0}")]
    Conflict(String),
    #[error("referenced record is missing or still in use ({0})")]
    Reference(String),
    #[error("value rejected by {0}")]
    Invalid(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if let Some(classified) = classify_violation(db.code().as_deref(), db.constraint()) {
                return classified;
            }
        }
        Self::Database(err)
    }
}

/// Map a Postgres SQLSTATE to a constraint-level error, if it is one.
pub(crate) fn classify_violation(code: Option<&str>, constraint: Option<&str>) -> Option<RepoError> {
    let name = constraint.unwrap_or("constraint").to_owned();
    match code? {
        "23505" => Some(RepoError::Conflict(name)),
        "23503" => Some(RepoError::Reference(name)),
        "23502" | "23514" => Some(RepoError::Invalid(name)),
        _ => None,
    }
}

/// A bindable column value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    OptText(Option<String>),
    Int(i64),
    Float(f64),
    OptFloat(Option<f64>),
    Date(NaiveDate),
    Bool(bool),
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<&Option<String>> for Value {
    fn from(v: &Option<String>) -> Self {
        Self::OptText(v.clone())
    }
}

impl From<&i64> for Value {
    fn from(v: &i64) -> Self {
        Self::Int(*v)
    }
}

impl From<&f64> for Value {
    fn from(v: &f64) -> Self {
        Self::Float(*v)
    }
}

impl From<&Option<f64>> for Value {
    fn from(v: &Option<f64>) -> Self {
        Self::OptFloat(*v)
    }
}

impl From<&NaiveDate> for Value {
    fn from(v: &NaiveDate) -> Self {
        Self::Date(*v)
    }
}

impl From<&bool> for Value {
    fn from(v: &bool) -> Self {
        Self::Bool(*v)
    }
}

/// A record type persisted as one row of `TABLE`.
pub trait Table: Resource + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;
    /// Data columns, excluding `id`.
    const COLUMNS: &'static [&'static str];

    /// Column values in [`Table::COLUMNS`] order.
    fn values(&self) -> Vec<Value>;
}

// =============================================================================
// SQL BUILDERS
// =============================================================================

fn returning<R: Table>() -> String {
    format!("id, {}", R::COLUMNS.join(", "))
}

fn push_value(qb: &mut QueryBuilder<'static, Postgres>, value: Value) {
    match value {
        Value::Text(v) => qb.push_bind(v),
        Value::OptText(v) => qb.push_bind(v),
        Value::Int(v) => qb.push_bind(v),
        Value::Float(v) => qb.push_bind(v),
        Value::OptFloat(v) => qb.push_bind(v),
        Value::Date(v) => qb.push_bind(v),
        Value::Bool(v) => qb.push_bind(v),
    };
}

pub(crate) fn select_sql<R: Table>() -> String {
    format!("SELECT {} FROM {}", returning::<R>(), R::TABLE)
}

pub(crate) fn insert_query<R: Table>(record: &R) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("INSERT INTO {} ({}) VALUES (", R::TABLE, R::COLUMNS.join(", ")));
    for (i, value) in record.values().into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, value);
    }
    qb.push(format!(") RETURNING {}", returning::<R>()));
    qb
}

pub(crate) fn update_query<R: Table>(id: i64, record: &R) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", R::TABLE));
    for (i, (column, value)) in R::COLUMNS.iter().zip(record.values()).enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(*column).push(" = ");
        push_value(&mut qb, value);
    }
    qb.push(" WHERE id = ").push_bind(id);
    qb.push(format!(" RETURNING {}", returning::<R>()));
    qb
}

// =============================================================================
// CRUD
// =============================================================================

/// List every row of `R`, ordered by id.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list<R: Table>(pool: &PgPool) -> Result<Vec<R>, RepoError> {
    let rows = sqlx::query_as::<_, R>(&format!("{} ORDER BY id", select_sql::<R>()))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch one row of `R`.
///
/// # Errors
///
/// Returns [`RepoError::NotFound`] when no row has `id`.
pub async fn get<R: Table>(pool: &PgPool, id: i64) -> Result<R, RepoError> {
    sqlx::query_as::<_, R>(&format!("{} WHERE id = $1", select_sql::<R>()))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(RepoError::NotFound { resource: R::TITLE, id })
}

/// Insert `record`, ignoring its id, and return the stored row.
///
/// # Errors
///
/// Returns a constraint or database error if the insert fails.
pub async fn insert<R: Table>(pool: &PgPool, record: &R) -> Result<R, RepoError> {
    let row = insert_query(record).build_query_as::<R>().fetch_one(pool).await?;
    Ok(row)
}

/// Overwrite every column of row `id` with `record`.
///
/// # Errors
///
/// Returns [`RepoError::NotFound`] when no row has `id`, or a constraint or
/// database error if the update fails.
pub async fn update<R: Table>(pool: &PgPool, id: i64, record: &R) -> Result<R, RepoError> {
    update_query(id, record)
        .build_query_as::<R>()
        .fetch_optional(pool)
        .await?
        .ok_or(RepoError::NotFound { resource: R::TITLE, id })
}

/// Delete row `id`.
///
/// # Errors
///
/// Returns [`RepoError::NotFound`] when no row has `id`, or
/// [`RepoError::Reference`] when other records still point at it.
pub async fn delete<R: Table>(pool: &PgPool, id: i64) -> Result<(), RepoError> {
    let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", R::TABLE))
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound { resource: R::TITLE, id });
    }
    Ok(())
}
