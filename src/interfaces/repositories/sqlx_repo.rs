use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::document::{Document, Fields},
    errors::AppError,
    repositories::collection::DocumentCollection,
};

/// SQLSTATE class 22 (data exception) and 23 (integrity constraint violation)
/// mean the row itself was refused; anything else is a storage failure.
fn insert_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(e) if e.code().is_some_and(|c| c.starts_with("22") || c.starts_with("23")) => {
            AppError::Rejected(e.message().to_string())
        }
        _ => AppError::from(err),
    }
}

/// A collection backed by one Postgres table named after `T::COLLECTION`.
pub struct SqlxCollection<T> {
    pub pool: PgPool,
    _document: PhantomData<fn() -> T>,
}

impl<T> Clone for SqlxCollection<T> {
    fn clone(&self) -> Self {
        SqlxCollection::new(self.pool.clone())
    }
}

impl<T> SqlxCollection<T> {
    pub fn new(pool: PgPool) -> Self {
        SqlxCollection { pool, _document: PhantomData }
    }
}

#[async_trait]
impl<T> DocumentCollection<T> for SqlxCollection<T>
where
    T: Document + for<'r> FromRow<'r, PgRow>,
{
    async fn insert_one(&self, doc: &T::New, created_at: DateTime<Utc>) -> Result<Uuid, AppError> {
        let values = doc.field_values();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!("INSERT INTO {} (", T::COLLECTION));
        {
            let mut columns = builder.separated(", ");
            for (column, _) in &values {
                columns.push(*column);
            }
            columns.push("created_at");
        }
        builder.push(") VALUES (");
        {
            let mut binds = builder.separated(", ");
            for (_, value) in values {
                binds.push_bind(value);
            }
            binds.push_bind(created_at);
        }
        builder.push(") RETURNING id");

        let id: Uuid = builder
            .build_query_scalar::<Uuid>()
            .fetch_one(&self.pool)
            .await
            .map_err(insert_error)?;

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<T>, AppError> {
        let docs = sqlx::query_as::<_, T>(&format!("SELECT * FROM {}", T::COLLECTION))
            .fetch_all(&self.pool)
            .await?;

        Ok(docs)
    }

    async fn update_one(&self, id: &Uuid, patch: &T::Patch, now: DateTime<Utc>) -> Result<u64, AppError> {
        let values = patch.field_values();
        if values.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!("UPDATE {} SET ", T::COLLECTION));
        {
            let mut assignments = builder.separated(", ");
            for (column, value) in &values {
                assignments.push(format!("{column} = "));
                assignments.push_bind_unseparated(value.clone());
            }
            assignments.push("created_at = ");
            assignments.push_bind_unseparated(now);
        }

        builder.push(" WHERE id = ").push_bind(*id);

        // Only count the row as modified when a supplied value differs.
        builder.push(" AND (");
        {
            let mut differs = builder.separated(" OR ");
            for (column, value) in values {
                differs.push(format!("{column} IS DISTINCT FROM "));
                differs.push_bind_unseparated(value);
            }
        }
        builder.push(")");

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete_one(&self, id: &Uuid) -> Result<u64, AppError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", T::COLLECTION))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }
}
