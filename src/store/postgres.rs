//! PostgreSQL store over an explicitly passed `PgPool`.

use crate::error::StoreError;
use crate::paging::Page;
use crate::sql::{count, delete_by_key, insert, select_by_key, select_page, update_by_key, PgBindValue, QueryBuf};
use crate::store::RecordStore;
use crate::table::{to_row, RecordKey, Table};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    /// Replaces every table's own schema when set.
    schema: Option<String>,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool, schema: None }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }
}

fn bind_as<'q, T>(q: &'q QueryBuf) -> QueryAs<'q, Postgres, T, PgArguments>
where
    T: Table,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in &q.params {
        query = query.bind(PgBindValue::from_json(p));
    }
    query
}

#[async_trait]
impl RecordStore for PgStore {
    async fn count<T: Table>(&self) -> Result<i64, StoreError> {
        let q = count(&T::SPEC, self.schema());
        tracing::debug!(sql = %q.sql, "query");
        let n = sqlx::query_scalar::<_, i64>(&q.sql).fetch_one(&self.pool).await?;
        Ok(n)
    }

    async fn fetch_page<T: Table>(&self, page: &Page) -> Result<Vec<T>, StoreError> {
        let q = select_page(&T::SPEC, page, self.schema());
        let rows = bind_as::<T>(&q).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn fetch_one<T: Table>(&self, key: &RecordKey) -> Result<Option<T>, StoreError> {
        let q = select_by_key(&T::SPEC, key, self.schema());
        let row = bind_as::<T>(&q).fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn insert<T: Table>(&self, record: &T) -> Result<T, StoreError> {
        let row = to_row(record)?;
        let q = insert(&T::SPEC, &row, self.schema());
        let stored = bind_as::<T>(&q).fetch_one(&self.pool).await?;
        Ok(stored)
    }

    async fn update<T: Table>(&self, key: &RecordKey, record: &T) -> Result<Option<T>, StoreError> {
        let row = to_row(record)?;
        let q = update_by_key(&T::SPEC, key, &row, self.schema());
        let stored = bind_as::<T>(&q).fetch_optional(&self.pool).await?;
        Ok(stored)
    }

    async fn delete<T: Table>(&self, key: &RecordKey) -> Result<u64, StoreError> {
        let q = delete_by_key(&T::SPEC, key, self.schema());
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p));
        }
        let done = query.execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
