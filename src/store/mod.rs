//! Storage backends. Each operation is one independent statement; no transactions span calls.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::StoreError;
use crate::paging::Page;
use crate::table::{RecordKey, Table};
use async_trait::async_trait;

/// Primitive row operations over any [`Table`].
///
/// The error taxonomy exposed to clients lives in [`CrudService`](crate::service::CrudService);
/// stores only report what went wrong with the statement.
#[async_trait]
pub trait RecordStore: Clone + Send + Sync + 'static {
    /// Number of rows in the whole table.
    async fn count<T: Table>(&self) -> Result<i64, StoreError>;

    async fn fetch_page<T: Table>(&self, page: &Page) -> Result<Vec<T>, StoreError>;

    async fn fetch_one<T: Table>(&self, key: &RecordKey) -> Result<Option<T>, StoreError>;

    /// Insert and return the stored row, including values the store assigned.
    async fn insert<T: Table>(&self, record: &T) -> Result<T, StoreError>;

    /// Overwrite every non-key column of the row at `key`. None when no row matched.
    async fn update<T: Table>(&self, key: &RecordKey, record: &T) -> Result<Option<T>, StoreError>;

    /// Returns rows affected.
    async fn delete<T: Table>(&self, key: &RecordKey) -> Result<u64, StoreError>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}
