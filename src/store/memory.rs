//! In-process store with the same row semantics as [`PgStore`](super::PgStore).
//!
//! Rows are kept per table in insertion order, which is the "as stored" order for unordered
//! lists. Serial columns left at zero get the next value; `TimestampNow` columns left null get
//! the current time; a duplicate key is a conflict.

use crate::error::StoreError;
use crate::paging::Page;
use crate::store::RecordStore;
use crate::table::{from_row, to_row, RecordKey, Table, TableSpec};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type Row = Map<String, Value>;

#[derive(Default)]
struct MemTable {
    rows: Vec<Row>,
    /// Last value handed out per serial column.
    serials: HashMap<&'static str, i64>,
}

impl MemTable {
    fn position(&self, spec: &TableSpec, key: &RecordKey) -> Option<usize> {
        self.rows.iter().position(|r| key.matches(spec, r))
    }

    fn fill_defaults(&mut self, spec: &TableSpec, row: &mut Row) {
        for c in spec.columns.iter().filter(|c| c.ty.has_default()) {
            if c.ty.is_serial() {
                let last = self.serials.entry(c.name).or_insert(0);
                match row.get(c.name).and_then(Value::as_i64) {
                    Some(n) if n != 0 => *last = (*last).max(n),
                    _ => {
                        *last += 1;
                        row.insert(c.name.to_string(), Value::from(*last));
                    }
                }
            } else if c.ty.is_unset(row.get(c.name)) {
                let now = chrono::Utc::now().naive_utc();
                row.insert(c.name.to_string(), serde_json::to_value(now).unwrap_or(Value::Null));
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<HashMap<&'static str, MemTable>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Postgres-like ordering: NULL sorts after every value ascending.
fn cmp_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn count<T: Table>(&self) -> Result<i64, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.get(T::SPEC.name).map(|t| t.rows.len() as i64).unwrap_or(0))
    }

    async fn fetch_page<T: Table>(&self, page: &Page) -> Result<Vec<T>, StoreError> {
        let mut rows: Vec<Row> = {
            let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
            tables.get(T::SPEC.name).map(|t| t.rows.clone()).unwrap_or_default()
        };
        if !page.order.is_empty() {
            rows.sort_by(|a, b| {
                for term in page.order.terms() {
                    let ord = cmp_values(a.get(term.column), b.get(term.column));
                    let ord = if term.descending { ord.reverse() } else { ord };
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            });
        }
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(0);
        rows.into_iter()
            .skip(offset)
            .take(limit)
            .map(|r| from_row::<T>(r).map_err(StoreError::from))
            .collect()
    }

    async fn fetch_one<T: Table>(&self, key: &RecordKey) -> Result<Option<T>, StoreError> {
        let row = {
            let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
            tables
                .get(T::SPEC.name)
                .and_then(|t| t.rows.iter().find(|r| key.matches(&T::SPEC, r)).cloned())
        };
        row.map(from_row::<T>).transpose().map_err(StoreError::from)
    }

    async fn insert<T: Table>(&self, record: &T) -> Result<T, StoreError> {
        let mut row = to_row(record)?;
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        let table = tables.entry(T::SPEC.name).or_default();
        table.fill_defaults(&T::SPEC, &mut row);
        let key = RecordKey::of_row(&T::SPEC, &row)
            .ok_or_else(|| StoreError::Conflict(format!("{}: row has no full key", T::SPEC.name)))?;
        if table.position(&T::SPEC, &key).is_some() {
            return Err(StoreError::Conflict(format!(
                "{}: duplicate key {}",
                T::SPEC.name,
                key
            )));
        }
        table.rows.push(row.clone());
        Ok(from_row(row)?)
    }

    async fn update<T: Table>(&self, key: &RecordKey, record: &T) -> Result<Option<T>, StoreError> {
        let mut row = to_row(record)?;
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        let Some(table) = tables.get_mut(T::SPEC.name) else {
            return Ok(None);
        };
        let Some(idx) = table.position(&T::SPEC, key) else {
            return Ok(None);
        };
        for (col, v) in key.pairs(&T::SPEC) {
            row.insert(col.to_string(), v.clone());
        }
        table.rows[idx] = row.clone();
        Ok(Some(from_row(row)?))
    }

    async fn delete<T: Table>(&self, key: &RecordKey) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        let Some(table) = tables.get_mut(T::SPEC.name) else {
            return Ok(0);
        };
        let before = table.rows.len();
        table.rows.retain(|r| !key.matches(&T::SPEC, r));
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let _guard = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(())
    }
}
