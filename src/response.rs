//! Response envelopes.

use crate::table::{Column, TableSpec};
use serde::Serialize;

/// List response: `{"page", "pageSize", "data", "totalRecords"}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    pub page: i64,
    pub page_size: i64,
    pub data: Vec<T>,
    pub total_records: i64,
}

/// One entry of the `GET /tables` catalogue.
#[derive(Clone, Debug, Serialize)]
pub struct TableInfo {
    pub schema: &'static str,
    pub name: &'static str,
    pub path: &'static str,
    pub key: &'static [&'static str],
    pub columns: &'static [Column],
}

impl From<&'static TableSpec> for TableInfo {
    fn from(spec: &'static TableSpec) -> Self {
        TableInfo {
            schema: spec.schema,
            name: spec.name,
            path: spec.path,
            key: spec.key,
            columns: spec.columns,
        }
    }
}
