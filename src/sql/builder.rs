//! Builds parameterized COUNT, SELECT, INSERT, UPDATE, DELETE from a table spec.

use crate::paging::Page;
use crate::table::{RecordKey, TableSpec};
use serde_json::{Map, Value};

/// Quote identifier for PostgreSQL (safe: only from table specs).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }

    /// Push a value and return its placeholder, cast to the column's type.
    fn placeholder(&mut self, spec: &TableSpec, column: &str, v: Value) -> String {
        let n = self.push_param(v);
        spec.column(column)
            .map(|c| format!("${}::{}", n, c.ty.pg_type()))
            .unwrap_or_else(|| format!("${}", n))
    }

    /// `"a" = $1::text AND "b" = $2::bigint` over every key column.
    fn key_predicate(&mut self, spec: &TableSpec, key: &RecordKey) -> String {
        key.pairs(spec)
            .map(|(col, v)| {
                let ph = self.placeholder(spec, col, v.clone());
                format!("{} = {}", quoted(col), ph)
            })
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

fn select_column_list(spec: &TableSpec) -> String {
    spec.columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve schema: override if present, else the table's schema.
fn resolve_schema<'a>(spec: &'a TableSpec, schema_override: Option<&'a str>) -> &'a str {
    schema_override.unwrap_or(spec.schema)
}

fn table_ref(spec: &TableSpec, schema_override: Option<&str>) -> String {
    qualified_table(resolve_schema(spec, schema_override), spec.name)
}

/// COUNT over the whole table, independent of paging.
pub fn count(spec: &TableSpec, schema_override: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT COUNT(*) FROM {}", table_ref(spec, schema_override));
    q
}

/// SELECT one page. ORDER BY only when an order was requested; OFFSET only when non-zero.
pub fn select_page(spec: &TableSpec, page: &Page, schema_override: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let order_clause = if page.order.is_empty() {
        String::new()
    } else {
        let terms: Vec<String> = page
            .order
            .terms()
            .iter()
            .map(|t| format!("{} {}", quoted(t.column), if t.descending { "DESC" } else { "ASC" }))
            .collect();
        format!(" ORDER BY {}", terms.join(", "))
    };
    let limit_clause = format!(" LIMIT {}", page.limit());
    let offset = page.offset();
    let offset_clause = if offset > 0 {
        format!(" OFFSET {}", offset)
    } else {
        String::new()
    };
    q.sql = format!(
        "SELECT {} FROM {}{}{}{}",
        select_column_list(spec),
        table_ref(spec, schema_override),
        order_clause,
        limit_clause,
        offset_clause
    );
    q
}

/// SELECT by full key (single or composite).
pub fn select_by_key(spec: &TableSpec, key: &RecordKey, schema_override: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let predicate = q.key_predicate(spec, key);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {}",
        select_column_list(spec),
        table_ref(spec, schema_override),
        predicate
    );
    q
}

/// INSERT every column from `row`, except columns with a database default that the row leaves unset.
pub fn insert(spec: &TableSpec, row: &Map<String, Value>, schema_override: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = table_ref(spec, schema_override);
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for c in spec.columns {
        let val = row.get(c.name);
        if c.ty.has_default() && c.ty.is_unset(val) {
            continue;
        }
        let ph = q.placeholder(spec, c.name, val.cloned().unwrap_or(Value::Null));
        cols.push(quoted(c.name));
        placeholders.push(ph);
    }
    let returning = select_column_list(spec);
    q.sql = if cols.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", table, returning)
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            table,
            cols.join(", "),
            placeholders.join(", "),
            returning
        )
    };
    q
}

/// UPDATE by key: SET every non-key column from `row` (missing columns become NULL).
/// A table whose columns are all key columns has nothing to set; that yields a plain SELECT.
pub fn update_by_key(
    spec: &TableSpec,
    key: &RecordKey,
    row: &Map<String, Value>,
    schema_override: Option<&str>,
) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = table_ref(spec, schema_override);
    let mut sets = Vec::new();
    for c in spec.columns.iter().filter(|c| !spec.is_key(c.name)) {
        let v = row.get(c.name).cloned().unwrap_or(Value::Null);
        let ph = q.placeholder(spec, c.name, v);
        sets.push(format!("{} = {}", quoted(c.name), ph));
    }
    let predicate = q.key_predicate(spec, key);
    let returning = select_column_list(spec);
    q.sql = if sets.is_empty() {
        format!("SELECT {} FROM {} WHERE {}", returning, table, predicate)
    } else {
        format!(
            "UPDATE {} SET {} WHERE {} RETURNING {}",
            table,
            sets.join(", "),
            predicate,
            returning
        )
    };
    q
}

/// DELETE by full key.
pub fn delete_by_key(spec: &TableSpec, key: &RecordKey, schema_override: Option<&str>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let predicate = q.key_predicate(spec, key);
    q.sql = format!("DELETE FROM {} WHERE {}", table_ref(spec, schema_override), predicate);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::OrderSpec;
    use crate::table::{Column, ColumnType};
    use serde_json::json;

    const USERS: TableSpec = TableSpec {
        schema: "public",
        name: "users",
        path: "users_",
        columns: &[
            Column {
                name: "id",
                ty: ColumnType::BigSerial,
            },
            Column {
                name: "name",
                ty: ColumnType::Text,
            },
            Column {
                name: "created_at",
                ty: ColumnType::TimestampNow,
            },
        ],
        key: &["id"],
    };

    const BROKER_LINK: TableSpec = TableSpec {
        schema: "public",
        name: "broker_link",
        path: "brokerlink",
        columns: &[
            Column {
                name: "identity_provider",
                ty: ColumnType::Text,
            },
            Column {
                name: "user_id",
                ty: ColumnType::Text,
            },
            Column {
                name: "broker_username",
                ty: ColumnType::Text,
            },
        ],
        key: &["identity_provider", "user_id"],
    };

    const WEB_ORIGINS: TableSpec = TableSpec {
        schema: "public",
        name: "web_origins",
        path: "weborigins",
        columns: &[
            Column {
                name: "client_id",
                ty: ColumnType::Text,
            },
            Column {
                name: "value",
                ty: ColumnType::Text,
            },
        ],
        key: &["client_id", "value"],
    };

    fn row(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&USERS, None).sql, r#"SELECT COUNT(*) FROM "public"."users""#);
        assert_eq!(
            count(&USERS, Some("keycloak")).sql,
            r#"SELECT COUNT(*) FROM "keycloak"."users""#
        );
    }

    #[test]
    fn test_select_page_first_page_has_no_offset() {
        let page = Page::new(0, 20, OrderSpec::default()).unwrap();
        let q = select_page(&USERS, &page, None);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "name", "created_at" FROM "public"."users" LIMIT 20"#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn test_select_page_with_order_and_offset() {
        let order = OrderSpec::parse(&USERS, "name desc,id").unwrap();
        let page = Page::new(3, 10, order).unwrap();
        let q = select_page(&USERS, &page, None);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "name", "created_at" FROM "public"."users" ORDER BY "name" DESC, "id" ASC LIMIT 10 OFFSET 20"#
        );
    }

    #[test]
    fn test_select_by_composite_key_binds_every_component() {
        let key = RecordKey::parse(&BROKER_LINK, "github/u-1").unwrap();
        let q = select_by_key(&BROKER_LINK, &key, None);
        assert_eq!(
            q.sql,
            r#"SELECT "identity_provider", "user_id", "broker_username" FROM "public"."broker_link" WHERE "identity_provider" = $1::text AND "user_id" = $2::text"#
        );
        assert_eq!(q.params, vec![json!("github"), json!("u-1")]);
    }

    #[test]
    fn test_insert_skips_unset_defaulted_columns() {
        let q = insert(&USERS, &row(json!({"id": 0, "name": "Alice", "created_at": null})), None);
        assert_eq!(
            q.sql,
            r#"INSERT INTO "public"."users" ("name") VALUES ($1::text) RETURNING "id", "name", "created_at""#
        );
        assert_eq!(q.params, vec![json!("Alice")]);
    }

    #[test]
    fn test_insert_keeps_explicit_serial() {
        let q = insert(
            &USERS,
            &row(json!({"id": 9, "name": "Alice", "created_at": "2024-01-01T00:00:00"})),
            None,
        );
        assert_eq!(
            q.sql,
            r#"INSERT INTO "public"."users" ("id", "name", "created_at") VALUES ($1::bigint, $2::text, $3::timestamp) RETURNING "id", "name", "created_at""#
        );
        assert_eq!(q.params.len(), 3);
    }

    #[test]
    fn test_update_sets_every_non_key_column() {
        let key = RecordKey::parse(&USERS, "5").unwrap();
        let q = update_by_key(&USERS, &key, &row(json!({"id": 5, "name": "Bob"})), None);
        assert_eq!(
            q.sql,
            r#"UPDATE "public"."users" SET "name" = $1::text, "created_at" = $2::timestamp WHERE "id" = $3::bigint RETURNING "id", "name", "created_at""#
        );
        assert_eq!(q.params, vec![json!("Bob"), Value::Null, json!(5)]);
    }

    #[test]
    fn test_update_of_key_only_table_is_select() {
        let key = RecordKey::parse(&WEB_ORIGINS, "c1/https:").unwrap();
        let q = update_by_key(&WEB_ORIGINS, &key, &Map::new(), None);
        assert!(q.sql.starts_with(r#"SELECT "client_id", "value" FROM "public"."web_origins" WHERE"#));
    }

    #[test]
    fn test_delete_by_key() {
        let key = RecordKey::parse(&BROKER_LINK, "github/u-1").unwrap();
        let q = delete_by_key(&BROKER_LINK, &key, None);
        assert_eq!(
            q.sql,
            r#"DELETE FROM "public"."broker_link" WHERE "identity_provider" = $1::text AND "user_id" = $2::text"#
        );
    }
}
