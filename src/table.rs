//! Per-table configuration and the record contract every mapped table implements.
//!
//! A table is declared once with [`table!`](crate::table!), which emits the record struct
//! (serde + `sqlx::FromRow`) and its [`Table`] impl. Everything else (SQL, routes, the
//! in-memory store) is driven by the resulting [`TableSpec`].

use crate::auth::Operation;
use crate::error::AppError;
use percent_encoding::percent_decode_str;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use std::fmt;

/// Column type as far as binding, key parsing and defaults are concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Text,
    SmallInt,
    Int,
    BigInt,
    Bool,
    Timestamp,
    /// Timestamp with a database-side default (e.g. `DEFAULT CURRENT_TIMESTAMP`).
    TimestampNow,
    Serial,
    BigSerial,
}

impl ColumnType {
    /// SQL type used to cast bound parameters.
    pub fn pg_type(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::SmallInt => "smallint",
            ColumnType::Int | ColumnType::Serial => "integer",
            ColumnType::BigInt | ColumnType::BigSerial => "bigint",
            ColumnType::Bool => "boolean",
            ColumnType::Timestamp | ColumnType::TimestampNow => "timestamp",
        }
    }

    /// Whether the database fills the column when INSERT leaves it out.
    pub fn has_default(self) -> bool {
        matches!(
            self,
            ColumnType::Serial | ColumnType::BigSerial | ColumnType::TimestampNow
        )
    }

    pub fn is_serial(self) -> bool {
        matches!(self, ColumnType::Serial | ColumnType::BigSerial)
    }

    /// Parse one key segment taken from a URL path. Returns None when it does not fit the type.
    pub fn parse_segment(self, raw: &str) -> Option<Value> {
        match self {
            ColumnType::Text => Some(Value::String(raw.to_string())),
            ColumnType::SmallInt => raw.parse::<i16>().ok().map(Value::from),
            ColumnType::Int | ColumnType::Serial => raw.parse::<i32>().ok().map(Value::from),
            ColumnType::BigInt | ColumnType::BigSerial => raw.parse::<i64>().ok().map(Value::from),
            ColumnType::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            ColumnType::Timestamp | ColumnType::TimestampNow => {
                chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|_| Value::String(raw.to_string()))
            }
        }
    }

    /// True when a value counts as "left unset" for a column with a database default.
    pub fn is_unset(self, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(Value::Number(n)) if self.is_serial() => n.as_i64() == Some(0),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Column {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: ColumnType,
}

/// Static description of one mapped table.
#[derive(Debug, Serialize)]
pub struct TableSpec {
    pub schema: &'static str,
    pub name: &'static str,
    /// Route segment: `/<path>` and `/<path>/<key..>`.
    pub path: &'static str,
    pub columns: &'static [Column],
    /// Key columns in declared order; path segments follow this order.
    pub key: &'static [&'static str],
}

impl TableSpec {
    pub fn column(&self, name: &str) -> Option<&'static Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn is_key(&self, name: &str) -> bool {
        self.key.iter().any(|k| *k == name)
    }

    /// Key columns resolved against the column list. Errors if a key column is not declared.
    pub fn key_columns(&self) -> Result<Vec<&'static Column>, AppError> {
        self.key
            .iter()
            .map(|k| {
                self.column(k).ok_or_else(|| {
                    AppError::BadParams(format!("{}: key column {} is not declared", self.name, k))
                })
            })
            .collect()
    }
}

/// A mapped table row.
///
/// The lifecycle hooks are no-ops unless a table overrides them: `prepare` and `validate`
/// run in the handler after the body is decoded, `before_save` runs right before a write.
pub trait Table:
    Serialize + DeserializeOwned + for<'r> sqlx::FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static
{
    const SPEC: TableSpec;

    fn prepare(&mut self) {}

    fn validate(&self, _op: Operation) -> Result<(), AppError> {
        Ok(())
    }

    fn before_save(&mut self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Record as a column-name → JSON value map.
pub fn to_row<T: Table>(record: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(record)? {
        Value::Object(m) => Ok(m),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "{} did not serialize to an object: {}",
            T::SPEC.name,
            other
        ))),
    }
}

pub fn from_row<T: Table>(row: Map<String, Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(row))
}

/// Full key of one row, values in the table's key column order.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordKey {
    values: Vec<Value>,
}

impl RecordKey {
    /// Parse `a/b/c` path segments. Every key component must be present and well typed.
    ///
    /// `raw` is still percent-encoded: it is split on `/` first and each segment is decoded
    /// afterwards, so a component may contain an encoded `/` (`%2F`).
    pub fn parse(spec: &TableSpec, raw: &str) -> Result<Self, AppError> {
        let parts: Vec<&str> = raw.split('/').collect();
        if parts.len() != spec.key.len() {
            return Err(AppError::BadParams(format!(
                "{} expects {} key segment(s) ({}), got {}",
                spec.name,
                spec.key.len(),
                spec.key.join(", "),
                parts.len()
            )));
        }
        let columns = spec.key_columns()?;
        let mut values = Vec::with_capacity(parts.len());
        for (col, part) in columns.iter().zip(parts) {
            if part.is_empty() {
                return Err(AppError::BadParams(format!("empty key segment for {}", col.name)));
            }
            let part = percent_decode_str(part)
                .decode_utf8()
                .map_err(|_| AppError::BadParams(format!("key segment for {} is not UTF-8", col.name)))?;
            let v = col.ty.parse_segment(&part).ok_or_else(|| {
                AppError::BadParams(format!("invalid {} for {}: {}", col.ty.pg_type(), col.name, part))
            })?;
            values.push(v);
        }
        Ok(RecordKey { values })
    }

    /// Key of a stored row. None when a key column is missing.
    pub fn of_row(spec: &TableSpec, row: &Map<String, Value>) -> Option<Self> {
        let values = spec
            .key
            .iter()
            .map(|k| row.get(*k).cloned())
            .collect::<Option<Vec<_>>>()?;
        Some(RecordKey { values })
    }

    pub fn matches(&self, spec: &TableSpec, row: &Map<String, Value>) -> bool {
        spec.key
            .iter()
            .zip(&self.values)
            .all(|(k, v)| row.get(*k) == Some(v))
    }

    /// (column, value) pairs in key order.
    pub fn pairs<'a>(&'a self, spec: &'a TableSpec) -> impl Iterator<Item = (&'static str, &'a Value)> + 'a {
        spec.key.iter().copied().zip(self.values.iter())
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match v {
                Value::String(s) => f.write_str(s)?,
                other => write!(f, "{}", other)?,
            }
        }
        Ok(())
    }
}

/// Declare a mapped table: the record struct plus its [`Table`] impl.
///
/// ```ignore
/// table! {
///     /// Password reset tokens.
///     pub struct PasswordReset in "password_resets" at "password_resets" {
///         key: ["email", "token"],
///         email: String => Text,
///         token: String => Text,
///         created_at: Option<NaiveDateTime> => Timestamp,
///     }
/// }
/// ```
///
/// A field whose column name is a Rust keyword is written `field as "column": Ty => Kind`.
/// An optional trailing `hooks { ... }` block overrides [`Table`] lifecycle hooks.
#[macro_export]
macro_rules! table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident in $table:literal at $path:literal {
            key: [$($key:literal),+ $(,)?],
            $(
                $(#[$fmeta:meta])*
                $field:ident $(as $rename:literal)? : $ty:ty => $col:ident
            ),+ $(,)?
        }
        $(hooks { $($hook:tt)* })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize, ::sqlx::FromRow)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $(#[serde(rename = $rename)] #[sqlx(rename = $rename)])?
                pub $field: $ty,
            )+
        }

        impl $crate::table::Table for $name {
            const SPEC: $crate::table::TableSpec = $crate::table::TableSpec {
                schema: "public",
                name: $table,
                path: $path,
                columns: &[
                    $(
                        $crate::table::Column {
                            name: $crate::__column_name!($field $(, $rename)?),
                            ty: $crate::table::ColumnType::$col,
                        },
                    )+
                ],
                key: &[$($key),+],
            };

            $($($hook)*)?
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __column_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $rename:literal) => {
        $rename
    };
}
