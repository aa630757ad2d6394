//! Mapped tables, grouped by the schema they belong to.

/// Emit `TABLES` and `routes()` for the listed record types.
macro_rules! mount_tables {
    ($($t:ty),+ $(,)?) => {
        /// Every table in this schema.
        pub const TABLES: &[&$crate::table::TableSpec] = &[$(&<$t as $crate::table::Table>::SPEC),+];

        /// CRUD routes for every table in this schema.
        pub fn routes<S: $crate::store::RecordStore>() -> ::axum::Router<$crate::state::AppState<S>> {
            ::axum::Router::new()
                $(.merge($crate::routes::entity::table_routes::<$t, S>()))+
        }
    };
}

pub mod iam;
pub mod web;

use crate::error::ConfigError;
use crate::state::AppState;
use crate::store::RecordStore;
use crate::table::TableSpec;
use axum::Router;
use std::str::FromStr;

/// A group of tables that can be mounted together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemaSet {
    /// Identity and access management.
    Iam,
    /// Generic web application.
    Web,
}

impl SchemaSet {
    pub const ALL: [SchemaSet; 2] = [SchemaSet::Iam, SchemaSet::Web];

    pub fn tables(self) -> &'static [&'static TableSpec] {
        match self {
            SchemaSet::Iam => iam::TABLES,
            SchemaSet::Web => web::TABLES,
        }
    }

    pub fn routes<S: RecordStore>(self) -> Router<AppState<S>> {
        match self {
            SchemaSet::Iam => iam::routes::<S>(),
            SchemaSet::Web => web::routes::<S>(),
        }
    }
}

impl FromStr for SchemaSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "iam" => Ok(SchemaSet::Iam),
            "web" => Ok(SchemaSet::Web),
            other => Err(ConfigError::UnknownSchema(other.to_string())),
        }
    }
}
