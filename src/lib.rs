//! Table CRUD: paged REST services over a fixed catalogue of relational tables.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod paging;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod table;

pub use auth::{AllowAll, Authorizer, Operation, TokenPolicy};
pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, AuthError, ConfigError, StoreError};
pub use extractors::Caller;
pub use paging::{OrderSpec, Page};
pub use response::ListEnvelope;
pub use routes::{app, common_routes, entity_routes};
pub use schema::SchemaSet;
pub use service::CrudService;
pub use state::AppState;
pub use store::{MemoryStore, PgStore, RecordStore};
pub use table::{RecordKey, Table, TableSpec};
