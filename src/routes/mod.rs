//! Router assembly.

pub mod common;
pub mod entity;

pub use common::common_routes;
pub use entity::{entity_routes, table_routes};

use crate::schema::SchemaSet;
use crate::state::AppState;
use crate::store::RecordStore;
use axum::Router;

/// Full API: common routes plus CRUD routes for `schemas`.
pub fn app<S: RecordStore>(state: AppState<S>, schemas: &[SchemaSet]) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state, schemas))
}
