//! Table CRUD routes.
//!
//! Each table gets `/<path>` (list, create) and `/<path>/*key` (read, update, delete); the
//! wildcard carries one segment per key column, in declared key order.

use crate::handlers::entity::{create, delete as delete_handler, list, read, update};
use crate::response::TableInfo;
use crate::schema::SchemaSet;
use crate::state::AppState;
use crate::store::RecordStore;
use crate::table::Table;
use axum::{routing::get, Json, Router};

/// Routes for one table. Mounted by the schema modules.
pub fn table_routes<T: Table, S: RecordStore>() -> Router<AppState<S>> {
    let path = T::SPEC.path;
    Router::new()
        .route(&format!("/{}", path), get(list::<T, S>).post(create::<T, S>))
        .route(
            &format!("/{}/*key", path),
            get(read::<T, S>).put(update::<T, S>).delete(delete_handler::<T, S>),
        )
}

/// CRUD routes for every table of `schemas`, plus the `GET /tables` catalogue.
pub fn entity_routes<S: RecordStore>(state: AppState<S>, schemas: &[SchemaSet]) -> Router {
    let catalogue: Vec<TableInfo> = schemas
        .iter()
        .flat_map(|s| s.tables().iter().copied())
        .map(TableInfo::from)
        .collect();

    let mut router = Router::new().route(
        "/tables",
        get(move || {
            let catalogue = catalogue.clone();
            async move { Json(catalogue) }
        }),
    );
    for set in schemas {
        router = router.merge(set.routes::<S>());
    }
    router.with_state(state)
}
