//! Table CRUD handlers: list, read, create, update, delete.
//!
//! Every handler is generic over the record type and the store. Parameters are checked first,
//! then the caller is authorized, then the body (if any) is decoded.

use crate::auth::Operation;
use crate::error::AppError;
use crate::extractors::Caller;
use crate::paging::Page;
use crate::response::ListEnvelope;
use crate::service::CrudService;
use crate::state::AppState;
use crate::store::RecordStore;
use crate::table::{RecordKey, Table};
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    Json,
};
use std::collections::HashMap;

/// Key segments after `/<path>/`, taken from the undecoded request path so that an encoded
/// `/` inside a component does not split it.
fn parse_key<T: Table>(uri: &Uri) -> Result<RecordKey, AppError> {
    let prefix = format!("/{}/", T::SPEC.path);
    let raw = uri
        .path()
        .strip_prefix(prefix.as_str())
        .ok_or_else(|| AppError::BadParams(format!("{} is not under {}", uri.path(), prefix)))?;
    RecordKey::parse(&T::SPEC, raw)
}

fn decode_body<T: Table>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadParams(format!("invalid {} body: {}", T::SPEC.name, e)))
}

/// Decode, then run the record's `prepare` and `validate` hooks.
fn accept_body<T: Table>(body: &Bytes, op: Operation) -> Result<T, AppError> {
    let mut record = decode_body::<T>(body)?;
    record.prepare();
    record.validate(op)?;
    Ok(record)
}

pub async fn list<T: Table, S: RecordStore>(
    State(state): State<AppState<S>>,
    caller: Caller,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<ListEnvelope<T>>, AppError> {
    let Query(params) = query.map_err(|e| AppError::BadParams(e.body_text()))?;
    let page = Page::from_query(&T::SPEC, &params)?;
    state.authorize::<T>(&caller, Operation::List).await?;
    let (data, total_records) = CrudService::list::<T, S>(&state.store, &page).await?;
    Ok(Json(ListEnvelope {
        page: page.page,
        page_size: page.page_size,
        data,
        total_records,
    }))
}

pub async fn read<T: Table, S: RecordStore>(
    State(state): State<AppState<S>>,
    caller: Caller,
    uri: Uri,
) -> Result<Json<T>, AppError> {
    let key = parse_key::<T>(&uri)?;
    state.authorize::<T>(&caller, Operation::Read).await?;
    let row = CrudService::get::<T, S>(&state.store, &key).await?;
    Ok(Json(row))
}

pub async fn create<T: Table, S: RecordStore>(
    State(state): State<AppState<S>>,
    caller: Caller,
    body: Bytes,
) -> Result<Json<T>, AppError> {
    state.authorize::<T>(&caller, Operation::Create).await?;
    let record = accept_body::<T>(&body, Operation::Create)?;
    let (row, _) = CrudService::create(&state.store, record).await?;
    tracing::debug!(table = T::SPEC.name, "created");
    Ok(Json(row))
}

pub async fn update<T: Table, S: RecordStore>(
    State(state): State<AppState<S>>,
    caller: Caller,
    uri: Uri,
    body: Bytes,
) -> Result<Json<T>, AppError> {
    let key = parse_key::<T>(&uri)?;
    state.authorize::<T>(&caller, Operation::Update).await?;
    let patch = accept_body::<T>(&body, Operation::Update)?;
    let (row, _) = CrudService::update(&state.store, &key, patch).await?;
    tracing::debug!(table = T::SPEC.name, %key, "updated");
    Ok(Json(row))
}

pub async fn delete<T: Table, S: RecordStore>(
    State(state): State<AppState<S>>,
    caller: Caller,
    uri: Uri,
) -> Result<Json<u64>, AppError> {
    let key = parse_key::<T>(&uri)?;
    state.authorize::<T>(&caller, Operation::Delete).await?;
    let n = CrudService::delete::<T, S>(&state.store, &key).await?;
    tracing::debug!(table = T::SPEC.name, %key, rows = n, "deleted");
    Ok(Json(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::web::User;

    #[test]
    fn test_decode_body_rejects_non_objects() {
        assert!(matches!(
            decode_body::<User>(&Bytes::from_static(b"[1,2]")),
            Err(AppError::BadParams(_))
        ));
        assert!(matches!(
            decode_body::<User>(&Bytes::from_static(b"{\"id\":\"seven\"}")),
            Err(AppError::BadParams(_))
        ));
    }

    #[test]
    fn test_parse_key_keeps_encoded_slashes() {
        use crate::schema::iam::RedirectUri;
        let uri: Uri = "/redirect_uris/c1/https%3A%2F%2Fapp.example.com%2Fcb".parse().unwrap();
        let key = parse_key::<RedirectUri>(&uri).unwrap();
        assert_eq!(key.values()[1], "https://app.example.com/cb");

        let uri: Uri = "/users_/5/".parse().unwrap();
        assert!(matches!(parse_key::<User>(&uri), Err(AppError::BadParams(_))));
    }

    #[test]
    fn test_missing_fields_decode_to_zero_values() {
        let user = decode_body::<User>(&Bytes::from_static(b"{\"name\":\"Alice\"}")).unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.id, 0);
        assert!(user.email.is_empty());
    }
}
