//! Generic CRUD over any [`RecordStore`], with the API error taxonomy applied.
//!
//! Update and delete read the row first and then write it in a second statement; the two
//! are not atomic.

use crate::error::AppError;
use crate::paging::Page;
use crate::store::RecordStore;
use crate::table::{from_row, to_row, RecordKey, Table};

pub struct CrudService;

impl CrudService {
    /// One page of rows plus the total row count of the table.
    pub async fn list<T: Table, S: RecordStore>(store: &S, page: &Page) -> Result<(Vec<T>, i64), AppError> {
        let total = store.count::<T>().await.map_err(|e| {
            tracing::warn!(table = T::SPEC.name, error = %e, "count failed");
            AppError::NotFound(format!("{}: {}", T::SPEC.name, e))
        })?;
        let rows = store.fetch_page::<T>(page).await.map_err(|e| {
            tracing::warn!(table = T::SPEC.name, error = %e, "page query failed");
            AppError::NotFound(format!("{}: {}", T::SPEC.name, e))
        })?;
        Ok((rows, total))
    }

    pub async fn get<T: Table, S: RecordStore>(store: &S, key: &RecordKey) -> Result<T, AppError> {
        match store.fetch_one::<T>(key).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(AppError::NotFound(format!("{} {}", T::SPEC.name, key))),
            Err(e) => {
                tracing::warn!(table = T::SPEC.name, %key, error = %e, "read failed");
                Err(AppError::NotFound(format!("{} {}: {}", T::SPEC.name, key, e)))
            }
        }
    }

    /// Insert one row. Returns the stored row and the number of rows written.
    pub async fn create<T: Table, S: RecordStore>(store: &S, mut record: T) -> Result<(T, u64), AppError> {
        record
            .before_save()
            .map_err(|e| AppError::InsertFailed(format!("{}: {}", T::SPEC.name, e)))?;
        let stored = store.insert(&record).await.map_err(|e| {
            tracing::warn!(table = T::SPEC.name, error = %e, "insert failed");
            AppError::InsertFailed(format!("{}: {}", T::SPEC.name, e))
        })?;
        Ok((stored, 1))
    }

    /// Overwrite every non-key field of the addressed row with `patch`.
    pub async fn update<T: Table, S: RecordStore>(
        store: &S,
        key: &RecordKey,
        patch: T,
    ) -> Result<(T, u64), AppError> {
        let current = Self::get::<T, S>(store, key).await?;
        let mut next = overwrite(&current, &patch, key)
            .map_err(|e| AppError::UpdateFailed(format!("{} {}: {}", T::SPEC.name, key, e)))?;
        next.before_save()
            .map_err(|e| AppError::UpdateFailed(format!("{} {}: {}", T::SPEC.name, key, e)))?;
        match store.update(key, &next).await {
            Ok(Some(stored)) => Ok((stored, 1)),
            Ok(None) => Err(AppError::NotFound(format!("{} {}", T::SPEC.name, key))),
            Err(e) => {
                tracing::warn!(table = T::SPEC.name, %key, error = %e, "update failed");
                Err(AppError::UpdateFailed(format!("{} {}: {}", T::SPEC.name, key, e)))
            }
        }
    }

    /// Delete the addressed row. Returns the number of rows removed.
    pub async fn delete<T: Table, S: RecordStore>(store: &S, key: &RecordKey) -> Result<u64, AppError> {
        Self::get::<T, S>(store, key).await?;
        store.delete::<T>(key).await.map_err(|e| {
            tracing::warn!(table = T::SPEC.name, %key, error = %e, "delete failed");
            AppError::DeleteFailed(format!("{} {}: {}", T::SPEC.name, key, e))
        })
    }
}

/// Copy all non-key fields of `patch` onto `current` and pin the key columns to `key`.
fn overwrite<T: Table>(current: &T, patch: &T, key: &RecordKey) -> Result<T, serde_json::Error> {
    let mut row = to_row(current)?;
    for (col, v) in to_row(patch)? {
        if !T::SPEC.is_key(&col) {
            row.insert(col, v);
        }
    }
    for (col, v) in key.pairs(&T::SPEC) {
        row.insert(col.to_string(), v.clone());
    }
    from_row(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::OrderSpec;
    use crate::schema::iam::{BrokerLink, Realm};
    use crate::schema::web::{PasswordReset, User};
    use crate::store::MemoryStore;

    fn user(name: &str) -> User {
        User {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "x".into(),
            ..Default::default()
        }
    }

    fn key_of(id: i64) -> RecordKey {
        RecordKey::parse(&User::SPEC, &id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_list_counts_full_table() {
        let store = MemoryStore::new();
        for i in 0..7 {
            CrudService::create(&store, user(&format!("u{}", i))).await.unwrap();
        }
        let page = Page::new(3, 3, OrderSpec::default()).unwrap();
        let (rows, total) = CrudService::list::<User, _>(&store, &page).await.unwrap();
        assert_eq!(total, 7);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "u6");

        let page = Page::new(0, 5, OrderSpec::default()).unwrap();
        let (rows, total) = CrudService::list::<User, _>(&store, &page).await.unwrap();
        assert_eq!(total, 7);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "u0");
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MemoryStore::new();
        let (created, n) = CrudService::create(&store, user("Alice")).await.unwrap();
        assert_eq!(n, 1);
        assert!(created.id > 0);
        let got: User = CrudService::get(&store, &key_of(created.id)).await.unwrap();
        assert_eq!(got, created);
    }

    #[tokio::test]
    async fn test_create_duplicate_is_insert_failed() {
        let store = MemoryStore::new();
        let realm = Realm {
            id: "master".into(),
            enabled: true,
            ..Default::default()
        };
        CrudService::create(&store, realm.clone()).await.unwrap();
        let err = CrudService::create(&store, realm).await.unwrap_err();
        assert!(matches!(err, AppError::InsertFailed(_)));
    }

    #[tokio::test]
    async fn test_update_overwrites_instead_of_merging() {
        let store = MemoryStore::new();
        let mut alice = user("Alice");
        alice.remember_token = Some("tok".into());
        let (created, _) = CrudService::create(&store, alice).await.unwrap();

        let patch = User {
            id: 12345,
            name: "Bob".into(),
            ..Default::default()
        };
        let (updated, n) = CrudService::update(&store, &key_of(created.id), patch).await.unwrap();
        assert_eq!(n, 1);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.email, "");
        assert_eq!(updated.remember_token, None);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = CrudService::update(&store, &key_of(9), user("Bob")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = MemoryStore::new();
        let (created, _) = CrudService::create(&store, user("Alice")).await.unwrap();
        let key = key_of(created.id);
        assert_eq!(CrudService::delete::<User, _>(&store, &key).await.unwrap(), 1);
        let err = CrudService::get::<User, _>(&store, &key).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = CrudService::delete::<User, _>(&store, &key).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_composite_key_needs_every_component() {
        let store = MemoryStore::new();
        for token in ["t1", "t2"] {
            CrudService::create(
                &store,
                PasswordReset {
                    email: "a@example.com".into(),
                    token: token.into(),
                    created_at: None,
                },
            )
            .await
            .unwrap();
        }
        let key = RecordKey::parse(&PasswordReset::SPEC, "a@example.com/t2").unwrap();
        let got: PasswordReset = CrudService::get(&store, &key).await.unwrap();
        assert_eq!(got.token, "t2");

        assert!(RecordKey::parse(&PasswordReset::SPEC, "a@example.com").is_err());

        assert_eq!(CrudService::delete::<PasswordReset, _>(&store, &key).await.unwrap(), 1);
        let other = RecordKey::parse(&PasswordReset::SPEC, "a@example.com/t1").unwrap();
        assert!(CrudService::get::<PasswordReset, _>(&store, &other).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_pins_composite_key() {
        let store = MemoryStore::new();
        let link = BrokerLink {
            identity_provider: "github".into(),
            user_id: "u1".into(),
            realm_id: "master".into(),
            ..Default::default()
        };
        CrudService::create(&store, link).await.unwrap();
        let key = RecordKey::parse(&BrokerLink::SPEC, "github/u1").unwrap();
        let patch = BrokerLink {
            identity_provider: "gitlab".into(),
            realm_id: "other".into(),
            broker_username: Some("alice".into()),
            ..Default::default()
        };
        let (updated, _) = CrudService::update(&store, &key, patch).await.unwrap();
        assert_eq!(updated.identity_provider, "github");
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.realm_id, "other");
        assert_eq!(updated.broker_username.as_deref(), Some("alice"));
    }
}
