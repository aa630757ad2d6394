//! Per-operation authorization hook.
//!
//! Handlers call [`Authorizer::authorize`] after parameters are parsed and before the body is
//! decoded or storage is touched. The table is identified by its static [`TableSpec`].

use crate::error::AuthError;
use crate::extractors::Caller;
use crate::table::TableSpec;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn is_write(self) -> bool {
        matches!(self, Operation::Create | Operation::Update | Operation::Delete)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::List => "list",
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        })
    }
}

#[async_trait]
pub trait Authorizer: Send + Sync + 'static {
    async fn authorize(&self, caller: &Caller, table: &TableSpec, op: Operation) -> Result<(), AuthError>;
}

/// Allows everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

#[async_trait]
impl Authorizer for AllowAll {
    async fn authorize(&self, _caller: &Caller, _table: &TableSpec, _op: Operation) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Static policy: optional shared bearer token, optional read-only mode.
#[derive(Clone, Debug, Default)]
pub struct TokenPolicy {
    pub token: Option<String>,
    pub read_only: bool,
}

#[async_trait]
impl Authorizer for TokenPolicy {
    async fn authorize(&self, caller: &Caller, table: &TableSpec, op: Operation) -> Result<(), AuthError> {
        if let Some(expected) = &self.token {
            if caller.bearer.as_deref() != Some(expected.as_str()) {
                tracing::debug!(table = table.name, %op, "rejected caller without valid token");
                return Err(AuthError::Unauthenticated);
            }
        }
        if self.read_only && op.is_write() {
            return Err(AuthError::Forbidden(format!("{} not allowed on {}: read-only", op, table.name)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnType};

    const REALM: TableSpec = TableSpec {
        schema: "public",
        name: "realm",
        path: "realm",
        columns: &[Column {
            name: "id",
            ty: ColumnType::Text,
        }],
        key: &["id"],
    };

    fn caller(token: Option<&str>) -> Caller {
        Caller {
            bearer: token.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_allow_all() {
        assert!(AllowAll.authorize(&caller(None), &REALM, Operation::Delete).await.is_ok());
    }

    #[tokio::test]
    async fn test_token_required() {
        let policy = TokenPolicy {
            token: Some("s3cret".into()),
            read_only: false,
        };
        assert_eq!(
            policy.authorize(&caller(None), &REALM, Operation::List).await,
            Err(AuthError::Unauthenticated)
        );
        assert_eq!(
            policy.authorize(&caller(Some("wrong")), &REALM, Operation::List).await,
            Err(AuthError::Unauthenticated)
        );
        assert!(policy
            .authorize(&caller(Some("s3cret")), &REALM, Operation::Create)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_read_only_denies_writes() {
        let policy = TokenPolicy {
            token: None,
            read_only: true,
        };
        assert!(policy.authorize(&caller(None), &REALM, Operation::Read).await.is_ok());
        assert!(policy.authorize(&caller(None), &REALM, Operation::List).await.is_ok());
        for op in [Operation::Create, Operation::Update, Operation::Delete] {
            assert!(matches!(
                policy.authorize(&caller(None), &REALM, op).await,
                Err(AuthError::Forbidden(_))
            ));
        }
    }
}
