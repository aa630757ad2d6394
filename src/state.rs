//! Shared application state for all routes: the record store and the authorization policy.

use crate::auth::{Authorizer, Operation};
use crate::error::AppError;
use crate::extractors::Caller;
use crate::table::Table;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState<S> {
    pub store: S,
    pub authorizer: Arc<dyn Authorizer>,
}

impl<S> AppState<S> {
    pub fn new(store: S, authorizer: impl Authorizer) -> Self {
        AppState {
            store,
            authorizer: Arc::new(authorizer),
        }
    }

    /// Ask the policy whether `caller` may run `op` on the table behind `T`.
    pub async fn authorize<T: Table>(&self, caller: &Caller, op: Operation) -> Result<(), AppError> {
        self.authorizer.authorize(caller, &T::SPEC, op).await?;
        Ok(())
    }
}
