//! Extract the caller's credential from the request (`Authorization: Bearer <token>`).

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Request context handed to the [`Authorizer`](crate::auth::Authorizer).
#[derive(Clone, Debug, Default)]
pub struct Caller {
    pub bearer: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| {
                let (scheme, token) = s.trim().split_once(' ')?;
                scheme.eq_ignore_ascii_case("bearer").then(|| token.trim().to_string())
            })
            .filter(|s| !s.is_empty());
        Ok(Caller { bearer })
    }
}
