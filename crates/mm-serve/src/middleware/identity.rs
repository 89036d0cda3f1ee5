use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use mm_core::MockmateError;
use mm_core::error::IdentityError;
use mm_core::types::ids::UserId;

const HEADER_NAME: &str = "x-user-id";

/// Authenticated identity as supplied by the upstream identity provider.
/// Extraction fails fast when the header is absent or blank, so no query is
/// ever scoped by an undefined identifier.
#[derive(Clone, Debug)]
pub struct Identity(pub UserId);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let correlation_id = parts
            .extensions
            .get::<CorrelationId>()
            .map(|value| value.0.clone());
        let raw = parts
            .headers
            .get(HEADER_NAME)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        match UserId::new(raw.to_string()) {
            Ok(user_id) => Ok(Identity(user_id)),
            Err(_) => Err(map_error(
                &MockmateError::Identity(IdentityError::Unauthenticated),
                correlation_id,
            )
            .into_response()),
        }
    }
}
