//! Admin credential extractor
//!
//! Pulls the raw bearer token out of the Authorization header. The
//! comparison against the configured secret happens in the service layer,
//! so a missing header and a wrong secret both end up as 401.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;

/// Bearer credential for admin endpoints
#[derive(Debug, Clone)]
pub struct AdminBearer(pub String);

impl AdminBearer {
    /// Get the raw token
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminBearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        Ok(AdminBearer(bearer.token().to_string()))
    }
}
