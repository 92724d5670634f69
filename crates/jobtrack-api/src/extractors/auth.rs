//! Authenticated-principal extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use jobtrack_core::error::AppError;
use jobtrack_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that authenticates the request and yields a
/// [`RequestContext`].
///
/// Requires a `Authorization: Bearer <token>` header. The token
/// signature and expiry are checked first, then the referenced session
/// row must still be active, so logout takes effect immediately even
/// for unexpired tokens.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::unauthenticated("Missing or malformed Authorization header"))?;

        let claims = state.jwt_decoder.decode_token(token)?;
        state.session_manager.validate_session(claims.session_id()).await?;

        Ok(Self(RequestContext::new(
            claims.account_id(),
            claims.session_id(),
            claims.role,
            claims.name,
        )))
    }
}

/// Pulls the bearer token out of the `Authorization` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
