//! JWT-based session extractors for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use teamboard_core::backend::SessionUser;
use teamboard_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Requests without a usable token are rejected with
/// [`AppError::Unauthenticated`], pointing the client at the login path.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_session(parts, state) {
            Some(session) => Ok(AuthUser {
                user_id: session.user_id,
            }),
            None => Err(AppError::Unauthenticated {
                login_path: state.config.login_path.clone(),
            }),
        }
    }
}

/// The caller's session, if any. Never rejects.
///
/// A missing, malformed or expired token all yield `MaybeSession(None)`.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<SessionUser>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(resolve_session(parts, state)))
    }
}

fn resolve_session(parts: &Parts, state: &AppState) -> Option<SessionUser> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())?;

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        tracing::debug!("Ignoring non-Bearer Authorization header");
        return None;
    };

    match validate_token(token, &state.config.jwt) {
        Ok(claims) => Some(SessionUser {
            user_id: claims.sub,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token");
            None
        }
    }
}
