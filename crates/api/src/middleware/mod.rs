//! Session extractors.
//!
//! - [`auth::AuthUser`] -- Requires a valid JWT Bearer token.
//! - [`auth::MaybeSession`] -- Resolves the session if present, leaving the
//!   decision to the listing backend.

pub mod auth;
