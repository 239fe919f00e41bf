//! Bearer-token authentication against an [Easypanel](https://easypanel.io)
//! instance.
//!
//! Two operations make up the whole surface: [`login`] exchanges an
//! email/password pair (optionally with a 2FA code) for an opaque token, and
//! [`validate`] resolves such a token to the [`User`] it belongs to. Both are
//! stateless round trips against the panel's tRPC auth API; the panel owns
//! every validity decision, this crate only normalizes its responses and
//! classifies its failures into [`AuthError`].

pub mod cli;
mod client;
mod error;
mod types;
mod verify;

pub use client::AuthClient;
pub use error::AuthError;
pub use types::{Credentials, User};
pub use verify::TokenVerifier;

/// Exchange credentials for an opaque token.
///
/// On success the token is exactly the value the panel emitted, unmodified.
///
/// # Errors
/// Returns an error if `base_url` is invalid, the panel rejects the
/// credentials, answers with an unusable envelope, or cannot be reached.
pub async fn login(base_url: &str, credentials: &Credentials) -> Result<String, AuthError> {
    AuthClient::new(base_url)?.call_login(credentials).await
}

/// Resolve a bearer token to the user it belongs to.
///
/// # Errors
/// Returns an error if `base_url` is invalid, the panel rejects the token,
/// answers with an unusable envelope, or cannot be reached.
pub async fn validate(token: &str, base_url: &str) -> Result<User, AuthError> {
    AuthClient::new(base_url)?.call_get_user(token).await
}
