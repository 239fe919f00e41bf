use crate::{AuthClient, AuthError, User};
use async_trait::async_trait;

/// Capability of turning a bearer token into a verified [`User`].
///
/// Request-handling layers should depend on this trait rather than on
/// [`AuthClient`] directly, so the verification step can be swapped out in
/// tests or composed into any middleware stack.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a bearer token and return the user it belongs to.
    ///
    /// # Errors
    /// Returns an error if the token is rejected or the panel cannot be
    /// reached.
    async fn verify_token(&self, token: &str) -> Result<User, AuthError>;
}

#[async_trait]
impl TokenVerifier for AuthClient {
    async fn verify_token(&self, token: &str) -> Result<User, AuthError> {
        self.call_get_user(token).await
    }
}
