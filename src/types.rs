use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// A panel user as returned by `auth.getUser`. Built fresh on every
/// successful validation; the crate never caches or stores it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub two_factor_enabled: bool,
}

/// Login input for `auth.login`. The panel enforces all content rules
/// (non-empty fields, 2FA code when the account requires one); nothing is
/// pre-validated here.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
    pub remember_me: bool,
    pub code: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            remember_me: false,
            code: None,
        }
    }

    #[must_use]
    pub fn remember(mut self) -> Self {
        self.remember_me = true;
        self
    }

    /// Attach a one-time 2FA code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}
