use crate::{AuthError, Credentials, User};
use reqwest::header::ACCEPT;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use tracing::{debug, info_span, Instrument};
use url::Url;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

const LOGIN_PATH: &str = "/api/trpc/auth.login";
const GET_USER_PATH: &str = "/api/trpc/auth.getUser";

/// Client for the Easypanel tRPC auth endpoints. Holds no state beyond the
/// base URL and the connection pool; every call is an independent round trip.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client for the panel at `base_url`. Any trailing slash is
    /// stripped so endpoint paths can be appended verbatim.
    ///
    /// # Errors
    /// Returns an error if `base_url` is empty or not a valid URL. No
    /// network call is attempted.
    pub fn new(base_url: &str) -> Result<Self, AuthError> {
        if base_url.trim().is_empty() {
            return Err(AuthError::MissingBaseUrl);
        }

        Url::parse(base_url)?;

        let http = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL, never ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a token via `POST /api/trpc/auth.login`.
    ///
    /// # Errors
    /// Returns an error if the panel rejects the credentials, answers with an
    /// unusable envelope, or cannot be reached.
    pub async fn call_login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let login_url = format!("{}{LOGIN_PATH}", self.base_url);

        let mut payload = json!({
            "json": {
                "email": credentials.email,
                "password": credentials.password.expose_secret(),
                "rememberMe": credentials.remember_me,
            }
        });

        // The panel's input schema takes an optional code, not a null one:
        // the key is only present when a 2FA code was supplied.
        if let Some(code) = &credentials.code {
            payload["json"]["code"] = json!(code);
        }

        let span = info_span!(
            "easypanel.login",
            http.method = "POST",
            url = %login_url
        );
        let response = self
            .http
            .post(&login_url)
            .header(ACCEPT, "*/*")
            .json(&payload)
            .send()
            .instrument(span)
            .await
            .map_err(|err| unreachable(&login_url, &err))?;

        let body = success_body(response, "Login failed").await?;

        body.get("result")
            .and_then(|v| v.get("data"))
            .and_then(|v| v.get("json"))
            .and_then(|v| v.get("token"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or(AuthError::MalformedResponse)
    }

    /// Resolve a bearer token to its user via `GET /api/trpc/auth.getUser`.
    ///
    /// # Errors
    /// Returns an error if the panel rejects the token, answers with an
    /// unusable envelope, or cannot be reached.
    pub async fn call_get_user(&self, token: &str) -> Result<User, AuthError> {
        let user_url = format!("{}{GET_USER_PATH}", self.base_url);

        let span = info_span!(
            "easypanel.get_user",
            http.method = "GET",
            url = %user_url
        );
        let response = self
            .http
            .get(&user_url)
            .bearer_auth(token)
            .header(ACCEPT, "*/*")
            .send()
            .instrument(span)
            .await
            .map_err(|err| unreachable(&user_url, &err))?;

        let body = success_body(response, "Authentication failed").await?;

        let user = body
            .get("result")
            .and_then(|v| v.get("data"))
            .and_then(|v| v.get("json"))
            .cloned()
            .ok_or(AuthError::MalformedResponse)?;

        // The user object itself may still be null or missing fields.
        serde_json::from_value(user).map_err(|_| AuthError::MalformedResponse)
    }

    /// Exchange credentials for a token, reusing this client's connection
    /// pool. See [`Self::call_login`].
    ///
    /// # Errors
    /// Same as [`Self::call_login`].
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        self.call_login(credentials).await
    }

    /// Resolve a bearer token to its user, reusing this client's connection
    /// pool. See [`Self::call_get_user`].
    ///
    /// # Errors
    /// Same as [`Self::call_get_user`].
    pub async fn validate(&self, token: &str) -> Result<User, AuthError> {
        self.call_get_user(token).await
    }
}

// Transport failure: no response was received from the panel.
fn unreachable(url: &str, err: &reqwest::Error) -> AuthError {
    debug!("request to {} failed: {}", url, err);
    AuthError::ServiceUnavailable
}

// Map an HTTP error status to a rejection carrying the panel's own message
// when the body has one; decode the body on success.
async fn success_body(response: reqwest::Response, fallback: &str) -> Result<Value, AuthError> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .map_or_else(|| fallback.to_string(), ToString::to_string);

        return Err(AuthError::Rejected {
            message,
            status: status.as_u16(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|_| AuthError::MalformedResponse)
}
