use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::ApiError;

/// The fixed credential pair the service accepts. Read from config at
/// startup and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Exact match of both fields. Case-sensitive, no trimming.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Issue an opaque access token for a successful login.
///
/// The token is the SHA-256 hex digest of the username joined with a
/// fresh v4 UUID. It is never stored: nothing in the service can (or
/// does) verify a token against the set of issued ones.
pub fn issue_token(username: &str) -> String {
    let identifier = Uuid::new_v4();
    let hash = Sha256::digest(format!("{username}-{identifier}").as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

/// Bearer token extracted from the `Authorization` header.
///
/// Rejects with 401 before the handler body runs when the header is
/// absent or not of the form `Bearer <non-empty value>`. The value
/// itself is passed through verbatim and never checked further.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

fn parse_bearer(header_value: &str) -> Option<&str> {
    let (scheme, value) = header_value.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") && !value.is_empty() {
        Some(value)
    } else {
        None
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_bearer)
            .map(|token| BearerToken(token.to_string()))
            .ok_or(ApiError::NotAuthenticated)
    }
}
