//! Session auth: argon2 password verification and JWT bearer sessions.
//!
//! Auth is optional. Without a configured password hash the server runs
//! open and every request acts as the fixed local user.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{AuthConfig, Config};
use crate::error::ApiError;
use crate::main_lib::AppState;

/// Owner id used when the server runs without auth.
pub const LOCAL_USER_ID: &str = "local";

/// Session lifetime in seconds (7 days).
const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    exp: i64,
}

pub struct AuthManager {
    email: String,
    password_hash: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthManager {
    pub fn new(auth: &AuthConfig, config: &Config) -> Self {
        let secret = config.session_secret.as_bytes();
        AuthManager {
            email: auth.email.clone(),
            password_hash: auth.password_hash.clone(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Check credentials and mint a session token.
    pub fn login(&self, email: &str, password: &str) -> Result<(String, String), ApiError> {
        if !email.eq_ignore_ascii_case(&self.email) {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }
        let parsed = PasswordHash::new(&self.password_hash)
            .map_err(|e| ApiError::Internal(format!("invalid stored password hash: {}", e)))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let user_id = self.email.clone();
        let claims = SessionClaims {
            sub: user_id.clone(),
            exp: chrono::Utc::now().timestamp() + SESSION_TTL_SECS,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok((token, user_id))
    }

    /// Validate a bearer token and return the session's user id.
    pub fn verify(&self, token: &str) -> Result<String, ApiError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| ApiError::Unauthorized("Invalid or expired session".to_string()))?;
        Ok(data.claims.sub)
    }
}

/// Extractor yielding the authenticated user id for owner-scoped queries.
pub struct CurrentUser(pub String);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth) = &state.auth else {
            return Ok(CurrentUser(LOCAL_USER_ID.to_string()));
        };

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

        Ok(CurrentUser(auth.verify(token)?))
    }
}
