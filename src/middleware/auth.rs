// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT session middleware.
//!
//! Sessions are stateless signed tokens: the claims below are embedded at
//! login and trusted for as long as the signature and expiry hold. Nothing
//! is looked up per request, so a changed admin flag is invisible until the
//! user signs in again.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "fittrack_token";

/// Session lifetime: 30 days.
const SESSION_TTL_SECS: usize = 30 * 24 * 60 * 60;

/// JWT claims structure.
///
/// Fixed at login; these do not refresh until the token is reissued.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
}

/// Authenticated user extracted from JWT.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

/// Middleware that requires valid JWT authentication.
///
/// Rejects before any handler or storage work happens.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let token = if let Some(cookie) = jar.get(SESSION_COOKIE) {
        cookie.value().to_string()
    } else {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header {
            Some(h) if h.starts_with("Bearer ") => h[7..].to_string(),
            _ => return Err(AppError::Unauthorized),
        }
    };

    let key = DecodingKey::from_secret(&state.config.jwt_signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let token_data =
        decode::<Claims>(&token, &key, &validation).map_err(|_| AppError::Unauthorized)?;

    let user_id: i64 = token_data
        .claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized)?;

    let auth_user = AuthUser {
        user_id,
        first_name: token_data.claims.first_name,
        last_name: token_data.claims.last_name,
        is_admin: token_data.claims.is_admin,
    };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Middleware that requires the session's admin flag.
///
/// Must be layered inside [`require_auth`], which provides the `AuthUser`
/// extension.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let is_admin = request
        .extensions()
        .get::<AuthUser>()
        .map(|user| user.is_admin)
        .unwrap_or(false);

    if !is_admin {
        return Err(AppError::Forbidden("Unauthorized Access".to_string()));
    }

    Ok(next.run(request).await)
}

/// Create a JWT for a user session.
pub fn create_jwt(
    user_id: i64,
    first_name: &str,
    last_name: &str,
    is_admin: bool,
    signing_key: &[u8],
) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        is_admin,
        iat: now,
        exp: now + SESSION_TTL_SECS,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Build the session cookie carrying `token`.
///
/// `Secure` is set when the frontend is served over https; localhost
/// development keeps working without it.
pub fn session_cookie(token: String, frontend_url: &str) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(time::Duration::days(30));
    cookie.set_secure(frontend_url.starts_with("https://"));
    cookie
}

/// Build the removal cookie that clears the session on logout.
///
/// Attributes must match [`session_cookie`] or browsers keep the original.
pub fn removal_cookie(frontend_url: &str) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(time::Duration::ZERO);
    cookie.set_secure(frontend_url.starts_with("https://"));
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

    #[test]
    fn test_jwt_roundtrip() {
        let token = create_jwt(42, "Ada", "Lovelace", false, SIGNING_KEY).unwrap();

        let key = DecodingKey::from_secret(SIGNING_KEY);
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(&token, &key, &validation)
            .expect("Failed to decode JWT - check Claims struct compatibility");

        assert_eq!(token_data.claims.sub, "42");
        assert_eq!(token_data.claims.first_name, "Ada");
        assert_eq!(token_data.claims.last_name, "Lovelace");
        assert!(!token_data.claims.is_admin);
        assert!(token_data.claims.exp > token_data.claims.iat);
    }

    #[test]
    fn test_jwt_rejects_wrong_key() {
        let token = create_jwt(42, "Ada", "Lovelace", true, SIGNING_KEY).unwrap();

        let key = DecodingKey::from_secret(b"a_different_signing_key_entirely");
        let validation = Validation::new(Algorithm::HS256);

        assert!(decode::<Claims>(&token, &key, &validation).is_err());
    }

    #[test]
    fn test_session_cookie_attributes_localhost() {
        let cookie = session_cookie("tok".to_string(), "http://localhost:5173");

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_session_cookie_secure_for_https_frontend() {
        let cookie = session_cookie("tok".to_string(), "https://fittrack.example.com");
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie("http://localhost:5173");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.value(), "");
    }
}
