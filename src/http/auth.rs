//! Shared-password login and the session gate.
//!
//! One admin credential for the whole group: a matching password buys a
//! signed, expiring token, and every resource route demands that token via
//! the [`AdminSession`] extractor before touching the store.

use actix_web::{post, web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::settings;
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

/// Sign a session token valid for `ttl_minutes`. Takes the secret as a
/// parameter so it can be exercised without any process-wide state.
pub fn issue_token(secret: &str, ttl_minutes: i64) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::minutes(ttl_minutes)).timestamp() as usize;
    let claims = Claims {
        sub: "admin".into(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// True when `token` is well-formed, signed with `secret`, and unexpired.
pub fn verify_token(secret: &str, token: &str) -> bool {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .is_ok()
}

pub mod extractor {
    use super::verify_token;
    use crate::config::settings;
    use crate::error::ApiError;
    use actix_web::{dev::Payload, FromRequest, HttpRequest};
    use futures_util::future::{ready, Ready};

    /// Proof that the request carried a valid admin session token.
    /// Resource handlers take this as their first argument; the check runs
    /// uniformly before any handler body.
    #[derive(Debug, Clone, Copy)]
    pub struct AdminSession;

    impl FromRequest for AdminSession {
        type Error = ApiError;
        type Future = Ready<Result<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let res = (|| {
                // Expect:  Authorization: Bearer <token>
                let hdr = req
                    .headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .ok_or(ApiError::Unauthorized)?;

                let token = hdr.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;

                if !verify_token(&settings().jwt_secret, token) {
                    return Err(ApiError::Unauthorized);
                }
                Ok(AdminSession)
            })();

            ready(res)
        }
    }
}
pub use extractor::AdminSession;

/// POST /api/auth/login
#[post("/auth/login")]
pub async fn login(info: web::Json<LoginRequest>) -> Result<HttpResponse, ApiError> {
    let cfg = settings();
    if info.password.is_empty() || info.password != cfg.admin_password {
        return Err(ApiError::Unauthorized);
    }

    let access_token = issue_token(&cfg.jwt_secret, cfg.session_ttl_minutes)
        .map_err(|e| ApiError::internal(format!("token signing failed: {e}")))?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        expires_in: cfg.session_ttl_minutes * 60,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login);
}
