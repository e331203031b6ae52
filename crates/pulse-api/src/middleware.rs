use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};

use pulse_types::api::Claims;

use crate::error::ApiError;

/// Session for the current request, if the caller presented a valid bearer
/// token. Several routes (post creation, voting) serve anonymous callers,
/// so absence is not an error here — handlers that need a caller go
/// through [`MaybeSession::require`].
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Claims>);

impl MaybeSession {
    pub fn require(&self) -> Result<&Claims, ApiError> {
        self.0
            .as_ref()
            .ok_or(ApiError::Unauthorized("Authentication required"))
    }
}

/// Decode the Authorization header, when present, and stash the session in
/// request extensions. A missing, expired, or otherwise invalid token
/// leaves the request anonymous.
pub async fn attach_session(mut req: Request, next: Next) -> Response {
    let claims = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(decode_claims);

    req.extensions_mut().insert(MaybeSession(claims));
    next.run(req).await
}

fn decode_claims(token: &str) -> Option<Claims> {
    let secret = std::env::var("PULSE_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims)
}
