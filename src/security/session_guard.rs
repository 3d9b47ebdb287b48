use crate::core::error::ConsoleError;
use crate::core::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

/// Token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Route layer in front of every admin endpoint.
///
/// Rejects the request with 401 unless it carries a token issued by
/// `/api/login` and not yet logged out. The matching
/// [`ConsoleSession`](crate::stores::session_context::ConsoleSession) is
/// handed to the handler as a request extension.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ConsoleError> {
    let Some(token) = bearer_token(req.headers()) else {
        warn!(path = %req.uri().path(), "Admin request without bearer token");
        return Err(ConsoleError::Unauthorized);
    };

    let Some(session) = state.session_context.get(token) else {
        warn!(path = %req.uri().path(), "Admin request with unknown token");
        return Err(ConsoleError::Unauthorized);
    };

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
