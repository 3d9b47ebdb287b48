use crate::core::error::ConsoleError;
use crate::core::extract::JsonBody;
use crate::core::state::AppState;
use crate::models::admin::{LoginResponse, SuccessResponse};
use crate::stores::session_context::ConsoleSession;
use crate::validation::login::LoginForm;
use crate::validation::Dialog;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Sign in to the console
///
/// POST /api/login  {"username": "...", "password": "..."}
///
/// Any non-empty pair is accepted.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<LoginForm>,
) -> Result<Response, ConsoleError> {
    let session = Dialog::opened(form)
        .submit_with(|username| state.session_context.login(username))
        .map_err(|errors| {
            warn!("Rejected console login with missing credentials");
            ConsoleError::Validation(errors)
        })?;

    info!(
        username = %session.username,
        active_tokens = state.session_context.len(),
        "Console login"
    );

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            token: session.token,
            username: session.username,
        }),
    )
        .into_response())
}

/// Drop the caller's token
///
/// POST /api/logout
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<ConsoleSession>,
) -> Result<Response, ConsoleError> {
    state.session_context.logout(&session.token);

    info!(username = %session.username, "Console logout");

    Ok((StatusCode::OK, Json(SuccessResponse::new("Logged out"))).into_response())
}
