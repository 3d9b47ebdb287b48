use crate::core::error::ConsoleError;
use crate::core::extract::{PathParam, QueryParams};
use crate::core::state::AppState;
use crate::models::admin::{ListResponse, SearchQuery, SessionLogsResponse, SuccessResponse};
use crate::models::session::{sample_log_lines, Session};
use crate::stores::record_list::RemoveRefused;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// Active login screen
///
/// GET /api/sessions?q=<text>
pub async fn list_sessions_handler(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<SearchQuery>,
) -> Result<Response, ConsoleError> {
    let sessions = state.sessions.filter(&params.q);

    Ok((StatusCode::OK, Json(ListResponse::new(sessions))).into_response())
}

/// Revoke an active gateway session. The record is removed from the list.
///
/// DELETE /api/sessions/{id}
pub async fn revoke_session_handler(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<String>,
) -> Result<Response, ConsoleError> {
    let session = match state.sessions.remove_if(&id, Session::is_active) {
        Ok(session) => session,
        Err(RemoveRefused::Missing) => {
            return Err(ConsoleError::NotFound(format!("Session {}", id)));
        }
        Err(RemoveRefused::Rejected(_)) => return Err(ConsoleError::SessionClosed(id)),
    };

    info!(
        id = %id,
        user = %session.user,
        database = %session.database,
        "Session revoked"
    );

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::new(format!("Session {} revoked", id))),
    )
        .into_response())
}

/// Log viewer. Every session shows the same sample log.
///
/// GET /api/sessions/{id}/logs
pub async fn session_logs_handler(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<String>,
) -> Result<Response, ConsoleError> {
    if state.sessions.get(&id).is_none() {
        return Err(ConsoleError::NotFound(format!("Session {}", id)));
    }

    Ok((
        StatusCode::OK,
        Json(SessionLogsResponse {
            success: true,
            session_id: id,
            lines: sample_log_lines(),
        }),
    )
        .into_response())
}
