use crate::core::error::ConsoleError;
use crate::core::extract::{JsonBody, QueryParams};
use crate::core::state::AppState;
use crate::models::admin::ItemResponse;
use crate::models::query::{QueryHintParams, RunQueryRequest};
use crate::query::runner::query_hint;
use crate::stores::session_context::ConsoleSession;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Editor label and placeholder for the selected database
///
/// GET /api/queries/hint?database_id=<id>
pub async fn query_hint_handler(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<QueryHintParams>,
) -> Result<Response, ConsoleError> {
    let db_type = match params.database_id {
        Some(id) => {
            let database = state
                .connected_databases
                .get(&id)
                .ok_or_else(|| ConsoleError::NotFound(format!("Connected database {}", id)))?;
            Some(database.db_type)
        }
        None => None,
    };

    Ok((StatusCode::OK, Json(ItemResponse::new(query_hint(db_type)))).into_response())
}

/// Run a query against a connected database (simulated)
///
/// POST /api/queries/run  {"database_id": 1, "query": "SELECT ..."}
pub async fn run_query_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<ConsoleSession>,
    JsonBody(request): JsonBody<RunQueryRequest>,
) -> Result<Response, ConsoleError> {
    let Some(database_id) = request.database_id else {
        return Err(ConsoleError::InvalidParameter("Select a database".to_string()));
    };

    let database = state
        .connected_databases
        .get(&database_id)
        .ok_or_else(|| ConsoleError::NotFound(format!("Connected database {}", database_id)))?;

    let result = state
        .query_runner
        .run(&session.token, &database, &request.query)
        .await
        .inspect_err(|e| {
            warn!(username = %session.username, database = %database.name, error = %e, "Query run rejected")
        })?;

    info!(
        username = %session.username,
        database = %database.name,
        rows = result.rows.len(),
        "Query executed"
    );

    Ok((StatusCode::OK, Json(ItemResponse::new(result))).into_response())
}
