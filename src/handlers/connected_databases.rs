use crate::core::error::ConsoleError;
use crate::core::extract::{PathParam, QueryParams};
use crate::core::state::AppState;
use crate::models::admin::{ConnectedDatabaseQuery, ListResponse, SuccessResponse};
use crate::models::database::DatabaseType;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// Parse the `types` filter. Absent means every type, an empty value means none.
pub fn parse_type_filter(types: Option<&str>) -> Result<Vec<DatabaseType>, ConsoleError> {
    let Some(types) = types else {
        return Ok(DatabaseType::ALL.to_vec());
    };

    types
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.parse::<DatabaseType>().map_err(ConsoleError::InvalidParameter))
        .collect()
}

/// GET /api/connected-databases?q=<text>&types=PostgreSQL,MySQL
pub async fn list_connected_handler(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<ConnectedDatabaseQuery>,
) -> Result<Response, ConsoleError> {
    let types = parse_type_filter(params.types.as_deref())?;

    let databases = state
        .connected_databases
        .filter_where(&params.q, |db| types.contains(&db.db_type));

    Ok((StatusCode::OK, Json(ListResponse::new(databases))).into_response())
}

/// DELETE /api/connected-databases/{id}
pub async fn delete_connected_handler(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<u64>,
) -> Result<Response, ConsoleError> {
    let database = state
        .connected_databases
        .remove(&id)
        .ok_or_else(|| ConsoleError::NotFound(format!("Connected database {}", id)))?;

    info!(id, name = %database.name, "Connected database removed");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::new(format!("Database {} removed", id))),
    )
        .into_response())
}
