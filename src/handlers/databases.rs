use crate::core::error::ConsoleError;
use crate::core::extract::{JsonBody, PathParam, QueryParams};
use crate::core::state::AppState;
use crate::models::admin::{ItemResponse, ListResponse, SearchQuery};
use crate::models::database::ConnectedDatabase;
use crate::utils::time::now;
use crate::validation::connection::ConnectionForm;
use crate::validation::Dialog;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Catalog of supported engines
///
/// GET /api/databases?q=<text>
pub async fn list_engines_handler(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<SearchQuery>,
) -> Result<Response, ConsoleError> {
    let engines = state.engines.filter(&params.q);

    Ok((StatusCode::OK, Json(ListResponse::new(engines))).into_response())
}

/// GET /api/databases/{id}
pub async fn get_engine_handler(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<u64>,
) -> Result<Response, ConsoleError> {
    let engine = state
        .engines
        .get(&id)
        .ok_or_else(|| ConsoleError::NotFound(format!("Database engine {}", id)))?;

    Ok((StatusCode::OK, Json(ItemResponse::new(engine))).into_response())
}

/// Register a database of the engine's type from the connection form
///
/// POST /api/databases/{id}/connect
///
/// Nothing is dialed; the entry only shows up on the connected-databases
/// screen. The password is checked for presence and then discarded.
pub async fn connect_database_handler(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<u64>,
    JsonBody(form): JsonBody<ConnectionForm>,
) -> Result<Response, ConsoleError> {
    let engine = state
        .engines
        .get(&id)
        .ok_or_else(|| ConsoleError::NotFound(format!("Database engine {}", id)))?;

    let database = Dialog::opened(form)
        .submit_with(|new| {
            state.connected_databases.insert_with(|id| ConnectedDatabase {
                id,
                db_type: engine.db_type,
                name: new.name,
                description: new.description,
                address: new.address,
                port: new.port,
                default_params: new.default_params,
                username: new.username,
                created_at: now(),
            })
        })
        .map_err(|errors| {
            warn!(engine = %engine.name, errors = %errors, "Rejected connection form");
            ConsoleError::Validation(errors)
        })?;

    info!(
        id = database.id,
        engine = %engine.name,
        name = %database.name,
        address = %database.address,
        port = database.port,
        "Database connected"
    );

    Ok((StatusCode::CREATED, Json(ItemResponse::new(database))).into_response())
}
