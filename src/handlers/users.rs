use crate::core::error::ConsoleError;
use crate::core::extract::{JsonBody, PathParam, QueryParams};
use crate::core::state::AppState;
use crate::models::admin::{ItemResponse, ListResponse, SearchQuery, SuccessResponse};
use crate::models::user::User;
use crate::utils::time::today;
use crate::validation::user::UserForm;
use crate::validation::Dialog;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// A users-table row: the user plus its shortened permission summary
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRow {
    #[serde(flatten)]
    pub user: User,
    pub permissions_preview: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        let permissions_preview = user.permissions_preview();
        Self {
            user,
            permissions_preview,
        }
    }
}

/// GET /api/users?q=<text>
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<SearchQuery>,
) -> Result<Response, ConsoleError> {
    let rows: Vec<UserRow> = state
        .users
        .filter(&params.q)
        .into_iter()
        .map(UserRow::from)
        .collect();

    Ok((StatusCode::OK, Json(ListResponse::new(rows))).into_response())
}

/// Submit the "Create New User" dialog
///
/// POST /api/users
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<UserForm>,
) -> Result<Response, ConsoleError> {
    let user = Dialog::opened(form)
        .submit_with(|new| {
            state.users.insert_with(|id| {
                User::new(id, new.username, new.roles, new.specific_permissions, today())
            })
        })
        .map_err(|errors| {
            warn!(errors = %errors, "Rejected new user");
            ConsoleError::Validation(errors)
        })?;

    info!(id = user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(ItemResponse::new(UserRow::from(user)))).into_response())
}

/// DELETE /api/users/{id}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<u64>,
) -> Result<Response, ConsoleError> {
    let user = state
        .users
        .remove(&id)
        .ok_or_else(|| ConsoleError::NotFound(format!("User {}", id)))?;

    info!(id, username = %user.username, "User deleted");

    Ok((StatusCode::OK, Json(SuccessResponse::new(format!("User {} deleted", id)))).into_response())
}
