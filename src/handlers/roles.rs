use crate::core::error::ConsoleError;
use crate::core::extract::{JsonBody, PathParam, QueryParams};
use crate::core::state::AppState;
use crate::models::admin::{ItemResponse, ListResponse, SearchQuery, SuccessResponse};
use crate::models::role::AccessRole;
use crate::validation::role::RoleForm;
use crate::validation::Dialog;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// GET /api/roles?q=<text>
pub async fn list_roles_handler(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<SearchQuery>,
) -> Result<Response, ConsoleError> {
    let roles = state.roles.filter(&params.q);

    Ok((StatusCode::OK, Json(ListResponse::new(roles))).into_response())
}

/// Submit the "Add Role" dialog
///
/// POST /api/roles  {"name": "...", "description": "...", "databases": [{"database": "...", "permission": "..."}]}
pub async fn create_role_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<RoleForm>,
) -> Result<Response, ConsoleError> {
    let role = Dialog::opened(form)
        .submit_with(|new| {
            state
                .roles
                .insert_with(|id| AccessRole::new(id, new.name, new.description, new.databases))
        })
        .map_err(|errors| {
            warn!(errors = %errors, "Rejected new role");
            ConsoleError::Validation(errors)
        })?;

    info!(
        id = role.id,
        name = %role.name,
        databases = role.databases.len(),
        "Role created"
    );

    Ok((StatusCode::CREATED, Json(ItemResponse::new(role))).into_response())
}

/// DELETE /api/roles/{id}
pub async fn delete_role_handler(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<u64>,
) -> Result<Response, ConsoleError> {
    let role = state
        .roles
        .remove(&id)
        .ok_or_else(|| ConsoleError::NotFound(format!("Role {}", id)))?;

    info!(id, name = %role.name, "Role deleted");

    Ok((StatusCode::OK, Json(SuccessResponse::new(format!("Role {} deleted", id)))).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::test_state;
    use crate::models::admin::ErrorResponse;
    use crate::models::role::DatabasePermission;
    use crate::validation::role::NO_PERMISSIONS;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use serde::de::DeserializeOwned;

    async fn json_body<T: DeserializeOwned>(response: Response) -> T {
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ids(roles: &[AccessRole]) -> Vec<u64> {
        roles.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_list_roles_searches_name_and_description() {
        let state = test_state();

        let response = list_roles_handler(
            State(state.clone()),
            QueryParams(SearchQuery { q: "staging".to_string() }),
        )
        .await
        .unwrap();
        let body: ListResponse<AccessRole> = json_body(response).await;
        assert_eq!(ids(&body.items), vec![3]);

        let response = list_roles_handler(State(state), QueryParams(SearchQuery { q: "ROLE".to_string() }))
            .await
            .unwrap();
        let body: ListResponse<AccessRole> = json_body(response).await;
        assert_eq!(ids(&body.items), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_create_role() {
        let state = test_state();
        let mut form = RoleForm {
            name: "auditor-role".to_string(),
            description: "Reads audit tables".to_string(),
            ..RoleForm::default()
        };
        form.add_permission("prod-db", "read").unwrap();

        let response = create_role_handler(State(state.clone()), JsonBody(form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: ItemResponse<AccessRole> = json_body(response).await;
        assert_eq!(body.item.id, 4);
        assert_eq!(body.item.user_count, 0);
        assert_eq!(body.item.databases, vec![DatabasePermission::new("prod-db", "read")]);
        assert_eq!(ids(&state.roles.all()), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_create_role_without_permissions_is_rejected() {
        let state = test_state();
        let form = RoleForm {
            name: "empty-role".to_string(),
            description: "No databases".to_string(),
            databases: Vec::new(),
        };

        let err = create_role_handler(State(state.clone()), JsonBody(form)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ErrorResponse = json_body(err.into_response()).await;
        assert_eq!(body.errors.get("databases").map(String::as_str), Some(NO_PERMISSIONS));
        assert_eq!(state.roles.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_role_keeps_order() {
        let state = test_state();

        delete_role_handler(State(state.clone()), PathParam(2)).await.unwrap();
        assert_eq!(ids(&state.roles.all()), vec![1, 3]);

        let created = create_role_handler(
            State(state.clone()),
            JsonBody(RoleForm {
                name: "ops-role".to_string(),
                description: "Operations".to_string(),
                databases: vec![DatabasePermission::new("Staging DB", "admin")],
            }),
        )
        .await
        .unwrap();
        let body: ItemResponse<AccessRole> = json_body(created).await;
        assert_eq!(body.item.id, 4);
    }

    #[tokio::test]
    async fn test_delete_unknown_role() {
        let err = delete_role_handler(State(test_state()), PathParam(99)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
