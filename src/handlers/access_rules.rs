use crate::core::error::ConsoleError;
use crate::core::extract::{JsonBody, PathParam, QueryParams};
use crate::core::state::AppState;
use crate::models::access_rule::AccessRule;
use crate::models::admin::{ItemResponse, ListResponse, SearchQuery, SuccessResponse};
use crate::validation::access_rule::AccessRuleForm;
use crate::validation::Dialog;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// GET /api/access-rules?q=<text>
pub async fn list_rules_handler(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<SearchQuery>,
) -> Result<Response, ConsoleError> {
    let rules = state.access_rules.filter(&params.q);

    Ok((StatusCode::OK, Json(ListResponse::new(rules))).into_response())
}

/// POST /api/access-rules  {"user": "...", "database": "...", "permission": "read"}
pub async fn create_rule_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<AccessRuleForm>,
) -> Result<Response, ConsoleError> {
    let rule = Dialog::opened(form)
        .submit_with(|new| {
            state.access_rules.insert_with(|id| AccessRule {
                id,
                user: new.user,
                database: new.database,
                permission: new.permission,
            })
        })
        .map_err(|errors| {
            warn!(errors = %errors, "Rejected access rule");
            ConsoleError::Validation(errors)
        })?;

    info!(
        id = rule.id,
        user = %rule.user,
        database = %rule.database,
        permission = %rule.permission,
        "Access rule created"
    );

    Ok((StatusCode::CREATED, Json(ItemResponse::new(rule))).into_response())
}

/// DELETE /api/access-rules/{id}
pub async fn delete_rule_handler(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<u64>,
) -> Result<Response, ConsoleError> {
    state
        .access_rules
        .remove(&id)
        .ok_or_else(|| ConsoleError::NotFound(format!("Access rule {}", id)))?;

    info!(id, "Access rule deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::new(format!("Access rule {} deleted", id))),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::test_state;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use serde::de::DeserializeOwned;

    async fn json_body<T: DeserializeOwned>(response: Response) -> T {
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn form(user: &str, database: &str, permission: &str) -> AccessRuleForm {
        AccessRuleForm {
            user: user.to_string(),
            database: database.to_string(),
            permission: permission.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rules_start_empty() {
        let response = list_rules_handler(State(test_state()), QueryParams(SearchQuery::default()))
            .await
            .unwrap();
        let body: ListResponse<AccessRule> = json_body(response).await;
        assert_eq!(body.total, 0);
    }

    #[tokio::test]
    async fn test_create_list_delete_rule() {
        let state = test_state();

        let response = create_rule_handler(State(state.clone()), JsonBody(form("john.doe", "prod-db", "Write")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: ItemResponse<AccessRule> = json_body(response).await;
        assert_eq!(body.item.id, 1);
        assert_eq!(body.item.permission, "write");

        create_rule_handler(State(state.clone()), JsonBody(form("jane.smith", "analytics-db", "read")))
            .await
            .unwrap();

        let response = list_rules_handler(
            State(state.clone()),
            QueryParams(SearchQuery { q: "ANALYTICS".to_string() }),
        )
        .await
        .unwrap();
        let body: ListResponse<AccessRule> = json_body(response).await;
        assert_eq!(body.total, 1);
        assert_eq!(body.items[0].user, "jane.smith");

        delete_rule_handler(State(state.clone()), PathParam(1)).await.unwrap();
        assert_eq!(state.access_rules.len(), 1);
    }

    #[tokio::test]
    async fn test_rule_with_unknown_permission_is_rejected() {
        let state = test_state();

        let err = create_rule_handler(State(state.clone()), JsonBody(form("john.doe", "prod-db", "root")))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.access_rules.is_empty());
    }
}
