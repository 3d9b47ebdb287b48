use crate::core::error::ConsoleError;
use crate::core::state::AppState;
use crate::models::admin::{OverviewResponse, RoleUsage};
use crate::models::user::User;
use crate::stores::session_context::ConsoleSession;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use std::sync::Arc;

/// Dashboard counters
///
/// GET /api/overview
pub async fn overview_handler(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<ConsoleSession>,
) -> Result<Response, ConsoleError> {
    let users = state.users.all();

    let response = OverviewResponse {
        success: true,
        welcome_name: welcome_name(&session.username),
        total_users: users.len(),
        databases: state.connected_databases.len(),
        active_logins: state.sessions.count_where(|session| session.is_active()),
        roles: role_usage(&users),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Number of users holding each role name, in order of first appearance
pub fn role_usage(users: &[User]) -> Vec<RoleUsage> {
    let mut usage: Vec<RoleUsage> = Vec::new();
    for role in users.iter().flat_map(|user| user.roles.iter()) {
        match usage.iter_mut().find(|entry| &entry.name == role) {
            Some(entry) => entry.users += 1,
            None => usage.push(RoleUsage {
                name: role.clone(),
                users: 1,
            }),
        }
    }
    usage
}

/// Username with its first letter upper-cased
pub fn welcome_name(username: &str) -> String {
    let mut chars = username.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::test_state;
    use axum::body::Body;
    use http_body_util::BodyExt;

    #[test]
    fn test_welcome_name() {
        assert_eq!(welcome_name("admin"), "Admin");
        assert_eq!(welcome_name("Zed"), "Zed");
        assert_eq!(welcome_name(""), "");
    }

    #[tokio::test]
    async fn test_overview_counts_seeded_data() {
        let state = test_state();
        let session = state.session_context.login("admin".to_string());

        let response = overview_handler(State(state), Extension(session)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        let overview: OverviewResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(overview.welcome_name, "Admin");
        assert_eq!(overview.total_users, 3);
        assert_eq!(overview.databases, 5);
        assert_eq!(overview.active_logins, 2);
        assert_eq!(
            overview.roles,
            vec![
                RoleUsage { name: "admin".to_string(), users: 1 },
                RoleUsage { name: "editor".to_string(), users: 2 },
                RoleUsage { name: "viewer".to_string(), users: 1 },
                RoleUsage { name: "analyst".to_string(), users: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn test_overview_tracks_deletions() {
        let state = test_state();
        let session = state.session_context.login("ops".to_string());
        for id in 1..=3 {
            state.users.remove(&id);
        }

        let response = overview_handler(State(state), Extension(session)).await.unwrap();
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        let overview: OverviewResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(overview.total_users, 0);
        assert!(overview.roles.is_empty());
    }
}
