// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{
    access_rules, auth, connected_databases, databases, fallback, health, overview, queries, roles,
    sessions, users,
};
use crate::security::session_guard::require_session;
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Admin endpoints (require a console session token)
    let admin = Router::new()
        .route("/api/logout", post(auth::logout_handler))
        .route("/api/overview", get(overview::overview_handler))
        .route(
            "/api/users",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route("/api/users/{id}", delete(users::delete_user_handler))
        .route(
            "/api/roles",
            get(roles::list_roles_handler).post(roles::create_role_handler),
        )
        .route("/api/roles/{id}", delete(roles::delete_role_handler))
        .route(
            "/api/access-rules",
            get(access_rules::list_rules_handler).post(access_rules::create_rule_handler),
        )
        .route("/api/access-rules/{id}", delete(access_rules::delete_rule_handler))
        .route("/api/databases", get(databases::list_engines_handler))
        .route("/api/databases/{id}", get(databases::get_engine_handler))
        .route(
            "/api/databases/{id}/connect",
            post(databases::connect_database_handler),
        )
        .route(
            "/api/connected-databases",
            get(connected_databases::list_connected_handler),
        )
        .route(
            "/api/connected-databases/{id}",
            delete(connected_databases::delete_connected_handler),
        )
        .route("/api/sessions", get(sessions::list_sessions_handler))
        .route("/api/sessions/{id}", delete(sessions::revoke_session_handler))
        .route("/api/sessions/{id}/logs", get(sessions::session_logs_handler))
        .route("/api/queries/hint", get(queries::query_hint_handler))
        .route("/api/queries/run", post(queries::run_query_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        // Public endpoints
        .route("/health", get(health::health_handler))
        .route("/api/login", post(auth::login_handler))
        .merge(admin)
        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)
        .with_state(state)
}
