// Application state (AppState)

use crate::core::config::Config;
use crate::models::access_rule::{AccessRule, RULE_SEARCH_FIELDS};
use crate::models::database::{
    ConnectedDatabase, DatabaseEngine, CONNECTED_SEARCH_FIELDS, ENGINE_SEARCH_FIELDS,
};
use crate::models::role::{AccessRole, ROLE_SEARCH_FIELDS};
use crate::models::session::{Session, SESSION_SEARCH_FIELDS};
use crate::models::user::{User, USER_SEARCH_FIELDS};
use crate::query::runner::QueryRunner;
use crate::stores::record_list::RecordList;
use crate::stores::session_context::SessionContext;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
///
/// One record list per console screen plus the login context and the query
/// runner. All fields are wrapped in Arc so handlers can clone the state freely.
#[derive(Clone)]
pub struct AppState {
    /// Users screen
    pub users: Arc<RecordList<User>>,

    /// Access control screen
    pub roles: Arc<RecordList<AccessRole>>,

    /// Rules created from the access-rule dialog
    pub access_rules: Arc<RecordList<AccessRule>>,

    /// Connected databases screen
    pub connected_databases: Arc<RecordList<ConnectedDatabase>>,

    /// "Databases available" catalog, read-only
    pub engines: Arc<RecordList<DatabaseEngine>>,

    /// Active login screen
    pub sessions: Arc<RecordList<Session>>,

    /// Console login tokens
    pub session_context: Arc<SessionContext>,

    pub query_runner: Arc<QueryRunner>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Empty screens, engine catalog loaded
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let session_context = Arc::new(SessionContext::new(config.session.token_prefix.clone()));

        let query_runner = Arc::new(QueryRunner::new(Duration::from_millis(
            config.query.execution_delay_ms,
        )));

        Self {
            users: Arc::new(RecordList::new(USER_SEARCH_FIELDS)),
            roles: Arc::new(RecordList::new(ROLE_SEARCH_FIELDS)),
            access_rules: Arc::new(RecordList::new(RULE_SEARCH_FIELDS)),
            connected_databases: Arc::new(RecordList::new(CONNECTED_SEARCH_FIELDS)),
            engines: Arc::new(RecordList::with_records(
                ENGINE_SEARCH_FIELDS,
                DatabaseEngine::catalog(),
            )),
            sessions: Arc::new(RecordList::new(SESSION_SEARCH_FIELDS)),
            session_context,
            query_runner,
            config,
        }
    }
}

#[cfg(test)]
pub fn test_state() -> Arc<AppState> {
    let state = AppState::new(crate::core::config::test_config());
    crate::core::startup::seed_demo_data(&state).expect("seed data is valid");
    Arc::new(state)
}
