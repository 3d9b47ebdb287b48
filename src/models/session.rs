use crate::stores::record_list::{FieldSelector, Record};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Closed,
}

/// A gateway login shown on the "Active login" screen.
///
/// Unrelated to the console's own login; see `stores::session_context`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user: String,
    pub database: String,
    pub address: String,
    pub status: SessionStatus,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
}

impl Session {
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }
}

impl Record for Session {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

fn by_user(session: &Session) -> &str {
    &session.user
}

fn by_database(session: &Session) -> &str {
    &session.database
}

fn by_address(session: &Session) -> &str {
    &session.address
}

pub const SESSION_SEARCH_FIELDS: &[FieldSelector<Session>] = &[by_user, by_database, by_address];

/// Transcript returned for every session's log view
pub const SAMPLE_SESSION_LOG: &str = "\
[10:15:23] Session started for user: john.doe
[10:15:25] Connected to database: prod-db
[10:15:27] Authentication successful
[10:16:12] Query executed: SELECT * FROM users WHERE status = 'active'
[10:16:13] Query returned 2456 rows in 142ms
[10:17:45] Query executed: UPDATE users SET last_login = NOW() WHERE id = 1
[10:17:46] Update completed. Rows affected: 1
[10:18:20] Query executed: DELETE FROM sessions WHERE expires < NOW()
[10:18:21] Delete completed. Rows affected: 42
[10:19:50] Session ended
[10:19:50] Total queries executed: 3
[10:19:50] Session duration: 4m 27s";

pub fn sample_log_lines() -> Vec<String> {
    SAMPLE_SESSION_LOG.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_log_has_one_entry_per_line() {
        let lines = sample_log_lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "[10:15:23] Session started for user: john.doe");
        assert_eq!(lines[11], "[10:19:50] Session duration: 4m 27s");
    }
}
