use crate::utils::time::{current_timestamp, current_timestamp_millis};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// A signed-in console user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleSession {
    pub token: String,
    pub username: String,
    pub issued_at: i64,
}

/// Console login state: written at login, cleared at logout, read by the
/// session guard in front of every admin route.
///
/// Tokens are `<prefix><unix millis>` and never expire. There is no
/// credential check behind them.
pub struct SessionContext {
    sessions: DashMap<String, ConsoleSession>,
    token_prefix: String,
}

impl SessionContext {
    pub fn new(token_prefix: impl Into<String>) -> Self {
        Self {
            sessions: DashMap::new(),
            token_prefix: token_prefix.into(),
        }
    }

    /// Issue a fresh token for `username`.
    ///
    /// Two logins within the same millisecond would collide, so the stamp is
    /// bumped until a free token is found.
    pub fn login(&self, username: String) -> ConsoleSession {
        let mut stamp = current_timestamp_millis();
        loop {
            let token = format!("{}{}", self.token_prefix, stamp);
            match self.sessions.entry(token.clone()) {
                Entry::Vacant(slot) => {
                    let session = ConsoleSession {
                        token,
                        username,
                        issued_at: current_timestamp(),
                    };
                    slot.insert(session.clone());
                    return session;
                }
                Entry::Occupied(_) => stamp += 1,
            }
        }
    }

    /// Forget the token. Returns the session it belonged to, if any.
    pub fn logout(&self, token: &str) -> Option<ConsoleSession> {
        self.sessions.remove(token).map(|(_, session)| session)
    }

    pub fn get(&self, token: &str) -> Option<ConsoleSession> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_issues_prefixed_token() {
        let ctx = SessionContext::new("mock_token_");
        let session = ctx.login("admin".to_string());

        assert!(session.token.starts_with("mock_token_"));
        let stamp: i64 = session.token["mock_token_".len()..].parse().unwrap();
        assert!(stamp > 1_577_836_800_000);
        assert_eq!(ctx.get(&session.token).unwrap().username, "admin");
    }

    #[test]
    fn test_rapid_logins_get_distinct_tokens() {
        let ctx = SessionContext::new("t_");
        let tokens: Vec<String> = (0..50).map(|i| ctx.login(format!("user{}", i)).token).collect();

        let mut unique = tokens.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 50);
        assert_eq!(ctx.len(), 50);
    }

    #[test]
    fn test_logout_clears_token() {
        let ctx = SessionContext::new("mock_token_");
        let session = ctx.login("jane.smith".to_string());

        let removed = ctx.logout(&session.token).unwrap();
        assert_eq!(removed.username, "jane.smith");
        assert!(ctx.get(&session.token).is_none());
        assert!(ctx.logout(&session.token).is_none());
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_unknown_token() {
        let ctx = SessionContext::new("mock_token_");
        assert!(ctx.get("mock_token_1").is_none());
    }
}
