use crate::stores::record_list::{FieldSelector, Record};
use serde::{Deserialize, Serialize};

/// Permission levels an access rule may grant
pub const RULE_PERMISSIONS: [&str; 3] = ["admin", "read", "write"];

/// A single user → database grant created from the access-rule dialog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessRule {
    pub id: u64,
    pub user: String,
    pub database: String,
    pub permission: String,
}

impl Record for AccessRule {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

fn by_user(rule: &AccessRule) -> &str {
    &rule.user
}

fn by_database(rule: &AccessRule) -> &str {
    &rule.database
}

pub const RULE_SEARCH_FIELDS: &[FieldSelector<AccessRule>] = &[by_user, by_database];
