use crate::stores::record_list::{FieldSelector, Record};
use serde::{Deserialize, Serialize};

/// One (database, permission level) pair attached to a role
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabasePermission {
    pub database: String,
    pub permission: String,
}

impl DatabasePermission {
    pub fn new(database: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            permission: permission.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessRole {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub databases: Vec<DatabasePermission>,
    /// Shown next to the role. Not recomputed when users are created or removed.
    pub user_count: u32,
}

impl AccessRole {
    pub fn new(id: u64, name: String, description: String, databases: Vec<DatabasePermission>) -> Self {
        Self {
            id,
            name,
            description,
            databases,
            user_count: 0,
        }
    }
}

impl Record for AccessRole {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

fn by_name(role: &AccessRole) -> &str {
    &role.name
}

fn by_description(role: &AccessRole) -> &str {
    &role.description
}

pub const ROLE_SEARCH_FIELDS: &[FieldSelector<AccessRole>] = &[by_name, by_description];
