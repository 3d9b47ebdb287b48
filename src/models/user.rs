use crate::stores::record_list::{FieldSelector, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Permission flags as entered, in the order they were typed. Values are booleans.
pub type PermissionFlags = Map<String, Value>;

/// Longest permission summary shown in the users table before it is cut
const PERMISSIONS_PREVIEW_LEN: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A console user account
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Role names, displayed as-is; never checked against the role list
    pub roles: Vec<String>,
    /// Free-form flags such as `"read:users": true`. Display only.
    pub specific_permissions: PermissionFlags,
    pub created_at: NaiveDate,
    pub status: UserStatus,
}

impl User {
    pub fn new(
        id: u64,
        username: String,
        roles: Vec<String>,
        specific_permissions: PermissionFlags,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            username,
            roles,
            specific_permissions,
            created_at,
            status: UserStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Compact JSON rendering of the permission map, cut to 27 characters
    /// plus `...` when longer than 30.
    pub fn permissions_preview(&self) -> String {
        let json = serde_json::to_string(&self.specific_permissions).unwrap_or_default();
        if json.chars().count() > PERMISSIONS_PREVIEW_LEN {
            let cut: String = json.chars().take(PERMISSIONS_PREVIEW_LEN - 3).collect();
            format!("{}...", cut)
        } else {
            json
        }
    }
}

impl Record for User {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

fn by_username(user: &User) -> &str {
    &user.username
}

pub const USER_SEARCH_FIELDS: &[FieldSelector<User>] = &[by_username];
