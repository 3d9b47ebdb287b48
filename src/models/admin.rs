use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `?q=` free-text filter shared by the list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Filter for the connected-databases screen.
///
/// `types` is a comma-separated list of database types; absent means all.
#[derive(Debug, Default, Deserialize)]
pub struct ConnectedDatabaseQuery {
    #[serde(default)]
    pub q: String,
    pub types: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    /// Per-field messages, present for form validation failures
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            success: true,
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse<T> {
    pub success: bool,
    pub item: T,
}

impl<T> ItemResponse<T> {
    pub fn new(item: T) -> Self {
        Self { success: true, item }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUsage {
    pub name: String,
    pub users: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub success: bool,
    pub welcome_name: String,
    pub total_users: usize,
    pub databases: usize,
    pub active_logins: usize,
    pub roles: Vec<RoleUsage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionLogsResponse {
    pub success: bool,
    pub session_id: String,
    pub lines: Vec<String>,
}
