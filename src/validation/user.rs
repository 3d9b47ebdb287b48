use crate::core::error::FormErrors;
use crate::models::user::PermissionFlags;
use crate::validation::dialog::Form;
use serde::Deserialize;
use serde_json::Value;

pub const INVALID_JSON: &str = "Invalid JSON format";
pub const NOT_A_FLAG_MAP: &str = "Permissions must be a JSON object of boolean flags";

/// Fields of the "Create New User" dialog, as typed
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    /// Comma-separated role names, e.g. `admin, editor`
    pub roles: String,
    /// Optional JSON object such as `{"read": true, "write": false}`
    pub specific_permissions: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub roles: Vec<String>,
    pub specific_permissions: PermissionFlags,
}

/// Split on commas, trim, drop empty entries
pub fn split_roles(roles: &str) -> Vec<String> {
    roles
        .split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the free-text permissions field. Blank text means no permissions.
///
/// Keys keep the order they were typed in.
pub fn parse_permissions(text: &str) -> Result<PermissionFlags, &'static str> {
    if text.trim().is_empty() {
        return Ok(PermissionFlags::new());
    }

    let value: Value = serde_json::from_str(text).map_err(|_| INVALID_JSON)?;

    match value {
        Value::Object(map) if map.values().all(Value::is_boolean) => Ok(map),
        _ => Err(NOT_A_FLAG_MAP),
    }
}

impl Form for UserForm {
    type Output = NewUser;

    fn validate(&self) -> Result<NewUser, FormErrors> {
        let mut errors = FormErrors::new();

        if self.username.trim().is_empty() {
            errors.add("username", "Username is required");
        }
        // Presence only, the password is not kept
        if self.password.trim().is_empty() {
            errors.add("password", "Password is required");
        }

        let specific_permissions = match parse_permissions(&self.specific_permissions) {
            Ok(map) => map,
            Err(message) => {
                errors.add("specific_permissions", message);
                PermissionFlags::new()
            }
        };

        errors.into_result(NewUser {
            username: self.username.trim().to_string(),
            roles: split_roles(&self.roles),
            specific_permissions,
        })
    }
}
