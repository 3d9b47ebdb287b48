use crate::core::error::FormErrors;
use crate::models::database::PERMISSION_TYPES;
use crate::validation::dialog::Form;
use serde::Deserialize;

pub const REQUIRED: &str = "Please enter in this field";
pub const INVALID_PORT: &str = "Port must be a number between 1 and 65535";

/// Connection details entered on a catalog engine's page
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionForm {
    pub description: String,
    pub database_name: String,
    pub connection_address: String,
    pub port: String,
    pub username: String,
    pub password: String,
    /// Selected default permission types, see [`PERMISSION_TYPES`]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewConnection {
    pub name: String,
    pub description: String,
    pub address: String,
    pub port: u16,
    pub username: String,
    pub default_params: Vec<String>,
}

impl ConnectionForm {
    /// Check or uncheck a permission type in the multi-select
    pub fn toggle_permission(&mut self, permission: &str) {
        if let Some(index) = self.permissions.iter().position(|p| p == permission) {
            self.permissions.remove(index);
        } else {
            self.permissions.push(permission.to_string());
        }
    }

    fn required_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("description", self.description.as_str()),
            ("database_name", self.database_name.as_str()),
            ("connection_address", self.connection_address.as_str()),
            ("port", self.port.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

impl Form for ConnectionForm {
    type Output = NewConnection;

    fn validate(&self) -> Result<NewConnection, FormErrors> {
        let mut errors = FormErrors::new();

        for (field, value) in self.required_fields() {
            if value.trim().is_empty() {
                errors.add(field, REQUIRED);
            }
        }

        let port = match self.port.trim().parse::<u16>() {
            Ok(port) if port > 0 => port,
            _ => {
                errors.add("port", INVALID_PORT);
                0
            }
        };

        let mut default_params: Vec<String> = Vec::new();
        for permission in &self.permissions {
            if !PERMISSION_TYPES.contains(&permission.as_str()) {
                errors.add("permissions", format!("Unknown permission type '{}'", permission));
            } else if !default_params.contains(permission) {
                default_params.push(permission.clone());
            }
        }

        errors.into_result(NewConnection {
            name: self.database_name.trim().to_string(),
            description: self.description.trim().to_string(),
            address: self.connection_address.trim().to_string(),
            port,
            username: self.username.trim().to_string(),
            default_params,
        })
    }
}
