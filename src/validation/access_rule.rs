use crate::core::error::FormErrors;
use crate::models::access_rule::RULE_PERMISSIONS;
use crate::validation::dialog::Form;
use serde::Deserialize;

/// Fields of the "Add Access Rule" dialog
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AccessRuleForm {
    pub user: String,
    pub database: String,
    pub permission: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccessRule {
    pub user: String,
    pub database: String,
    pub permission: String,
}

impl Form for AccessRuleForm {
    type Output = NewAccessRule;

    fn validate(&self) -> Result<NewAccessRule, FormErrors> {
        let mut errors = FormErrors::new();

        if self.user.trim().is_empty() {
            errors.add("user", "User is required");
        }
        if self.database.trim().is_empty() {
            errors.add("database", "Database is required");
        }

        let permission = self.permission.trim().to_lowercase();
        if permission.is_empty() {
            errors.add("permission", "Permission is required");
        } else if !RULE_PERMISSIONS.contains(&permission.as_str()) {
            errors.add(
                "permission",
                format!("Permission must be one of {}", RULE_PERMISSIONS.join(", ")),
            );
        }

        errors.into_result(NewAccessRule {
            user: self.user.trim().to_string(),
            database: self.database.trim().to_string(),
            permission,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(user: &str, database: &str, permission: &str) -> AccessRuleForm {
        AccessRuleForm {
            user: user.to_string(),
            database: database.to_string(),
            permission: permission.to_string(),
        }
    }

    #[test]
    fn test_valid_rule() {
        let rule = form("john.doe", "prod-db", "Read").validate().unwrap();
        assert_eq!(rule.permission, "read");
        assert_eq!(rule.database, "prod-db");
    }

    #[test]
    fn test_missing_fields() {
        let errors = form("", "", "").validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("user"), Some("User is required"));
    }

    #[test]
    fn test_unknown_permission() {
        let errors = form("john.doe", "prod-db", "delete").validate().unwrap_err();
        assert_eq!(
            errors.get("permission"),
            Some("Permission must be one of admin, read, write")
        );
    }
}
