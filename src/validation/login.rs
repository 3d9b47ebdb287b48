use crate::core::error::FormErrors;
use crate::validation::dialog::Form;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl Form for LoginForm {
    /// The username to remember for the session
    type Output = String;

    /// Only presence is checked. Credentials are never verified.
    fn validate(&self) -> Result<String, FormErrors> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(FormErrors::single(
                "credentials",
                "Please enter username and password",
            ));
        }
        Ok(self.username.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_any_non_empty_credentials_pass() {
        assert_eq!(form("admin", "x").validate().unwrap(), "admin");
        assert_eq!(form(" jane.smith ", "wrong").validate().unwrap(), "jane.smith");
    }

    #[test]
    fn test_blank_fields_rejected() {
        for (u, p) in [("", "pw"), ("admin", ""), ("   ", "pw"), ("admin", "  ")] {
            let errors = form(u, p).validate().unwrap_err();
            assert_eq!(
                errors.get("credentials"),
                Some("Please enter username and password")
            );
        }
    }
}
