use crate::core::error::FormErrors;
use crate::models::role::DatabasePermission;
use crate::validation::dialog::Form;
use serde::Deserialize;

pub const DUPLICATE_PERMISSION: &str = "Database permission already added";
pub const NO_PERMISSIONS: &str = "At least one database permission is required";

/// Draft of the "Add Role" dialog
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RoleForm {
    pub name: String,
    pub description: String,
    pub databases: Vec<DatabasePermission>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub databases: Vec<DatabasePermission>,
}

impl RoleForm {
    /// Attach a (database, permission) pair to the draft.
    ///
    /// A database can appear once per role.
    pub fn add_permission(&mut self, database: &str, permission: &str) -> Result<(), FormErrors> {
        if database.trim().is_empty() || permission.trim().is_empty() {
            return Err(FormErrors::single(
                "databases",
                "Select a database and a permission",
            ));
        }
        if self.databases.iter().any(|entry| entry.database == database) {
            return Err(FormErrors::single("databases", DUPLICATE_PERMISSION));
        }

        self.databases.push(DatabasePermission::new(database, permission));
        Ok(())
    }

    pub fn remove_permission(&mut self, index: usize) -> Option<DatabasePermission> {
        (index < self.databases.len()).then(|| self.databases.remove(index))
    }

    fn check_databases(&self) -> Option<&'static str> {
        if self.databases.is_empty() {
            return Some(NO_PERMISSIONS);
        }
        if self
            .databases
            .iter()
            .any(|entry| entry.database.trim().is_empty() || entry.permission.trim().is_empty())
        {
            return Some("Each database permission needs a database and a permission level");
        }
        let has_duplicate = self
            .databases
            .iter()
            .enumerate()
            .any(|(i, entry)| self.databases[..i].iter().any(|prev| prev.database == entry.database));
        has_duplicate.then_some(DUPLICATE_PERMISSION)
    }
}

impl Form for RoleForm {
    type Output = NewRole;

    fn validate(&self) -> Result<NewRole, FormErrors> {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Role name is required");
        }
        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }
        if let Some(message) = self.check_databases() {
            errors.add("databases", message);
        }

        errors.into_result(NewRole {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            databases: self.databases.clone(),
        })
    }
}
