use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::core::state::AppState;
use crate::models::database::{ConnectedDatabase, DatabaseType};
use crate::models::role::{AccessRole, DatabasePermission};
use crate::models::session::{Session, SessionStatus};
use crate::models::user::{PermissionFlags, User, UserStatus};
use crate::utils::time::{parse_date, parse_timestamp};

fn date(value: &str) -> Result<chrono::NaiveDate> {
    parse_date(value).context(format!("Invalid seed date '{}'", value))
}

fn timestamp(value: &str) -> Result<chrono::NaiveDateTime> {
    parse_timestamp(value).context(format!("Invalid seed timestamp '{}'", value))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn flags(values: &[(&str, bool)]) -> PermissionFlags {
    values
        .iter()
        .map(|(k, v)| (k.to_string(), Value::Bool(*v)))
        .collect()
}

fn seed_users(state: &AppState) -> Result<()> {
    let users = [
        (1, "john.doe", &["admin", "editor"][..], &[("read:users", true), ("write:settings", false)][..], "2024-01-15", UserStatus::Active),
        (2, "jane.smith", &["viewer"][..], &[("read:reports", true)][..], "2024-01-20", UserStatus::Active),
        (3, "bob.wilson", &["editor", "analyst"][..], &[("read:data", true), ("write:data", true), ("delete:data", false)][..], "2024-02-01", UserStatus::Inactive),
    ];

    for (id, username, roles, permissions, created_at, status) in users {
        state.users.push(User {
            id,
            username: username.to_string(),
            roles: strings(roles),
            specific_permissions: flags(permissions),
            created_at: date(created_at)?,
            status,
        });
    }
    Ok(())
}

fn seed_roles(state: &AppState) {
    let roles = [
        (1, "admin-role", "Full administrative access", &[("prod-db", "admin"), ("backup-db", "admin")][..], 5),
        (2, "read-only-role", "Read-only access to databases", &[("analytics-db", "read")][..], 12),
        (3, "developer-role", "Developer access to staging and development", &[("Staging DB", "write"), ("Development DB", "write")][..], 8),
    ];

    for (id, name, description, databases, user_count) in roles {
        state.roles.push(AccessRole {
            id,
            name: name.to_string(),
            description: description.to_string(),
            databases: databases
                .iter()
                .map(|(db, perm)| DatabasePermission::new(*db, *perm))
                .collect(),
            user_count,
        });
    }
}

fn seed_connected_databases(state: &AppState) -> Result<()> {
    let databases = [
        (1, DatabaseType::PostgreSql, "Production DB", "Main production database", "prod-db.example.com", 5432, &["Read/Write", "Admin"][..], "app_user", "2025-01-15 10:30:00"),
        (2, DatabaseType::MySql, "Backup Database", "Backup and replication database", "backup-db.example.com", 3306, &["Read Only"][..], "backup_user", "2025-01-14 14:22:00"),
        (3, DatabaseType::MongoDb, "Analytics DB", "Document store for analytics", "mongo.example.com", 27017, &["Admin", "Custom"][..], "mongo_user", "2025-01-10 09:15:00"),
        (4, DatabaseType::PostgreSql, "Staging DB", "Staging environment database", "staging-db.example.com", 5432, &["Read/Write"][..], "stage_user", "2025-01-09 16:45:00"),
        (5, DatabaseType::MySql, "Development DB", "Local development database", "dev-db.example.com", 3306, &["Read/Write", "Custom"][..], "dev_user", "2025-01-08 11:20:00"),
    ];

    for (id, db_type, name, description, address, port, params, username, created_at) in databases {
        state.connected_databases.push(ConnectedDatabase {
            id,
            db_type,
            name: name.to_string(),
            description: description.to_string(),
            address: address.to_string(),
            port,
            default_params: strings(params),
            username: username.to_string(),
            created_at: timestamp(created_at)?,
        });
    }
    Ok(())
}

fn seed_sessions(state: &AppState) -> Result<()> {
    let sessions = [
        ("sess_001", "john.doe", "prod-db", "192.168.1.100", SessionStatus::Active, "2025-01-20 09:15:00", None),
        ("sess_002", "jane.smith", "backup-db", "192.168.1.105", SessionStatus::Active, "2025-01-20 10:22:00", None),
        ("sess_003", "bob.wilson", "mongo", "192.168.1.110", SessionStatus::Closed, "2025-01-20 08:00:00", Some("2025-01-20 09:30:00")),
    ];

    for (id, user, database, address, status, start_time, end_time) in sessions {
        state.sessions.push(Session {
            id: id.to_string(),
            user: user.to_string(),
            database: database.to_string(),
            address: address.to_string(),
            status,
            start_time: timestamp(start_time)?,
            end_time: end_time.map(timestamp).transpose()?,
        });
    }
    Ok(())
}

// this runs at boot time when [seed] demo_data is set
pub fn seed_demo_data(state: &AppState) -> Result<()> {
    seed_users(state).context("Failed to seed users")?;
    seed_roles(state);
    seed_connected_databases(state).context("Failed to seed connected databases")?;
    seed_sessions(state).context("Failed to seed sessions")?;

    info!(
        users = state.users.len(),
        roles = state.roles.len(),
        connected_databases = state.connected_databases.len(),
        sessions = state.sessions.len(),
        "Demo data loaded"
    );

    Ok(())
}
