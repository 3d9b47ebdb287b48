pub mod access_rules;
pub mod auth;
pub mod connected_databases;
pub mod databases;
pub mod fallback;
pub mod health;
pub mod overview;
pub mod queries;
pub mod roles;
pub mod sessions;
pub mod users;
