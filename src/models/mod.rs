pub mod access_rule;
pub mod admin;
pub mod database;
pub mod query;
pub mod role;
pub mod session;
pub mod user;
