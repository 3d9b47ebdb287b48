pub mod core;
pub mod handlers;
pub mod models;
pub mod query;
pub mod security;
pub mod stores;
pub mod utils;
pub mod validation;
