pub mod access_rule;
pub mod connection;
pub mod dialog;
pub mod login;
pub mod role;
pub mod user;

pub use dialog::{Dialog, DialogState, Form};
