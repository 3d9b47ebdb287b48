pub mod record_list;
pub mod session_context;
