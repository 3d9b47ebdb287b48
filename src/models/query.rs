use serde::{Deserialize, Serialize};

/// One row of the canned result set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: String,
}

impl QueryRow {
    fn new(id: u32, name: &str, email: &str, status: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            status: status.to_string(),
        }
    }
}

/// Rows returned by a simulated run. Never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryResult {
    pub database: String,
    pub columns: Vec<String>,
    pub rows: Vec<QueryRow>,
}

/// The result every run yields, whatever the query or database
pub fn sample_rows() -> Vec<QueryRow> {
    vec![
        QueryRow::new(1, "John Doe", "john@example.com", "active"),
        QueryRow::new(2, "Jane Smith", "jane@example.com", "active"),
        QueryRow::new(3, "Bob Wilson", "bob@example.com", "inactive"),
    ]
}

pub fn sample_columns() -> Vec<String> {
    ["id", "name", "email", "status"].iter().map(|c| c.to_string()).collect()
}

#[derive(Debug, Deserialize)]
pub struct RunQueryRequest {
    pub database_id: Option<u64>,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryHintParams {
    pub database_id: Option<u64>,
}

/// Editor label and placeholder for the selected database
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryHint {
    pub label: String,
    pub placeholder: String,
}
