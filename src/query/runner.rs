use crate::core::error::ConsoleError;
use crate::models::database::{ConnectedDatabase, DatabaseType};
use crate::models::query::{sample_columns, sample_rows, QueryHint, QueryResult};
use dashmap::DashSet;
use std::time::Duration;
use tracing::debug;

const SQL_PLACEHOLDER: &str = "SELECT * FROM users WHERE status = 'active'";

/// Simulated query execution.
///
/// A run waits for the configured delay and returns the canned result set,
/// whatever the query text or database. While a run is pending, further runs
/// from the same owner (console session) are refused.
pub struct QueryRunner {
    delay: Duration,
    in_flight: DashSet<String>,
}

/// Clears the owner's in-flight marker when the run finishes or is dropped
struct InFlight<'a> {
    in_flight: &'a DashSet<String>,
    owner: String,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.in_flight.remove(&self.owner);
    }
}

impl QueryRunner {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: DashSet::new(),
        }
    }

    pub fn is_running(&self, owner: &str) -> bool {
        self.in_flight.contains(owner)
    }

    pub async fn run(
        &self,
        owner: &str,
        database: &ConnectedDatabase,
        query: &str,
    ) -> Result<QueryResult, ConsoleError> {
        if query.trim().is_empty() {
            return Err(ConsoleError::InvalidParameter("query must not be empty".to_string()));
        }

        if !self.in_flight.insert(owner.to_string()) {
            return Err(ConsoleError::QueryInProgress);
        }
        let _marker = InFlight {
            in_flight: &self.in_flight,
            owner: owner.to_string(),
        };

        debug!(
            database = %database.name,
            query_len = query.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Executing simulated query"
        );

        tokio::time::sleep(self.delay).await;

        Ok(QueryResult {
            database: database.name.clone(),
            columns: sample_columns(),
            rows: sample_rows(),
        })
    }
}

/// Editor label and placeholder for the selected engine
pub fn query_hint(db_type: Option<DatabaseType>) -> QueryHint {
    let Some(db_type) = db_type else {
        return QueryHint {
            label: "SQL Query".to_string(),
            placeholder: SQL_PLACEHOLDER.to_string(),
        };
    };

    let placeholder = match db_type {
        DatabaseType::MongoDb => "db.users.find({ status: 'active' })",
        DatabaseType::MySql | DatabaseType::PostgreSql => SQL_PLACEHOLDER,
        DatabaseType::SqlServer => "Enter your query here...",
    };

    QueryHint {
        label: format!("{} Query", db_type),
        placeholder: placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_timestamp;
    use std::sync::Arc;

    fn database() -> ConnectedDatabase {
        ConnectedDatabase {
            id: 1,
            db_type: DatabaseType::PostgreSql,
            name: "Production DB".to_string(),
            description: "Main production database".to_string(),
            address: "prod-db.example.com".to_string(),
            port: 5432,
            default_params: vec!["Read/Write".to_string()],
            username: "app_user".to_string(),
            created_at: parse_timestamp("2025-01-15 10:30:00").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_run_returns_canned_rows_regardless_of_query() {
        let runner = QueryRunner::new(Duration::from_millis(5));
        let db = database();

        let a = runner.run("s1", &db, "SELECT 1").await.unwrap();
        let b = runner.run("s1", &db, "DROP TABLE users").await.unwrap();

        assert_eq!(a.rows, sample_rows());
        assert_eq!(a.rows, b.rows);
        assert_eq!(a.columns, vec!["id", "name", "email", "status"]);
        assert_eq!(a.database, "Production DB");
        assert!(!runner.is_running("s1"));
    }

    #[tokio::test]
    async fn test_blank_query_rejected() {
        let runner = QueryRunner::new(Duration::from_millis(5));
        let err = runner.run("s1", &database(), "   ").await.unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_second_run_from_same_owner_is_refused() {
        let runner = Arc::new(QueryRunner::new(Duration::from_millis(200)));

        let first = {
            let runner = Arc::clone(&runner);
            tokio::spawn(async move {
                let db = database();
                runner.run("s1", &db, "SELECT 1").await
            })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(runner.is_running("s1"));

        let second = runner.run("s1", &database(), "SELECT 2").await;
        assert!(matches!(second, Err(ConsoleError::QueryInProgress)));

        // another console session is not blocked
        let other = runner.run("s2", &database(), "SELECT 3").await;
        assert!(other.is_ok());

        assert!(first.await.unwrap().is_ok());
        assert!(!runner.is_running("s1"));
    }

    #[tokio::test]
    async fn test_dropped_run_clears_marker() {
        let runner = QueryRunner::new(Duration::from_secs(5));
        let db = database();
        let result =
            tokio::time::timeout(Duration::from_millis(20), runner.run("s1", &db, "SELECT 1")).await;
        assert!(result.is_err());
        assert!(!runner.is_running("s1"));
    }

    #[test]
    fn test_query_hints() {
        assert_eq!(
            query_hint(None),
            QueryHint {
                label: "SQL Query".to_string(),
                placeholder: SQL_PLACEHOLDER.to_string(),
            }
        );
        let mongo = query_hint(Some(DatabaseType::MongoDb));
        assert_eq!(mongo.label, "MongoDB Query");
        assert_eq!(mongo.placeholder, "db.users.find({ status: 'active' })");
        assert_eq!(query_hint(Some(DatabaseType::MySql)).placeholder, SQL_PLACEHOLDER);
        assert_eq!(
            query_hint(Some(DatabaseType::SqlServer)).placeholder,
            "Enter your query here..."
        );
    }
}
