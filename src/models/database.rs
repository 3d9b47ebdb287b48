use crate::stores::record_list::{FieldSelector, Record};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default permission types a connection can be registered with
pub const PERMISSION_TYPES: [&str; 4] = ["Read/Write", "Read Only", "Admin", "Custom"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseType {
    #[serde(rename = "PostgreSQL")]
    PostgreSql,
    #[serde(rename = "MySQL")]
    MySql,
    #[serde(rename = "MongoDB")]
    MongoDb,
    #[serde(rename = "SQL Server")]
    SqlServer,
}

impl DatabaseType {
    pub const ALL: [DatabaseType; 4] = [
        DatabaseType::PostgreSql,
        DatabaseType::MySql,
        DatabaseType::MongoDb,
        DatabaseType::SqlServer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::PostgreSql => "PostgreSQL",
            DatabaseType::MySql => "MySQL",
            DatabaseType::MongoDb => "MongoDB",
            DatabaseType::SqlServer => "SQL Server",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            DatabaseType::PostgreSql => 5432,
            DatabaseType::MySql => 3306,
            DatabaseType::MongoDb => 27017,
            DatabaseType::SqlServer => 1433,
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = String;

    /// Accepts the display name in any case, with or without the space in "SQL Server"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "postgresql" => Ok(DatabaseType::PostgreSql),
            "mysql" => Ok(DatabaseType::MySql),
            "mongodb" => Ok(DatabaseType::MongoDb),
            "sqlserver" => Ok(DatabaseType::SqlServer),
            _ => Err(format!("unknown database type '{}'", s)),
        }
    }
}

/// A registered external database. No live connection exists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectedDatabase {
    pub id: u64,
    #[serde(rename = "type")]
    pub db_type: DatabaseType,
    pub name: String,
    pub description: String,
    pub address: String,
    pub port: u16,
    pub default_params: Vec<String>,
    pub username: String,
    pub created_at: NaiveDateTime,
}

impl Record for ConnectedDatabase {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

fn by_name(db: &ConnectedDatabase) -> &str {
    &db.name
}

fn by_description(db: &ConnectedDatabase) -> &str {
    &db.description
}

pub const CONNECTED_SEARCH_FIELDS: &[FieldSelector<ConnectedDatabase>] = &[by_name, by_description];

/// Entry of the "databases available" catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatabaseEngine {
    pub id: u64,
    #[serde(rename = "type")]
    pub db_type: DatabaseType,
    pub name: String,
    pub description: String,
    pub overview: String,
    pub how_to_connect: String,
    /// Pre-filled port of the connection form
    pub default_port: u16,
}

impl DatabaseEngine {
    fn new(id: u64, db_type: DatabaseType, description: &str, overview: &str, how_to_connect: &str) -> Self {
        Self {
            id,
            db_type,
            name: db_type.as_str().to_string(),
            description: description.to_string(),
            overview: overview.to_string(),
            how_to_connect: how_to_connect.to_string(),
            default_port: db_type.default_port(),
        }
    }

    /// The fixed catalog, ids 1 to 4
    pub fn catalog() -> Vec<DatabaseEngine> {
        vec![
            DatabaseEngine::new(
                1,
                DatabaseType::MySql,
                "Open-source relational database",
                "MySQL is one of the most popular open-source relational databases. It's reliable, efficient, and widely used in web applications.",
                "MySQL is a popular open-source relational database. Connect using your hostname, port 3306, and credentials.",
            ),
            DatabaseEngine::new(
                2,
                DatabaseType::PostgreSql,
                "Advanced open-source database",
                "PostgreSQL is a powerful open-source object-relational database known for its advanced features and reliability.",
                "PostgreSQL is a powerful relational database. Connect using your hostname, port 5432, and database credentials.",
            ),
            DatabaseEngine::new(
                3,
                DatabaseType::MongoDb,
                "NoSQL document database",
                "MongoDB is a leading NoSQL document database that stores data in flexible JSON-like documents, perfect for scalable applications.",
                "MongoDB is a NoSQL document database. Connect using your connection string or hostname, port 27017, and credentials.",
            ),
            DatabaseEngine::new(
                4,
                DatabaseType::SqlServer,
                "Enterprise relational database",
                "Microsoft SQL Server is an enterprise-grade relational database with powerful tools for data management and analytics.",
                "SQL Server is an enterprise relational database. Connect using your server name, port 1433, and SQL authentication credentials.",
            ),
        ]
    }
}

impl Record for DatabaseEngine {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

fn engine_name(engine: &DatabaseEngine) -> &str {
    &engine.name
}

fn engine_description(engine: &DatabaseEngine) -> &str {
    &engine.description
}

pub const ENGINE_SEARCH_FIELDS: &[FieldSelector<DatabaseEngine>] = &[engine_name, engine_description];
