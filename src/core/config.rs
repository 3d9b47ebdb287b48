use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Prefix of issued console tokens
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Artificial latency of a simulated query run
    #[serde(default = "default_execution_delay_ms")]
    pub execution_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Load the demo users, roles, databases and sessions at start-up
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_prefix: default_token_prefix(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            execution_delay_ms: default_execution_delay_ms(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_demo_data(),
        }
    }
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

fn default_token_prefix() -> String {
    "mock_token_".to_string()
}

fn default_execution_delay_ms() -> u64 {
    800
}

fn default_demo_data() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        if self.session.token_prefix.trim().is_empty() {
            bail!("token_prefix must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            port: 8080,
            num_threads: 2,
        },
        logging: LoggingConfig::default(),
        session: SessionConfig::default(),
        query: QueryConfig {
            execution_delay_ms: 10,
        },
        seed: SeedConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.server.num_threads > 0);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.session.token_prefix, "mock_token_");
        assert_eq!(config.query.execution_delay_ms, 800);
        assert!(config.seed.demo_data);
    }

    #[test]
    fn test_full_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9000
num_threads = 4

[logging]
level = "debug"
format = "console"

[session]
token_prefix = "tok_"

[query]
execution_delay_ms = 50

[seed]
demo_data = false
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.num_threads, 4);
        assert_eq!(config.logging.format, "console");
        assert_eq!(config.session.token_prefix, "tok_");
        assert_eq!(config.query.execution_delay_ms, 50);
        assert!(!config.seed.demo_data);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::from_file(Path::new("/nonexistent/console.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::from_toml("[server]\nport = 0\n").is_err());
        assert!(Config::from_toml("[server]\nport = 80\nnum_threads = 0\n").is_err());
        assert!(Config::from_toml("[server]\nport = 80\n[logging]\nlevel = \"loud\"\n").is_err());
        assert!(Config::from_toml("[server]\nport = 80\n[logging]\nformat = \"xml\"\n").is_err());
        assert!(Config::from_toml("[server]\nport = 80\n[session]\ntoken_prefix = \" \"\n").is_err());
    }

    #[test]
    fn test_missing_server_section() {
        assert!(Config::from_toml("[logging]\nlevel = \"info\"\n").is_err());
    }

    #[test]
    fn test_test_config_is_valid() {
        assert!(test_config().validate().is_ok());
    }
}
