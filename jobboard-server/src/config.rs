//! Configuration module
//!
//! Server settings come from command-line flags, each with an environment
//! variable fallback.

use clap::Parser;
use std::time::Duration;

/// Job board server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "jobboard-server")]
#[command(about = "Job board directory service", long_about = None)]
pub struct ServerConfig {
    /// SQLite database location (created if missing)
    #[arg(long, env = "JOBBOARD_DATABASE_URL", default_value = "sqlite://jobs.db")]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "JOBBOARD_BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind_addr: String,

    /// Maximum number of pooled database connections
    #[arg(long, env = "JOBBOARD_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a free pooled connection
    #[arg(long, env = "JOBBOARD_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,

    /// Seconds SQLite waits on a locked database before failing
    #[arg(long, env = "JOBBOARD_BUSY_TIMEOUT_SECS", default_value_t = 5)]
    pub busy_timeout_secs: u64,
}

impl ServerConfig {
    /// Configuration with defaults for everything but the database location
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            bind_addr: "127.0.0.1:0".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 5,
            busy_timeout_secs: 5,
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}
