//! Server configuration from command-line flags and the environment.
//!
//! Every flag has an environment variable counterpart. The database
//! credentials (`DBUSER`, `DBPASS`) are required; everything else has a
//! default.

use clap::Parser;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::net::SocketAddr;

/// Runtime configuration of the task list server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(author, version, about = "Task list web server", long_about = None)]
pub struct ServerConfig {
    /// Database user.
    #[arg(long = "db-user", env = "DBUSER")]
    pub db_user: String,

    /// Database password.
    #[arg(long = "db-pass", env = "DBPASS", hide_env_values = true)]
    pub db_pass: String,

    /// Database host.
    #[arg(long = "db-host", env = "DBHOST", default_value = "127.0.0.1")]
    pub db_host: String,

    /// Database port.
    #[arg(long = "db-port", env = "DBPORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database name.
    #[arg(long = "db-name", env = "DBNAME", default_value = "todo")]
    pub db_name: String,

    /// Address the HTTP server binds to.
    #[arg(long, env = "TASKLIST_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Maximum number of pooled database connections.
    #[arg(long = "pool-size", env = "TASKLIST_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,
}

impl ServerConfig {
    /// Loads `.env` if present, then parses flags and environment.
    ///
    /// Exits the process with a usage message when a required value is
    /// missing.
    #[must_use]
    pub fn load() -> Self {
        // A missing .env file is the normal case.
        drop(dotenv::dotenv());
        Self::parse()
    }

    /// Returns the `PostgreSQL` connection URL with encoded credentials.
    ///
    /// IPv6 hosts are bracketed.
    #[must_use]
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            utf8_percent_encode(&self.db_user, NON_ALPHANUMERIC),
            utf8_percent_encode(&self.db_pass, NON_ALPHANUMERIC),
            self.url_host(),
            self.db_port,
            utf8_percent_encode(&self.db_name, NON_ALPHANUMERIC),
        )
    }

    /// Returns the database location without credentials, for logging.
    #[must_use]
    pub fn database_location(&self) -> String {
        format!("{}:{}/{}", self.url_host(), self.db_port, self.db_name)
    }

    fn url_host(&self) -> String {
        let host = self.db_host.as_str();
        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]")
        } else {
            host.to_owned()
        }
    }
}
