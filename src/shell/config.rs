//! Server configuration.

use clap::Parser;

/// Timesheets API server configuration
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "timesheets", about = "Timesheets API server", long_about = None)]
pub struct AppConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 2022)]
    pub port: u16,
}

impl AppConfig {
    /// Loads configuration from the environment and CLI arguments, after
    /// reading a `.env` file when one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument or variable cannot be parsed.
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
