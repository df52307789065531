//! Environment-driven configuration, resolved once at startup.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// Runtime configuration for the backend process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// Directory holding the trained artifacts and the response table.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from the environment, honoring a `.env` file.
    ///
    /// An unparsable bind address aborts startup; everything else has a
    /// working default.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let bind = env::var("CEYLONCARE_HTTP_BIND")
            .unwrap_or_else(|_| "127.0.0.1:5001".to_string())
            .parse::<SocketAddr>()?;
        let data_dir = env::var("CEYLONCARE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        Ok(Self { bind, data_dir })
    }
}
