use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::logging::LogFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // Logging (None: pick by environment)
    pub log_format: Option<LogFormat>,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Lot data
    pub lots_file: Option<PathBuf>,
    pub files_base_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let log_format = match env::var("LOG_FORMAT") {
            Ok(raw) => Some(
                LogFormat::parse(&raw)
                    .with_context(|| format!("LOG_FORMAT={raw} is not pretty, compact or json"))?,
            ),
            Err(_) => None,
        };

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Lot data (falls back to the built-in sample lot)
        let lots_file = match env::var("LOTS_FILE") {
            Ok(path) if !path.trim().is_empty() => {
                let path = PathBuf::from(path.trim());
                if !path.is_file() {
                    anyhow::bail!("LOTS_FILE={} does not exist", path.display());
                }
                Some(path)
            }
            _ => None,
        };
        let files_base_url = env::var("FILES_BASE_URL")
            .unwrap_or_else(|_| "/files".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Settings {
            env,
            server_addr,
            log_format,
            cors_allow_origins,
            lots_file,
            files_base_url,
        })
    }

    /// Settings used by tests and embedders that don't read the environment.
    pub fn local() -> Self {
        Settings {
            env: Environment::Dev,
            server_addr: "127.0.0.1:0".to_string(),
            log_format: None,
            cors_allow_origins: vec!["http://localhost:3000".to_string()],
            lots_file: None,
            files_base_url: "/files".to_string(),
        }
    }
}
