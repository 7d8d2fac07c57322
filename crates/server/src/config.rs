//! Configuration: which backend answers lookups and where the server listens.
//!
//! The server reads `RATEFIND_*` variables (after loading `.env`); the CLI
//! fills a `LookupConfig` from its flags. Both build their `LookupSet` here.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use catalog::MovieCatalog;
use genai_client::{GenAiLookups, GenerationClient};
use lookups::{CatalogLookups, DemoLookups, LookupSet};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.dat";
pub const DEFAULT_GENAI_ADDR: &str = "http://localhost:50051";
pub const DEFAULT_GENAI_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Family of lookup implementations to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Demo,
    Catalog,
    GenAi,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Backend::Demo),
            "catalog" => Ok(Backend::Catalog),
            "genai" => Ok(Backend::GenAi),
            other => Err(ConfigError::invalid(
                "backend",
                other,
                "expected one of demo, catalog, genai",
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Demo => "demo",
            Backend::Catalog => "catalog",
            Backend::GenAi => "genai",
        };
        f.write_str(name)
    }
}

/// Everything needed to build a `LookupSet`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub backend: Backend,
    pub catalog_path: PathBuf,
    pub genai_addr: String,
    pub genai_timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            genai_addr: DEFAULT_GENAI_ADDR.to_string(),
            genai_timeout: DEFAULT_GENAI_TIMEOUT,
        }
    }
}

impl LookupConfig {
    /// Build the capabilities of the configured backend.
    ///
    /// Loads the catalog file or connects to the generation service when
    /// the backend needs it.
    pub async fn build(&self) -> Result<LookupSet> {
        let lookups = match self.backend {
            Backend::Demo => LookupSet::from_backend(DemoLookups::new()),
            Backend::Catalog => {
                let catalog = MovieCatalog::load_from_file(&self.catalog_path).with_context(
                    || format!("Loading catalog from {}", self.catalog_path.display()),
                )?;
                LookupSet::from_backend(CatalogLookups::new(Arc::new(catalog)))
            }
            Backend::GenAi => {
                let client = GenerationClient::connect(self.genai_addr.clone(), self.genai_timeout)
                    .await
                    .with_context(|| format!("Connecting to generation service at {}", self.genai_addr))?;
                LookupSet::from_backend(GenAiLookups::new(client))
            }
        };

        info!("Using {} backend: {:?}", self.backend, lookups);
        Ok(lookups)
    }
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub lookups: LookupConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            lookups: LookupConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Read settings through `get`; unset or blank keys take their defaults.
    ///
    /// # Keys
    /// * `RATEFIND_BIND` - listen address (default 127.0.0.1:3000)
    /// * `RATEFIND_BACKEND` - demo | catalog | genai (default demo)
    /// * `RATEFIND_CATALOG` - catalog file (default data/catalog.dat)
    /// * `RATEFIND_GENAI_ADDR` - generation service URL
    /// * `RATEFIND_GENAI_TIMEOUT_MS` - per-request timeout (default 10000)
    pub fn from_source(
        get: impl Fn(&str) -> Option<String>,
    ) -> std::result::Result<Self, ConfigError> {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let mut config = ServerConfig::default();

        if let Some(value) = get("RATEFIND_BIND") {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("RATEFIND_BIND", &value, e))?;
        }
        if let Some(value) = get("RATEFIND_BACKEND") {
            config.lookups.backend = value
                .parse()
                .map_err(|_| ConfigError::invalid("RATEFIND_BACKEND", &value, "expected one of demo, catalog, genai"))?;
        }
        if let Some(value) = get("RATEFIND_CATALOG") {
            config.lookups.catalog_path = PathBuf::from(value.trim());
        }
        if let Some(value) = get("RATEFIND_GENAI_ADDR") {
            config.lookups.genai_addr = value.trim().to_string();
        }
        if let Some(value) = get("RATEFIND_GENAI_TIMEOUT_MS") {
            let millis: u64 = value
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("RATEFIND_GENAI_TIMEOUT_MS", &value, e))?;
            if millis == 0 {
                return Err(ConfigError::invalid(
                    "RATEFIND_GENAI_TIMEOUT_MS",
                    &value,
                    "timeout must be positive",
                ));
            }
            config.lookups.genai_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
