// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, ScanError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    pub resume_path: PathBuf,
    pub not_found_path: PathBuf,
    pub report_path: PathBuf,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOC_DEDUP")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 27017,
                username: None,
                password: None,
                database: "kind_data".to_string(),
                collection: "report".to_string(),
            },
            scan: ScanConfig {
                resume_path: PathBuf::from("saved_list.txt"),
                not_found_path: PathBuf::from("not_found.txt"),
                report_path: PathBuf::from("duplicate_documents.xlsx"),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.host.is_empty() {
            return Err(ScanError::Config("database host must not be empty".to_string()));
        }

        if self.database.database.is_empty() || self.database.collection.is_empty() {
            return Err(ScanError::Config(
                "database and collection names must not be empty".to_string(),
            ));
        }

        if self.scan.resume_path == self.scan.not_found_path {
            return Err(ScanError::Config(
                "resume_path and not_found_path must be distinct files".to_string(),
            ));
        }

        Ok(())
    }
}
