use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::Level;

use crate::model::IdPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub log_dir: String,
    pub log_level: Level,
    pub id_policy: IdPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let id_policy = lookup("ID_POLICY").unwrap_or_else(|| IdPolicy::default().to_string());

        Ok(Self {
            store_path: lookup("ATTENDANCE_STORE")
                .unwrap_or_else(|| "employees.txt".to_string())
                .into(),
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level: log_level
                .parse::<Level>()
                .with_context(|| format!("LOG_LEVEL has invalid value {log_level:?}"))?,
            id_policy: id_policy
                .parse::<IdPolicy>()
                .with_context(|| format!("ID_POLICY has invalid value {id_policy:?}"))?,
        })
    }
}
