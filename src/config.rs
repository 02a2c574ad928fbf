use crate::models::SaleMonth;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_SEED_SOURCE: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value \"{value}\": {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub db_name: String,
    pub collection_name: String,
    pub storage: StorageBackend,
    pub bind_addr: SocketAddr,
    pub seed_source: String,
    pub seed_replace: bool,
    pub default_month: SaleMonth,
    pub default_per_page: u64,
    pub max_per_page: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = Self {
            mongo_uri: var("MONGO_URI", "mongodb://localhost:27017"),
            db_name: var("DB_NAME", "transactionsDB"),
            collection_name: var("COLLECTION_NAME", "transactions"),
            storage: parse("STORAGE_BACKEND", var("STORAGE_BACKEND", "mongo"))?,
            bind_addr: parse("BIND_ADDR", var("BIND_ADDR", "0.0.0.0:5000"))?,
            seed_source: var("SEED_SOURCE", DEFAULT_SEED_SOURCE),
            seed_replace: parse("SEED_REPLACE", var("SEED_REPLACE", "false"))?,
            default_month: {
                let value = var("DEFAULT_MONTH", "March");
                SaleMonth::resolve(&value).map_err(|e| ConfigError::Invalid {
                    key: "DEFAULT_MONTH",
                    value,
                    reason: e.to_string(),
                })?
            },
            default_per_page: parse("DEFAULT_PER_PAGE", var("DEFAULT_PER_PAGE", "10"))?,
            max_per_page: parse("MAX_PER_PAGE", var("MAX_PER_PAGE", "100"))?,
        };

        if config.max_per_page == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_PER_PAGE",
                value: config.max_per_page.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if config.default_per_page == 0 || config.default_per_page > config.max_per_page {
            return Err(ConfigError::Invalid {
                key: "DEFAULT_PER_PAGE",
                value: config.default_per_page.to_string(),
                reason: format!("must be between 1 and {}", config.max_per_page),
            });
        }
        Ok(config)
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}
