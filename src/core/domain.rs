use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

// RuntimeMode selects how the HTTP router is served
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RuntimeMode {
    Http,
    Lambda,
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub store: RepositoryStore,
    pub table_name: String,
    pub dynamodb_endpoint: String,
    pub runtime: RuntimeMode,
    pub bind_addr: SocketAddr,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str, store: RepositoryStore) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store,
            table_name: "books".to_string(),
            dynamodb_endpoint: "http://localhost:8000".to_string(),
            runtime: RuntimeMode::Http,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_level: "info".to_string(),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let branch = lookup("CATALOG_BRANCH").unwrap_or_else(|| "dev".to_string());
        let store = match lookup("CATALOG_STORE") {
            Some(val) => parse_store(val.as_str())?,
            None => RepositoryStore::Memory,
        };
        let mut config = Configuration::new(branch.as_str(), store);
        if let Some(table_name) = lookup("CATALOG_TABLE") {
            config.table_name = table_name;
        }
        if let Some(endpoint) = lookup("CATALOG_DYNAMODB_ENDPOINT") {
            config.dynamodb_endpoint = endpoint;
        }
        if let Some(runtime) = lookup("CATALOG_RUNTIME") {
            config.runtime = parse_runtime(runtime.as_str())?;
        }
        if let Some(addr) = lookup("CATALOG_BIND_ADDR") {
            config.bind_addr = addr.parse::<SocketAddr>().map_err(|err| LibraryError::validation(
                format!("invalid CATALOG_BIND_ADDR {}: {}", addr, err).as_str(), Some("CATALOG_BIND_ADDR".to_string())))?;
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            config.log_level = parse_log_level(level.as_str())?;
        }
        Ok(config)
    }
}

fn parse_store(val: &str) -> LibraryResult<RepositoryStore> {
    match val.to_lowercase().as_str() {
        "memory" => Ok(RepositoryStore::Memory),
        "dynamodb" => Ok(RepositoryStore::DynamoDB),
        "local-dynamodb" => Ok(RepositoryStore::LocalDynamoDB),
        _ => Err(LibraryError::validation(
            format!("unknown CATALOG_STORE {}", val).as_str(), Some("CATALOG_STORE".to_string()))),
    }
}

fn parse_runtime(val: &str) -> LibraryResult<RuntimeMode> {
    match val.to_lowercase().as_str() {
        "http" => Ok(RuntimeMode::Http),
        "lambda" => Ok(RuntimeMode::Lambda),
        _ => Err(LibraryError::validation(
            format!("unknown CATALOG_RUNTIME {}", val).as_str(), Some("CATALOG_RUNTIME".to_string()))),
    }
}

fn parse_log_level(val: &str) -> LibraryResult<String> {
    let level = val.to_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(level),
        _ => Err(LibraryError::validation(
            format!("unknown CATALOG_LOG_LEVEL {}", val).as_str(), Some("CATALOG_LOG_LEVEL".to_string()))),
    }
}
