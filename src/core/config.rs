use std::env;

use super::models::IncrementStrategy;

pub const DEFAULT_TABLE_NAME: &str = "cloud-resume-visitor-count";
pub const DEFAULT_PARTITION_KEY: &str = "ID";
pub const DEFAULT_RECORD_ID: &str = "Visitors";
pub const DEFAULT_COUNT_ATTRIBUTE: &str = "Count";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";
pub const DEFAULT_ALLOWED_METHODS: &str = "OPTIONS,POST,GET";
pub const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type";

/// CORS header values attached to every counter response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
    pub allowed_methods: String,
    pub allowed_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            allowed_methods: DEFAULT_ALLOWED_METHODS.to_string(),
            allowed_headers: DEFAULT_ALLOWED_HEADERS.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
    pub partition_key_name: String,
    pub record_id: String,
    pub count_attribute: String,
    pub cors: CorsConfig,
    pub increment_strategy: IncrementStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            partition_key_name: DEFAULT_PARTITION_KEY.to_string(),
            record_id: DEFAULT_RECORD_ID.to_string(),
            count_attribute: DEFAULT_COUNT_ATTRIBUTE.to_string(),
            cors: CorsConfig::default(),
            increment_strategy: IncrementStrategy::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// Every variable is optional; absent ones fall back to the values the
    /// deployed table and website were provisioned with.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| -> Result<String, String> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => {
                    Err(format!("{key}: must not be empty"))
                }
                Some(value) => Ok(value),
                None => Ok(default.to_string()),
            }
        };

        let increment_strategy = match lookup("COUNTER_INCREMENT_STRATEGY") {
            Some(raw) => raw
                .parse::<IncrementStrategy>()
                .map_err(|e| format!("COUNTER_INCREMENT_STRATEGY: {e}"))?,
            None => IncrementStrategy::default(),
        };

        Ok(Self {
            table_name: var("COUNTER_TABLE_NAME", DEFAULT_TABLE_NAME)?,
            partition_key_name: var("COUNTER_PARTITION_KEY", DEFAULT_PARTITION_KEY)?,
            record_id: var("COUNTER_RECORD_ID", DEFAULT_RECORD_ID)?,
            count_attribute: var("COUNTER_COUNT_ATTRIBUTE", DEFAULT_COUNT_ATTRIBUTE)?,
            cors: CorsConfig {
                allowed_origin: var("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN)?,
                allowed_methods: var("CORS_ALLOWED_METHODS", DEFAULT_ALLOWED_METHODS)?,
                allowed_headers: var("CORS_ALLOWED_HEADERS", DEFAULT_ALLOWED_HEADERS)?,
            },
            increment_strategy,
        })
    }
}
