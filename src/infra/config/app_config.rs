use serde::{Deserialize, Serialize};

use crate::domain::boolean_like::UnrecognizedPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub decoding: DecodingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DecodingConfig {
    /// Handling of string flags that are neither truthy nor falsy.
    pub unrecognized: UnrecognizedPolicy,
}
