use serde::Deserialize;

use crate::{
    domain::boolean_like::UnrecognizedPolicy,
    infra::config::{AppConfig, DecodingConfig, LogConfig},
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub decoding: Option<FileDecodingConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(decoding) = self.decoding {
            decoding.merge_into(&mut config.decoding);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDecodingConfig {
    pub unrecognized: Option<UnrecognizedPolicy>,
}

impl FileDecodingConfig {
    fn merge_into(self, config: &mut DecodingConfig) {
        if let Some(policy) = self.unrecognized {
            config.unrecognized = policy;
        }
    }
}
