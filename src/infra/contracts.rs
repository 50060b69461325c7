use anyhow::Result;

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Source of raw typing-status payloads.
pub trait PayloadSource {
    fn read_payload(&mut self) -> Result<String>;
}
