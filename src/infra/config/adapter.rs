use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Loads [`AppConfig`] from an explicit path, or `./config.toml` when none is given.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let config = load(self.path.as_deref())?;
        tracing::debug!(
            path = ?self.path,
            unrecognized = ?config.decoding.unrecognized,
            "config loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::boolean_like::UnrecognizedPolicy;

    #[test]
    fn loads_decoding_policy_from_given_path() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let config_path = dir.path().join("typing.toml");
        fs::write(&config_path, "[decoding]\nunrecognized = \"treat_as_false\"\n")
            .expect("must write test config");

        let config = FileConfigAdapter::new(Some(&config_path))
            .load()
            .expect("config must load");

        assert_eq!(config.decoding.unrecognized, UnrecognizedPolicy::TreatAsFalse);
    }
}
