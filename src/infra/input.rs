use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Result;

use crate::infra::{contracts::PayloadSource, error::AppError};

/// Reads the whole payload from a file, or from stdin when no path is given.
#[derive(Debug, Clone, Default)]
pub struct FilePayloadSource {
    path: Option<PathBuf>,
}

impl FilePayloadSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn origin(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "stdin".to_owned(),
        }
    }
}

impl PayloadSource for FilePayloadSource {
    fn read_payload(&mut self) -> Result<String> {
        let result = match &self.path {
            Some(path) => fs::read_to_string(path),
            None => {
                let mut raw = String::new();
                io::stdin().read_to_string(&mut raw).map(|_| raw)
            }
        };

        let raw = result.map_err(|source| AppError::InputRead {
            origin: self.origin(),
            source,
        })?;

        tracing::debug!(origin = %self.origin(), bytes = raw.len(), "payload read");
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_payload_from_file() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let path = dir.path().join("status.json");
        fs::write(&path, r#"{"typing":1}"#).expect("must write payload");

        let mut source = FilePayloadSource::new(Some(path));

        assert_eq!(
            source.read_payload().expect("payload must load"),
            r#"{"typing":1}"#
        );
    }

    #[test]
    fn reports_missing_file_with_its_path() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let path = dir.path().join("absent.json");

        let mut source = FilePayloadSource::new(Some(path.clone()));
        let error = source.read_payload().expect_err("missing file must fail");

        let app_error = error
            .downcast_ref::<AppError>()
            .expect("error should be an AppError");
        assert!(matches!(app_error, AppError::InputRead { .. }));
        assert!(error.to_string().contains(&path.display().to_string()));
    }
}
