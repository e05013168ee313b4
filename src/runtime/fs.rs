//! File system operations.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to file {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        RealRuntime.write(&path, b"{}").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_real_runtime_write_missing_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = RealRuntime.write(&path, b"{}").unwrap_err();
        assert!(err.to_string().contains("Failed to write to file"));
    }
}
