//! Runtime abstraction for system operations.
//!
//! Everything the pipeline touches outside the network goes through
//! [`Runtime`] so it can be mocked in tests.
//!
//! - `env` - Environment variables and working directory
//! - `fs` - File system writes

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::{Component, Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }
}

/// Resolves `path` against the runtime's working directory unless it is already
/// absolute, then removes `.` and `..` components lexically.
pub fn absolute_path<R: Runtime + ?Sized>(runtime: &R, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean_path(path));
    }
    Ok(clean_path(&runtime.current_dir()?.join(path)))
}

/// Lexical cleanup without touching the file system; `..` above the root is dropped.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
