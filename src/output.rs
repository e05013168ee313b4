//! The persisted JSON document.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::normalize::NormalizedRelease;
use crate::runtime::{Runtime, absolute_path};

pub const AUTHOR: &str = "Saksham Singla (@Typeflu)";
pub const AUTHOR_URL: &str = "https://github.com/Typeflu";
pub const GITHUB_WEB_URL: &str = "https://github.com";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OutputDocument {
    pub metadata: Metadata,
    pub repository: RepositoryInfo,
    pub releases: Vec<NormalizedRelease>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub fetched_at: String,
    pub fetched_by: String,
    pub author: String,
    pub url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    pub owner: String,
    pub repo: String,
    pub url: String,
    pub total_releases: u64,
    pub fetched_releases: usize,
}

/// Wraps normalized releases with run metadata.
pub fn assemble(
    config: &Config,
    total_releases: u64,
    releases: Vec<NormalizedRelease>,
    now: DateTime<Utc>,
) -> OutputDocument {
    OutputDocument {
        metadata: Metadata {
            fetched_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            fetched_by: format!("gale v{}", crate::VERSION),
            author: AUTHOR.to_string(),
            url: AUTHOR_URL.to_string(),
        },
        repository: RepositoryInfo {
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            url: format!("{}/{}/{}", GITHUB_WEB_URL, config.owner, config.repo),
            total_releases,
            fetched_releases: releases.len(),
        },
        releases,
    }
}

/// Serializes `document` and writes it to `output`, returning the absolute path written.
///
/// Nothing touches the file system until serialization has succeeded.
#[tracing::instrument(skip(runtime, document))]
pub fn write_document<R: Runtime + ?Sized>(
    runtime: &R,
    output: &Path,
    document: &OutputDocument,
) -> Result<PathBuf> {
    let path = absolute_path(runtime, output)
        .with_context(|| format!("Could not resolve path {:?}", output))?;

    let json = serde_json::to_vec_pretty(document).context("Failed to serialize output JSON")?;

    debug!("Writing {} bytes to {:?}", json.len(), path);
    runtime.write(&path, &json)?;

    Ok(path)
}
