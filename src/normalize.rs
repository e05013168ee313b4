//! Conversion of raw GraphQL release records into the output schema.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::format_bytes;
use crate::github::{Release, ReleaseAsset};

pub const UNNAMED_RELEASE: &str = "Unnamed Release";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRelease {
    pub id: String,
    pub name: String,
    pub version: String,
    pub published_at: Option<DateTime<Utc>>,
    pub is_prerelease: bool,
    pub is_draft: bool,
    pub url: String,
    pub description: String,
    /// Total number of assets reported by the API, which can exceed `assets.len()`.
    pub download_count: u64,
    pub assets: Vec<NormalizedAsset>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAsset {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub size_formatted: String,
    pub content_type: String,
    pub download_url: String,
}

impl From<&ReleaseAsset> for NormalizedAsset {
    fn from(asset: &ReleaseAsset) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            size: asset.size,
            size_formatted: format_bytes(asset.size),
            content_type: asset.content_type.clone(),
            download_url: asset.download_url.clone(),
        }
    }
}

impl From<&Release> for NormalizedRelease {
    fn from(release: &Release) -> Self {
        Self {
            id: release.id.clone(),
            name: display_name(release),
            version: release.tag_name.clone(),
            published_at: release.published_at,
            is_prerelease: release.is_prerelease,
            is_draft: release.is_draft,
            url: release.url.clone(),
            description: release.description.clone().unwrap_or_default(),
            download_count: release.release_assets.total_count,
            assets: release
                .release_assets
                .nodes
                .iter()
                .map(NormalizedAsset::from)
                .collect(),
        }
    }
}

/// Release name, falling back to the tag name, then to [`UNNAMED_RELEASE`].
fn display_name(release: &Release) -> String {
    release
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or_else(|| Some(release.tag_name.as_str()).filter(|tag| !tag.is_empty()))
        .unwrap_or(UNNAMED_RELEASE)
        .to_string()
}

/// Normalizes releases one-to-one, preserving order.
pub fn normalize(nodes: &[Release]) -> Vec<NormalizedRelease> {
    nodes.iter().map(NormalizedRelease::from).collect()
}
