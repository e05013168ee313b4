use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level GraphQL response envelope.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GraphQlResponse {
    pub data: Option<GraphQlData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GraphQlData {
    pub repository: Option<Repository>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub releases: ReleaseConnection,
}

/// One page of releases plus the repository-wide total.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConnection {
    pub total_count: u64,
    #[serde(deserialize_with = "nullable_nodes")]
    pub nodes: Vec<Release>,
}

/// Represents a GitHub release as returned by the GraphQL API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: String,
    pub name: Option<String>,
    pub tag_name: String,
    pub published_at: Option<DateTime<Utc>>,
    pub is_prerelease: bool,
    pub is_draft: bool,
    pub url: String,
    pub description: Option<String>,
    pub release_assets: AssetConnection,
}

/// Assets attached to a release. `total_count` may exceed `nodes.len()`
/// when the asset page is truncated.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetConnection {
    pub total_count: u64,
    #[serde(deserialize_with = "nullable_nodes")]
    pub nodes: Vec<ReleaseAsset>,
}

/// Represents a GitHub release asset
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseAsset {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub download_url: String,
    pub content_type: String,
}

/// GraphQL lists are `[T]`: both the list and its items may be null.
/// A null list decodes as empty and a null item as `T::default()`, keeping positions.
fn nullable_nodes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let nodes = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(nodes
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_release_node_decodes_as_default() {
        let response: GraphQlResponse = serde_json::from_str(
            r#"{"data":{"repository":{"releases":{"totalCount":2,"nodes":[null]}}}}"#,
        )
        .unwrap();

        let releases = response.data.unwrap().repository.unwrap().releases;
        assert_eq!(releases.total_count, 2);
        assert_eq!(releases.nodes, vec![Release::default()]);
    }

    #[test]
    fn test_null_asset_node_and_null_list() {
        let connection: AssetConnection =
            serde_json::from_str(r#"{"totalCount":3,"nodes":[null,{"id":"RA_1","name":"a.zip","size":7,"downloadUrl":"u","contentType":"application/zip"}]}"#)
                .unwrap();
        assert_eq!(connection.nodes.len(), 2);
        assert_eq!(connection.nodes[0], ReleaseAsset::default());
        assert_eq!(connection.nodes[1].size, 7);

        let connection: AssetConnection =
            serde_json::from_str(r#"{"totalCount":0,"nodes":null}"#).unwrap();
        assert!(connection.nodes.is_empty());
    }

    #[test]
    fn test_missing_nodes_field_is_rejected() {
        assert!(serde_json::from_str::<AssetConnection>(r#"{"totalCount":0}"#).is_err());
    }
}
