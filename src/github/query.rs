use serde::Serialize;

/// Maximum number of assets requested per release.
pub const ASSETS_PER_RELEASE: u32 = 50;

pub const RELEASES_QUERY: &str = r#"
query ($owner: String!, $repo: String!, $first: Int!) {
  repository(owner: $owner, name: $repo) {
    releases(first: $first, orderBy: { field: CREATED_AT, direction: DESC }) {
      totalCount
      nodes {
        id
        name
        tagName
        publishedAt
        isPrerelease
        isDraft
        url
        description
        releaseAssets(first: 50) {
          totalCount
          nodes {
            id
            name
            size
            downloadUrl
            contentType
          }
        }
      }
    }
  }
}"#;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("repository owner must not be empty")]
    EmptyOwner,
    #[error("repository name must not be empty")]
    EmptyRepo,
    #[error("release count must be at least 1")]
    ZeroCount,
}

/// Variables bound to [`RELEASES_QUERY`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    owner: String,
    repo: String,
    first: u32,
}

impl ReleaseQuery {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        first: u32,
    ) -> Result<Self, QueryError> {
        let owner = owner.into();
        let repo = repo.into();
        if owner.trim().is_empty() {
            return Err(QueryError::EmptyOwner);
        }
        if repo.trim().is_empty() {
            return Err(QueryError::EmptyRepo);
        }
        if first == 0 {
            return Err(QueryError::ZeroCount);
        }
        Ok(Self { owner, repo, first })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn first(&self) -> u32 {
        self.first
    }
}

impl std::fmt::Display for ReleaseQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// JSON body POSTed to the GraphQL endpoint.
#[derive(Serialize, Debug)]
pub struct QueryPayload<'a> {
    pub query: &'static str,
    pub variables: &'a ReleaseQuery,
}

impl<'a> QueryPayload<'a> {
    pub fn new(variables: &'a ReleaseQuery) -> Self {
        Self {
            query: RELEASES_QUERY,
            variables,
        }
    }
}
