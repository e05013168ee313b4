//! GitHub GraphQL releases query.

mod client;
mod error;
mod query;
mod types;

pub use client::{DEFAULT_API_URL, FetchReleases, GitHub, into_releases, user_agent};
#[cfg(test)]
pub use client::MockFetchReleases;
pub use error::FetchError;
pub use query::{ASSETS_PER_RELEASE, QueryError, QueryPayload, RELEASES_QUERY, ReleaseQuery};
pub use types::{
    AssetConnection, GraphQlData, GraphQlError, GraphQlResponse, Release, ReleaseAsset,
    ReleaseConnection, Repository,
};
