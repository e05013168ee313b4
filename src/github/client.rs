use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::time::Duration;

use super::error::FetchError;
use super::query::{QueryPayload, ReleaseQuery};
use super::types::{GraphQlResponse, ReleaseConnection};

pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

const MAX_IDLE_PER_HOST: usize = 10;
const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchReleases: Send + Sync {
    /// Issues a single releases query. No retries are attempted.
    async fn fetch_releases(&self, query: &ReleaseQuery) -> Result<ReleaseConnection, FetchError>;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }

    /// Builds the HTTP client used for the GraphQL endpoint.
    ///
    /// The token, if any, is sent as a sensitive `Authorization: bearer` default header.
    pub fn build_client(token: Option<&str>, timeout: Duration) -> Result<Client> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut auth_value = HeaderValue::from_str(&format!("bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using token for authentication: {}", mask_token(token));
        }

        let client = Client::builder()
            .user_agent(user_agent())
            .default_headers(headers)
            .timeout(timeout)
            .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
            .pool_idle_timeout(IDLE_TIMEOUT)
            .build()?;

        Ok(client)
    }
}

#[async_trait]
impl FetchReleases for GitHub {
    #[tracing::instrument(skip(self))]
    async fn fetch_releases(&self, query: &ReleaseQuery) -> Result<ReleaseConnection, FetchError> {
        GitHub::fetch_release_page(query, &self.client, &self.api_url).await
    }
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_release_page(
        query: &ReleaseQuery,
        client: &Client,
        api_url: &str,
    ) -> Result<ReleaseConnection, FetchError> {
        debug!(
            "Querying {} releases of {} from {}...",
            query.first(),
            query,
            api_url
        );

        let response = client
            .post(api_url)
            .json(&QueryPayload::new(query))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            debug!("GraphQL endpoint answered {}: {}", status, body);
            return Err(FetchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        let envelope: GraphQlResponse = serde_json::from_str(&body).map_err(FetchError::Decode)?;

        into_releases(envelope)
    }
}

/// Resolves a decoded envelope into the release page, or the matching failure.
pub fn into_releases(envelope: GraphQlResponse) -> Result<ReleaseConnection, FetchError> {
    if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
        return Err(FetchError::Query(
            errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    envelope
        .data
        .and_then(|data| data.repository)
        .map(|repository| repository.releases)
        .ok_or(FetchError::NotFound)
}

pub fn user_agent() -> String {
    format!(
        "gale/{} (+https://github.com/Typeflu)",
        crate::VERSION
    )
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
