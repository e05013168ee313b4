//! Failure classification for a single releases query.

/// Errors produced while querying the GraphQL API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// HTTP status >= 400. The raw body is kept for diagnostics.
    #[error("remote rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// HTTP 200 carrying a GraphQL `errors` list.
    #[error("query errors:\n{}", bullet_list(.0))]
    Query(Vec<String>),

    /// HTTP 200 without errors, but `data.repository` is null.
    #[error("repository not found or access denied")]
    NotFound,

    /// The response body is not a valid GraphQL envelope.
    #[error("failed to decode GitHub API response: {0}")]
    Decode(#[source] serde_json::Error),
}

fn bullet_list(messages: &[String]) -> String {
    messages
        .iter()
        .map(|m| format!("- {}", m))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_errors_display_lists_each_message() {
        let err = FetchError::Query(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "query errors:\n- first\n- second");
    }

    #[test]
    fn test_rejected_display_carries_status_and_body() {
        let err = FetchError::Rejected {
            status: 401,
            body: r#"{"message":"Bad credentials"}"#.into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("remote rejected request"));
        assert!(msg.contains("401"));
        assert!(msg.contains("Bad credentials"));
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            FetchError::NotFound.to_string(),
            "repository not found or access denied"
        );
    }
}
