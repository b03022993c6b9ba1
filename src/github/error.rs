use std::fmt;

/// Failure while fetching stats from the GraphQL API.
///
/// None of these are retried; any of them aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout)
    Request(String),
    /// Non-success HTTP status
    Transport { status: u16, body: String },
    /// HTTP success, but the payload carried a top-level `errors` member
    Query(String),
    /// `data.user` was null
    UserNotFound(String),
    /// Body was not the expected shape
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "Request failed: {}", msg),
            FetchError::Transport { status, body } => {
                write!(f, "GitHub API returned HTTP {}: {}", status, body)
            }
            FetchError::Query(errors) => write!(f, "GraphQL errors: {}", errors),
            FetchError::UserNotFound(login) => write!(f, "GitHub user '{}' not found", login),
            FetchError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
