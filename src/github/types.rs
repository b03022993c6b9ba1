use serde::{Deserialize, Serialize};

use crate::window::TimeWindow;

/// Variables sent alongside the stats query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryVariables {
    pub login: String,
    pub from: String,
    pub to: String,
    pub cursor: Option<String>, // null on the first page
}

impl QueryVariables {
    pub fn new(login: &str, window: &TimeWindow, cursor: Option<String>) -> Self {
        Self {
            login: login.to_string(),
            from: window.from_iso(),
            to: window.to_iso(),
            cursor,
        }
    }
}

/// Request body POSTed to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct QueryBody<'a> {
    pub query: &'a str,
    pub variables: &'a QueryVariables,
}

/// Top-level GraphQL envelope.
///
/// Both members stay raw JSON: `errors` is reported verbatim, and `data`
/// may be partially null when `errors` is present, so it is only decoded
/// into `ResponseData` once `errors` is known to be absent.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    pub data: Option<serde_json::Value>,
    pub errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
    pub user: Option<UserPage>,
}

/// One page of the stats query for a single user.
///
/// Account-level fields repeat identically on every page; only
/// `repositories` changes as the cursor advances.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub followers: TotalCount,
    pub contributions_collection: ContributionsCollection,
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub total_commit_contributions: u64,
    pub total_pull_request_contributions: u64,
    pub total_issue_contributions: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    #[serde(default)]
    pub nodes: Vec<Option<RepositoryNode>>,
    pub page_info: PageInfo,
}

impl RepositoryConnection {
    /// Star total for the repositories on this page
    pub fn stars(&self) -> u64 {
        self.nodes
            .iter()
            .flatten()
            .map(|repo| repo.stargazer_count)
            .sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub stargazer_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}
