use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use std::time::Duration;

use super::error::FetchError;
use super::query::USER_STATS_QUERY;
use super::types::{GraphqlResponse, QueryBody, QueryVariables, ResponseData, UserPage};

pub const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";
pub const USER_AGENT: &str = "dev-tier";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can answer one page of the stats query.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, variables: &QueryVariables) -> Result<UserPage, FetchError>;
}

/// Create the HTTP client used for GraphQL requests
pub fn create_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")
}

/// Authenticated GraphQL client for the GitHub API
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl GraphqlClient {
    pub fn new(http: reqwest::Client, token: &str) -> Self {
        Self {
            http,
            endpoint: GRAPHQL_ENDPOINT.to_string(),
            token: token.to_string(),
        }
    }
}

impl PageSource for GraphqlClient {
    async fn fetch_page(&self, variables: &QueryVariables) -> Result<UserPage, FetchError> {
        let body = QueryBody {
            query: USER_STATS_QUERY,
            variables,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("bearer {}", self.token))
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Request(format!("failed to read response body: {}", e)))?;

        interpret_response(status, &text, &variables.login)
    }
}

/// Turn a raw HTTP status and body into a page of stats.
///
/// Checks run in order: HTTP status, top-level `errors`, then the shape of
/// `data.user`. An `errors` member fails the page even when `data` is also
/// present.
pub fn interpret_response(status: u16, body: &str, login: &str) -> Result<UserPage, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Transport {
            status,
            body: body.to_string(),
        });
    }

    let parsed: GraphqlResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if let Some(errors) = parsed.errors {
        return Err(FetchError::Query(errors.to_string()));
    }

    let data: Option<ResponseData> = match parsed.data {
        Some(value) => Some(
            serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?,
        ),
        None => None,
    };

    data.and_then(|data| data.user)
        .ok_or_else(|| FetchError::UserNotFound(login.to_string()))
}
