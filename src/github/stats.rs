use super::client::PageSource;
use super::error::FetchError;
use super::types::{QueryVariables, UserPage};
use crate::scoring::Stats;
use crate::window::TimeWindow;

/// Running totals threaded through the pagination loop.
#[derive(Debug, Default)]
struct StatsAccumulator {
    stats: Stats,
    pages: usize,
}

impl StatsAccumulator {
    /// Fold one page in. Account-level figures are taken from the first
    /// page only; stars are summed on every page.
    fn absorb(&mut self, page: &UserPage) -> u64 {
        if self.pages == 0 {
            let contributions = &page.contributions_collection;
            self.stats.followers = page.followers.total_count;
            self.stats.commits = contributions.total_commit_contributions;
            self.stats.prs = contributions.total_pull_request_contributions;
            self.stats.issues = contributions.total_issue_contributions;
        }

        let stars = page.repositories.stars();
        self.stats.stars = self.stats.stars.saturating_add(stars);
        self.pages += 1;
        stars
    }
}

/// Fetch every page of the stats query and collapse it into one record.
///
/// Follows `pageInfo.endCursor` while `pageInfo.hasNextPage` is true. Any
/// page failure aborts the whole fetch.
pub async fn fetch_stats<S: PageSource>(
    source: &S,
    login: &str,
    window: &TimeWindow,
    verbose: bool,
) -> Result<Stats, FetchError> {
    let mut acc = StatsAccumulator::default();
    let mut cursor: Option<String> = None;

    loop {
        let variables = QueryVariables::new(login, window, cursor.take());
        let page = source.fetch_page(&variables).await?;
        let page_stars = acc.absorb(&page);

        if verbose {
            eprintln!(
                "Fetched page {}: {} repositories, {} stars",
                acc.pages,
                page.repositories.nodes.len(),
                page_stars
            );
        }

        let page_info = page.repositories.page_info;
        if !page_info.has_next_page {
            break;
        }

        match page_info.end_cursor {
            Some(next) => cursor = Some(next),
            None => {
                return Err(FetchError::Decode(
                    "hasNextPage is true but endCursor is missing".to_string(),
                ))
            }
        }
    }

    Ok(acc.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::{
        ContributionsCollection, PageInfo, RepositoryConnection, RepositoryNode, TotalCount,
    };
    use chrono::{TimeZone, Utc};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays scripted pages and records every request it receives
    struct ScriptedSource {
        pages: Mutex<VecDeque<Result<UserPage, FetchError>>>,
        requests: Mutex<Vec<QueryVariables>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<UserPage, FetchError>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<QueryVariables> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl PageSource for ScriptedSource {
        async fn fetch_page(&self, variables: &QueryVariables) -> Result<UserPage, FetchError> {
            self.requests.lock().unwrap().push(variables.clone());
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("more requests than scripted pages")
        }
    }

    fn page(
        followers: u64,
        (commits, prs, issues): (u64, u64, u64),
        stars: &[u64],
        next: Option<&str>,
    ) -> UserPage {
        UserPage {
            followers: TotalCount {
                total_count: followers,
            },
            contributions_collection: ContributionsCollection {
                total_commit_contributions: commits,
                total_pull_request_contributions: prs,
                total_issue_contributions: issues,
            },
            repositories: RepositoryConnection {
                nodes: stars
                    .iter()
                    .map(|&s| {
                        Some(RepositoryNode {
                            stargazer_count: s,
                        })
                    })
                    .collect(),
                page_info: PageInfo {
                    has_next_page: next.is_some(),
                    end_cursor: next.map(str::to_string),
                },
            },
        }
    }

    fn window() -> TimeWindow {
        TimeWindow::trailing(Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_single_page() {
        let source = ScriptedSource::new(vec![Ok(page(30, (100, 10, 5), &[12, 8], None))]);

        let stats = fetch_stats(&source, "octocat", &window(), false).await.unwrap();

        assert_eq!(
            stats,
            Stats {
                commits: 100,
                stars: 20,
                prs: 10,
                issues: 5,
                followers: 30,
            }
        );
        let requests = source.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].cursor, None);
        assert_eq!(requests[0].login, "octocat");
        assert_eq!(requests[0].from, "2025-10-17T00:00:00.000Z");
        assert_eq!(requests[0].to, "2026-10-17T00:00:00.000Z");
    }

    #[tokio::test]
    async fn test_two_pages_accumulate_stars() {
        let source = ScriptedSource::new(vec![
            Ok(page(30, (100, 10, 5), &[10, 20, 30], Some("X"))),
            Ok(page(30, (100, 10, 5), &[5, 5], None)),
        ]);

        let stats = fetch_stats(&source, "octocat", &window(), false).await.unwrap();

        assert_eq!(stats.stars, 70);
        let requests = source.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].cursor, None);
        assert_eq!(requests[1].cursor.as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn test_account_fields_taken_from_first_page_only() {
        let source = ScriptedSource::new(vec![
            Ok(page(30, (100, 10, 5), &[1], Some("A"))),
            Ok(page(999, (999, 999, 999), &[2], Some("B"))),
            Ok(page(0, (0, 0, 0), &[3], None)),
        ]);

        let stats = fetch_stats(&source, "octocat", &window(), false).await.unwrap();

        assert_eq!(stats.followers, 30);
        assert_eq!(stats.commits, 100);
        assert_eq!(stats.prs, 10);
        assert_eq!(stats.issues, 5);
        assert_eq!(stats.stars, 6);

        let cursors: Vec<_> = source.requests().into_iter().map(|r| r.cursor).collect();
        assert_eq!(
            cursors,
            vec![None, Some("A".to_string()), Some("B".to_string())]
        );
    }

    #[tokio::test]
    async fn test_empty_repository_page() {
        let source = ScriptedSource::new(vec![Ok(page(4, (1, 0, 0), &[], None))]);

        let stats = fetch_stats(&source, "octocat", &window(), true).await.unwrap();

        assert_eq!(stats.stars, 0);
        assert_eq!(stats.followers, 4);
    }

    #[tokio::test]
    async fn test_error_on_later_page_aborts() {
        let source = ScriptedSource::new(vec![
            Ok(page(30, (100, 10, 5), &[10], Some("X"))),
            Err(FetchError::Transport {
                status: 502,
                body: "Bad Gateway".to_string(),
            }),
        ]);

        let err = fetch_stats(&source, "octocat", &window(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport { status: 502, .. }));
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_query_error_on_first_page_stops_immediately() {
        let source = ScriptedSource::new(vec![Err(FetchError::Query(
            r#"[{"message":"Something went wrong"}]"#.to_string(),
        ))]);

        let err = fetch_stats(&source, "octocat", &window(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Query(_)));
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_next_page_without_cursor_is_decode_error() {
        let mut broken = page(1, (1, 1, 1), &[1], None);
        broken.repositories.page_info.has_next_page = true;
        let source = ScriptedSource::new(vec![Ok(broken)]);

        let err = fetch_stats(&source, "octocat", &window(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(source.requests().len(), 1);
    }
}
