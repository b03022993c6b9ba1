use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

use crate::github::{fetch_stats, PageSource};
use crate::output::{write_artifacts, Badge, Metrics};
use crate::scoring::{evaluate, ScoreResult, Stats, Tier, Weights};
use crate::window::TimeWindow;

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub stats: Stats,
    pub result: ScoreResult,
    pub written: Vec<PathBuf>,
}

/// Full pipeline: fetch, score, classify, then write both artifacts into
/// `output_dir`.
///
/// Nothing is written unless the fetch completed for every page. The
/// metrics timestamp is the end of `window`.
pub async fn run<S: PageSource>(
    source: &S,
    login: &str,
    window: &TimeWindow,
    weights: &Weights,
    tiers: &[Tier],
    output_dir: &Path,
    verbose: bool,
) -> Result<RunOutcome> {
    let (stats, result) = fetch_and_score(source, login, window, weights, tiers, verbose)
        .await
        .context("Fetch failed")?;

    let badge = Badge::for_tier(&result.tier);
    let metrics = Metrics::new(window.to, window, result.score, stats, *weights, tiers);

    let written = write_artifacts(output_dir, &badge, &metrics).context("Write failed")?;

    if verbose {
        for path in &written {
            eprintln!("Wrote {}", path.display());
        }
    }

    Ok(RunOutcome {
        stats,
        result,
        written,
    })
}

/// Fetch all stats for `login` within `window`, then score and classify them.
///
/// Fetch errors are passed through unchanged (as `anyhow::Error` wrapping a
/// `FetchError`) so callers can report them with full detail.
pub async fn fetch_and_score<S: PageSource>(
    source: &S,
    login: &str,
    window: &TimeWindow,
    weights: &Weights,
    tiers: &[Tier],
    verbose: bool,
) -> Result<(Stats, ScoreResult)> {
    if verbose {
        eprintln!(
            "Window: {} .. {} ({} days)",
            window.from_iso(),
            window.to_iso(),
            window.days()
        );
    }

    let stats = fetch_stats(source, login, window, verbose).await?;

    if verbose {
        eprintln!(
            "Stats: commits={} stars={} prs={} issues={} followers={}",
            stats.commits, stats.stars, stats.prs, stats.issues, stats.followers
        );
    }

    let result = evaluate(&stats, weights, tiers).ok_or_else(|| anyhow!("Tier table is empty"))?;

    if verbose {
        eprintln!(
            "Score: {} -> {} (min {})",
            result.score, result.tier.name, result.tier.min
        );
    }

    Ok((stats, result))
}
