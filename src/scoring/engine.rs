use serde::Serialize;

use super::config::{Tier, Weights};

/// Raw activity counts for one account.
///
/// `commits`, `prs` and `issues` are contribution totals inside the time
/// window; `followers` is a point-in-time count; `stars` is summed over the
/// account's public, non-fork, owned repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub commits: u64,
    pub stars: u64,
    pub prs: u64,
    pub issues: u64,
    pub followers: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i64,
    pub tier: Tier,
}

/// Weighted sum of the five metrics.
pub fn calculate_score(stats: &Stats, weights: &Weights) -> i64 {
    [
        (stats.commits, weights.commits),
        (stats.stars, weights.stars),
        (stats.prs, weights.prs),
        (stats.issues, weights.issues),
        (stats.followers, weights.followers),
    ]
    .into_iter()
    .fold(0i64, |acc, (count, weight)| {
        acc.saturating_add(weighted(count, weight))
    })
}

fn weighted(count: u64, weight: i64) -> i64 {
    i64::try_from(count)
        .unwrap_or(i64::MAX)
        .saturating_mul(weight)
}

/// Pick the first tier whose minimum the score meets.
///
/// Tiers are scanned in table order. If nothing matches (a table without a
/// zero floor and a low score) the last tier is returned. Returns `None`
/// only for an empty table.
pub fn classify(score: i64, tiers: &[Tier]) -> Option<&Tier> {
    tiers
        .iter()
        .find(|tier| score >= tier.min)
        .or_else(|| tiers.last())
}

/// Score the stats and classify the result against the given tables.
pub fn evaluate(stats: &Stats, weights: &Weights, tiers: &[Tier]) -> Option<ScoreResult> {
    let score = calculate_score(stats, weights);
    classify(score, tiers).map(|tier| ScoreResult { score, tier: *tier })
}
