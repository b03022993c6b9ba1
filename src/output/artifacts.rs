use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::scoring::{Stats, Tier, Weights};
use crate::window::{format_instant, TimeWindow};

pub const BADGE_FILE: &str = "tier.json";
pub const METRICS_FILE: &str = "tier-metrics.json";

pub const BADGE_SCHEMA_VERSION: u32 = 1;
pub const BADGE_LABEL: &str = "Developer Tier";

/// shields.io endpoint payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub schema_version: u32,
    pub label: &'static str,
    pub message: String,
    pub color: String,
}

impl Badge {
    pub fn for_tier(tier: &Tier) -> Self {
        Self {
            schema_version: BADGE_SCHEMA_VERSION,
            label: BADGE_LABEL,
            message: tier.name.to_string(),
            color: tier.color.to_string(),
        }
    }
}

/// Audit record of how the badge was computed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics<'a> {
    pub updated: String,
    pub window_days: i64,
    pub score: i64,
    pub stats: Stats,
    pub weights: Weights,
    pub tiers: &'a [Tier],
}

impl<'a> Metrics<'a> {
    pub fn new(
        updated: DateTime<Utc>,
        window: &TimeWindow,
        score: i64,
        stats: Stats,
        weights: Weights,
        tiers: &'a [Tier],
    ) -> Self {
        Self {
            updated: format_instant(updated),
            window_days: window.days(),
            score,
            stats,
            weights,
            tiers,
        }
    }
}

/// Write `tier.json` (compact) and `tier-metrics.json` (pretty) into `dir`.
///
/// Both payloads are serialized before either file is touched. Existing
/// files are replaced, never merged. Returns the paths written.
pub fn write_artifacts(dir: &Path, badge: &Badge, metrics: &Metrics<'_>) -> Result<Vec<PathBuf>> {
    let badge_json = serde_json::to_vec(badge).context("Failed to serialize badge")?;
    let metrics_json =
        serde_json::to_vec_pretty(metrics).context("Failed to serialize metrics")?;

    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory at {}", dir.display()))?;
    }

    let badge_path = dir.join(BADGE_FILE);
    let metrics_path = dir.join(METRICS_FILE);

    write_file(&badge_path, &badge_json)?;
    write_file(&metrics_path, &metrics_json)?;

    Ok(vec![badge_path, metrics_path])
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    file.write_all(contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}
