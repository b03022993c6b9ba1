pub mod artifacts;
pub mod formatter;

pub use artifacts::{write_artifacts, Badge, Metrics, BADGE_FILE, METRICS_FILE};
pub use formatter::{format_summary, should_use_colors};
