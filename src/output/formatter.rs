use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::ScoreResult;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// One-line run summary: "octocat: A Tier (score 300)"
///
/// With colors on, the tier name is painted in the tier's own badge color.
pub fn format_summary(login: &str, result: &ScoreResult, use_colors: bool) -> String {
    let name = result.tier.name;
    let tier = match (use_colors, parse_hex_color(result.tier.color)) {
        (true, Some((r, g, b))) => name.truecolor(r, g, b).bold().to_string(),
        _ => name.to_string(),
    };
    format!("{}: {} (score {})", login, tier, result.score)
}

/// Parse "FB8C00" into (0xFB, 0x8C, 0x00)
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
