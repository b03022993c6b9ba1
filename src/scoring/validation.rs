use std::collections::HashSet;

use super::config::{Tier, Weights};

/// Validate the weight table.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &Weights) -> Result<(), Vec<String>> {
    let entries = [
        ("commits", weights.commits),
        ("stars", weights.stars),
        ("prs", weights.prs),
        ("issues", weights.issues),
        ("followers", weights.followers),
    ];

    let errors: Vec<String> = entries
        .iter()
        .filter(|(_, weight)| *weight <= 0)
        .map(|(metric, weight)| format!("weights.{}: must be positive, got {}", metric, weight))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the tier table.
/// Returns all validation errors at once (not just the first).
pub fn validate_tiers(tiers: &[Tier]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if tiers.is_empty() {
        return Err(vec!["tiers: table is empty".to_string()]);
    }

    let mut names = HashSet::new();
    for (i, tier) in tiers.iter().enumerate() {
        if tier.name.trim().is_empty() {
            errors.push(format!("tiers[{}].name: must not be empty", i));
        } else if !names.insert(tier.name) {
            errors.push(format!("tiers[{}].name: duplicate '{}'", i, tier.name));
        }

        if !is_hex_color(tier.color) {
            errors.push(format!(
                "tiers[{}].color: invalid '{}' - expected 6 hex digits without '#'",
                i, tier.color
            ));
        }

        if let Some(prev) = i.checked_sub(1).map(|p| &tiers[p]) {
            if tier.min >= prev.min {
                errors.push(format!(
                    "tiers[{}].min: {} is not below previous minimum {}",
                    i, tier.min, prev.min
                ));
            }
        }
    }

    if let Some(last) = tiers.last() {
        if last.min != 0 {
            errors.push(format!(
                "tiers[{}].min: lowest tier must have minimum 0, got {}",
                tiers.len() - 1,
                last.min
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit())
}
