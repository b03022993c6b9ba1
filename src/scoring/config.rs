use serde::Serialize;

/// Per-metric multipliers applied to raw activity counts.
///
/// Serialized as `{"commits":1,"stars":5,"prs":3,"issues":2,"followers":2}`
/// in the metrics artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weights {
    pub commits: i64,
    pub stars: i64,
    pub prs: i64,
    pub issues: i64,
    pub followers: i64,
}

/// A named score band.
///
/// `color` is a 6-digit hex string without the leading `#`, as expected by
/// shields.io endpoint badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub name: &'static str,
    pub min: i64,
    pub color: &'static str,
}

pub const WEIGHTS: Weights = Weights {
    commits: 1,
    stars: 5,
    prs: 3,
    issues: 2,
    followers: 2,
};

/// Tier table, highest minimum first. The last entry has `min: 0` so every
/// non-negative score lands somewhere.
pub const TIERS: &[Tier] = &[
    Tier {
        name: "S Tier",
        min: 500,
        color: "8E24AA",
    },
    Tier {
        name: "A Tier",
        min: 250,
        color: "FB8C00",
    },
    Tier {
        name: "B Tier",
        min: 100,
        color: "43A047",
    },
    Tier {
        name: "C Tier",
        min: 25,
        color: "1E88E5",
    },
    Tier {
        name: "D Tier",
        min: 0,
        color: "546E7A",
    },
];
