// Tertile tiering of a numeric population.
//
// Bucket edges are the 0, 1/3, 2/3 and 1 quantiles of the non-null values
// (linear interpolation between order statistics). Bins are right-closed and
// the lowest edge is included, so the minimum lands in `Low` and the maximum
// in `High`. Null inputs stay untiered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A three-level ordinal category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown tier '{0}': expected 'Low', 'Medium', or 'High'")]
pub struct ParseTierError(pub String);

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Low, Tier::Medium, Tier::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ParseTierError;

    /// Exact, case-sensitive match on the three labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTierError(s.to_string()))
    }
}

/// Edges of the three equal-count buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TertileEdges {
    pub min: f64,
    pub lower: f64,
    pub upper: f64,
    pub max: f64,
}

impl TertileEdges {
    /// Compute edges over the non-null, finite values. `None` if there are none.
    pub fn from_values(values: &[Option<f64>]) -> Option<Self> {
        let mut sorted: Vec<f64> = values
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            min: sorted[0],
            lower: quantile(&sorted, 1.0 / 3.0),
            upper: quantile(&sorted, 2.0 / 3.0),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Place a value into its bucket. Values outside `[min, max]` get no tier.
    pub fn classify(&self, value: f64) -> Option<Tier> {
        if !value.is_finite() || value < self.min || value > self.max {
            None
        } else if value <= self.lower {
            Some(Tier::Low)
        } else if value <= self.upper {
            Some(Tier::Medium)
        } else {
            Some(Tier::High)
        }
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Tier every entry of a population, preserving positions.
pub fn tertiles(values: &[Option<f64>]) -> Vec<Option<Tier>> {
    match TertileEdges::from_values(values) {
        Some(edges) => values
            .iter()
            .map(|v| v.and_then(|v| edges.classify(v)))
            .collect(),
        None => vec![None; values.len()],
    }
}
