//! Weighted realism scoring over terrain statistics.
//!
//! Each check has an acceptable band. A value inside the band scores 1; a
//! value outside decays linearly to 0 over the check's tolerance. The total
//! is the weighted sum scaled to 0-100.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::TerrainStats;
use crate::terrain::{ELEVATION_MAX, ELEVATION_MIN};

/// A failed realism rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RealismIssue {
    MinElevationTooLow,
    MaxElevationTooHigh,
    LandPercentageOutOfRange,
    HypsometricMismatch,
    VarianceOutOfRange,
}

impl fmt::Display for RealismIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RealismIssue::MinElevationTooLow => "minimum elevation too low (deeper than the Mariana Trench)",
            RealismIssue::MaxElevationTooHigh => "maximum elevation too high (higher than Everest)",
            RealismIssue::LandPercentageOutOfRange => "land percentage outside realistic range (20-40%)",
            RealismIssue::HypsometricMismatch => "elevation distribution does not match Earth's hypsometric curve",
            RealismIssue::VarianceOutOfRange => "elevation variance outside realistic range",
        };
        f.write_str(msg)
    }
}

/// Per-check score result.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricScore {
    pub name: &'static str,
    pub raw_value: f64,
    pub score_0_1: f64,
    pub passed: bool,
    /// Set when the check failed.
    pub issue: Option<RealismIssue>,
}

/// Full realism score for a tile set.
#[derive(Debug, Clone, PartialEq)]
pub struct RealismScore {
    /// Total weighted score 0-100.
    pub total: f64,
    pub metrics: Vec<MetricScore>,
}

impl RealismScore {
    pub fn passed(&self) -> bool {
        self.metrics.iter().all(|m| m.passed)
    }

    /// Failed rules in check order.
    pub fn issues(&self) -> Vec<RealismIssue> {
        self.metrics.iter().filter_map(|m| m.issue).collect()
    }
}

struct Check {
    name: &'static str,
    issue: RealismIssue,
    weight: f64,
    lo: f64,
    hi: f64,
    tolerance: f64,
    value: fn(&TerrainStats) -> f64,
}

/// Elevation extremes may overshoot Earth's by this factor.
const EXTREME_SLACK: f64 = 1.2;
/// Roughly Earth's elevation standard deviation, metres.
const EARTH_STD_DEV: f64 = 2000.0;

const CHECKS: [Check; 5] = [
    Check {
        name: "min_elevation",
        issue: RealismIssue::MinElevationTooLow,
        weight: 0.15,
        lo: ELEVATION_MIN * EXTREME_SLACK,
        hi: f64::INFINITY,
        tolerance: 2000.0,
        value: |s| s.elevation_range[0],
    },
    Check {
        name: "max_elevation",
        issue: RealismIssue::MaxElevationTooHigh,
        weight: 0.15,
        lo: f64::NEG_INFINITY,
        hi: ELEVATION_MAX * EXTREME_SLACK,
        tolerance: 2000.0,
        value: |s| s.elevation_range[1],
    },
    Check {
        name: "land_percentage",
        issue: RealismIssue::LandPercentageOutOfRange,
        weight: 0.25,
        lo: 20.0,
        hi: 40.0,
        tolerance: 10.0,
        value: |s| s.land_percentage,
    },
    Check {
        name: "hypsometric_match",
        issue: RealismIssue::HypsometricMismatch,
        weight: 0.25,
        lo: 0.8,
        hi: f64::INFINITY,
        tolerance: 0.2,
        value: |s| s.hypsometric_match,
    },
    Check {
        name: "elevation_std_dev",
        issue: RealismIssue::VarianceOutOfRange,
        weight: 0.20,
        lo: EARTH_STD_DEV * 0.5,
        hi: EARTH_STD_DEV * 2.0,
        tolerance: 1000.0,
        value: |s| s.elevation_std_dev,
    },
];

pub fn compute_realism_score(stats: &TerrainStats) -> RealismScore {
    let mut total = 0.0;
    let metrics = CHECKS
        .iter()
        .map(|check| {
            let raw = (check.value)(stats);
            let passed = (check.lo..=check.hi).contains(&raw);
            let score = if passed {
                1.0
            } else {
                let excess = if raw < check.lo { check.lo - raw } else { raw - check.hi };
                // NaN excess falls through `max` to 0.
                (1.0 - excess / check.tolerance).max(0.0)
            };
            total += check.weight * score;
            MetricScore {
                name: check.name,
                raw_value: raw,
                score_0_1: score,
                passed,
                issue: (!passed).then_some(check.issue),
            }
        })
        .collect();
    RealismScore { total: total * 100.0, metrics }
}

/// Every failing realism rule; the flag is true when none fail.
pub fn is_realistic(stats: &TerrainStats) -> (bool, Vec<RealismIssue>) {
    let issues = compute_realism_score(stats).issues();
    (issues.is_empty(), issues)
}

/// Both elevation extremes lie within Earth's absolute bounds.
pub fn validate_elevation_range(stats: &TerrainStats) -> bool {
    stats.elevation_range[0] >= ELEVATION_MIN && stats.elevation_range[1] <= ELEVATION_MAX
}
