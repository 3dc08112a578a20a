//! Unrealistic elevation patterns in a tile set.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::{mean, sample_std_dev};
use crate::terrain::HexTile;

/// Outliers sit further than this many standard deviations from the mean.
const OUTLIER_SIGMA: f64 = 3.0;
/// Earth's full relief is just under 20 km; flag anything wider than 15 km.
const MAX_RELIEF_M: f64 = 15_000.0;
const MIN_STD_DEV_M: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Anomaly {
    /// More than 1 % of tiles are 3σ outliers.
    TooManyOutliers { count: usize },
    RangeExceedsEarth { range: f64 },
    TooFlat { std_dev: f64 },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::TooManyOutliers { count } => {
                write!(f, "too many elevation outliers detected ({count})")
            }
            Anomaly::RangeExceedsEarth { range } => {
                write!(f, "elevation range exceeds Earth's total range ({range:.0} m)")
            }
            Anomaly::TooFlat { std_dev } => {
                write!(f, "terrain too flat (std dev {std_dev:.1} m)")
            }
        }
    }
}

pub fn detect_anomalies(tiles: &[HexTile]) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    if tiles.is_empty() {
        return anomalies;
    }

    let elevations: Vec<f64> = tiles.iter().map(|t| t.elevation).collect();
    let m = mean(&elevations);
    let sd = sample_std_dev(&elevations, m);

    let outliers = elevations.iter().filter(|&&v| (v - m).abs() > OUTLIER_SIGMA * sd).count();
    if outliers > elevations.len() / 100 {
        anomalies.push(Anomaly::TooManyOutliers { count: outliers });
    }

    let lo = elevations.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = elevations.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if hi - lo > MAX_RELIEF_M {
        anomalies.push(Anomaly::RangeExceedsEarth { range: hi - lo });
    }

    if sd < MIN_STD_DEV_M {
        anomalies.push(Anomaly::TooFlat { std_dev: sd });
    }

    anomalies
}
