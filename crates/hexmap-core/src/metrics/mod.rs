//! Terrain statistics and Earth-realism checks.

pub mod anomalies;
pub mod hypsometric;
pub mod score;
pub mod stats;

pub use anomalies::{detect_anomalies, Anomaly};
pub use hypsometric::{elevation_percentiles, hypsometric_match};
pub use score::{compute_realism_score, is_realistic, validate_elevation_range, MetricScore, RealismIssue, RealismScore};
pub use stats::{validate_terrain, TerrainStats};
