use serde::{Deserialize, Serialize};

/// A 2D heightmap, row-major. Raw synthesis output is roughly in `[-1, 1]`;
/// after hypsometric shaping values are metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heightmap {
    pub data: Vec<f64>,
    pub width: usize,
    pub height: usize,
}

impl Heightmap {
    /// Create a heightmap filled with the given value.
    pub fn new(width: usize, height: usize, fill: f64) -> Self {
        Self { data: vec![fill; width * height], width, height }
    }

    pub fn flat(width: usize, height: usize) -> Self {
        Self::new(width, height, 0.0)
    }

    /// Build from rows of equal length. Returns None for ragged input.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Some(Self { data, width, height })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.data[row * self.width + col] = val;
    }

    /// Value at `(row, col)` with both indices reduced by floored modulus.
    pub fn sample_wrapped(&self, row: i64, col: i64) -> f64 {
        let r = row.rem_euclid(self.height as i64) as usize;
        let c = col.rem_euclid(self.width as i64) as usize;
        self.get(r, c)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn min_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
