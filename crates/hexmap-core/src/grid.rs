//! Finite hex grids with bounded (region) or toroidal (world) edges.
//!
//! Cells are laid out even-q in offset space; `(col, row)` with
//! `col ∈ [0, width)`, `row ∈ [0, height)` is the canonical index. World
//! wrapping is a floored modulus in offset space, so a wrapped grid tiles
//! the plane as a rectangle.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::coords::{axial_round, hex_distance, hex_distance_wide, AxialCoord};
use crate::error::TerrainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Bounded edges; border cells have fewer than six neighbours.
    #[default]
    Region,
    /// Toroidal wrapping; every cell has six neighbours.
    World,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub topology: Topology,
}

impl GridConfig {
    pub fn new(width: usize, height: usize, topology: Topology) -> Self {
        Self { width, height, topology }
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.width == 0 || self.height == 0 {
            return Err(TerrainError::config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// A hex grid owning one `T` per cell.
///
/// The default payload `()` gives a shape-only grid; callers that need
/// per-cell state pick their own cell type via [`Grid::with_cells`].
#[derive(Debug, Clone)]
pub struct Grid<T = ()> {
    config: GridConfig,
    cells: Vec<T>,
    valid: HashSet<AxialCoord>,
}

impl Grid<()> {
    pub fn new(config: GridConfig) -> Self {
        Grid::with_cells(config)
    }
}

impl<T: Default + Clone> Grid<T> {
    /// Build a grid whose cells start as `T::default()`.
    pub fn with_cells(config: GridConfig) -> Self {
        let mut valid = HashSet::with_capacity(config.width * config.height);
        for row in 0..config.height {
            for col in 0..config.width {
                valid.insert(AxialCoord::from_offset(col as i32, row as i32));
            }
        }
        Self {
            config,
            cells: vec![T::default(); config.width * config.height],
            valid,
        }
    }
}

impl<T> Grid<T> {
    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn topology(&self) -> Topology {
        self.config.topology
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_valid(&self, c: AxialCoord) -> bool {
        match self.config.topology {
            Topology::Region => self.valid.contains(&c),
            Topology::World => self.valid.contains(&self.wrap(c)),
        }
    }

    /// Fold `c` back into the grid under World topology; identity for Region.
    pub fn wrap(&self, c: AxialCoord) -> AxialCoord {
        if self.config.topology != Topology::World || self.is_empty() {
            return c;
        }
        self.wrap_offset(c.to_offset_wide())
    }

    /// Floored modulus of a widened offset; the result always fits `i32`.
    fn wrap_offset(&self, (col, row): (i64, i64)) -> AxialCoord {
        let col = col.rem_euclid(self.config.width as i64);
        let row = row.rem_euclid(self.config.height as i64);
        AxialCoord::from_offset(col as i32, row as i32)
    }

    /// Every cell in row-major offset order.
    pub fn all_coords(&self) -> Vec<AxialCoord> {
        let mut coords = Vec::with_capacity(self.len());
        for row in 0..self.config.height {
            for col in 0..self.config.width {
                coords.push(AxialCoord::from_offset(col as i32, row as i32));
            }
        }
        coords
    }

    pub fn neighbors(&self, c: AxialCoord) -> Vec<AxialCoord> {
        match self.config.topology {
            Topology::Region => AxialCoord::DIRECTIONS
                .iter()
                .filter_map(|&d| c.checked_add(d))
                .filter(|n| self.valid.contains(n))
                .collect(),
            Topology::World => {
                if self.is_empty() {
                    return Vec::new();
                }
                let (q, r) = (i64::from(c.q), i64::from(c.r));
                AxialCoord::DIRECTIONS
                    .iter()
                    .map(|d| {
                        let (nq, nr) = (q + i64::from(d.q), r + i64::from(d.r));
                        // Even-q offset of the widened neighbour.
                        self.wrap_offset((nq, nr + nq.div_euclid(2) + (nq & 1)))
                    })
                    .collect()
            }
        }
    }

    pub fn is_edge(&self, c: AxialCoord) -> bool {
        match self.config.topology {
            Topology::Region => self.neighbors(c).len() < 6,
            Topology::World => false,
        }
    }

    /// Hex steps from `a` to `b`.
    ///
    /// Under World topology this is the minimum over `b` and its eight
    /// replicas `b + (dq·width, dr·height)` in axial space. It is symmetric
    /// but only approximates the torus metric on larger grids.
    pub fn distance(&self, a: AxialCoord, b: AxialCoord) -> i32 {
        match self.config.topology {
            Topology::Region => hex_distance(a, b),
            Topology::World => {
                let (w, h) = (self.config.width as i64, self.config.height as i64);
                let a = (i64::from(a.q), i64::from(a.r));
                let (bq, br) = (i64::from(b.q), i64::from(b.r));
                let mut best = i64::MAX;
                for dq in -1..=1 {
                    for dr in -1..=1 {
                        best = best.min(hex_distance_wide(a, (bq + dq * w, br + dr * h)));
                    }
                }
                i32::try_from(best).unwrap_or(i32::MAX)
            }
        }
    }

    /// Straight hex line from `a` to `b`, both ends included.
    ///
    /// Region paths need both endpoints inside the grid, otherwise the
    /// result is empty. World paths start at `wrap(a)`, run towards the
    /// nearest offset-space replica of `wrap(b)`, and every step is wrapped;
    /// the last step is `wrap(b)`.
    pub fn shortest_path(&self, a: AxialCoord, b: AxialCoord) -> Vec<AxialCoord> {
        match self.config.topology {
            Topology::Region => {
                if !self.is_valid(a) || !self.is_valid(b) {
                    return Vec::new();
                }
                hex_line(a, b)
            }
            Topology::World => {
                if self.is_empty() {
                    return Vec::new();
                }
                let (a, b) = (self.wrap(a), self.wrap(b));
                let target = self.nearest_replica(a, b);
                hex_line(a, target).into_iter().map(|c| self.wrap(c)).collect()
            }
        }
    }

    /// `a` and `b` must already be wrapped.
    fn nearest_replica(&self, a: AxialCoord, b: AxialCoord) -> AxialCoord {
        let (w, h) = (self.config.width as i32, self.config.height as i32);
        let (col, row) = b.to_offset();
        let mut best = b;
        let mut best_dist = hex_distance(a, b);
        for dc in -1..=1 {
            for dr in -1..=1 {
                let replica = AxialCoord::from_offset(col + dc * w, row + dr * h);
                let d = hex_distance(a, replica);
                if d < best_dist {
                    best_dist = d;
                    best = replica;
                }
            }
        }
        best
    }

    // ── Per-cell payload ────────────────────────────────────────────────────

    fn index(&self, c: AxialCoord) -> Option<usize> {
        let c = self.wrap(c);
        if !self.valid.contains(&c) {
            return None;
        }
        let (col, row) = c.to_offset();
        Some(row as usize * self.config.width + col as usize)
    }

    pub fn get(&self, c: AxialCoord) -> Option<&T> {
        self.index(c).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, c: AxialCoord) -> Option<&mut T> {
        self.index(c).map(move |i| &mut self.cells[i])
    }

    /// Store `value` at `c`. Returns false (and drops `value`) when `c` is
    /// outside the grid.
    pub fn set(&mut self, c: AxialCoord, value: T) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }
}

/// Interpolated line on the unbounded plane.
fn hex_line(a: AxialCoord, b: AxialCoord) -> Vec<AxialCoord> {
    let n = hex_distance(a, b);
    if n == 0 {
        return vec![a];
    }
    let mut path = Vec::with_capacity(n as usize + 1);
    path.push(a);
    for i in 1..n {
        let t = i as f64 / n as f64;
        let qf = a.q as f64 * (1.0 - t) + b.q as f64 * t;
        let rf = a.r as f64 * (1.0 - t) + b.r as f64 * t;
        path.push(axial_round(qf, rf));
    }
    path.push(b);
    path
}
