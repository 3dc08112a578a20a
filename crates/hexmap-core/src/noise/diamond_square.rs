//! Diamond–Square midpoint displacement on a `(2^k + 1)²` lattice.
//!
//! The generator is consumed in a fixed order: the four corners, then each
//! round's diamond step and square step, both row-major. Reordering the
//! loops changes every downstream heightmap.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::TerrainError;
use crate::heightmap::Heightmap;

/// True when `n = 2^k + 1` for some `k ≥ 1`.
pub fn is_power_of_two_plus_one(n: usize) -> bool {
    n >= 3 && (n - 1).is_power_of_two()
}

/// Smallest `2^k + 1 ≥ size`, never below 3.
pub fn next_power_of_two_plus_one(size: usize) -> usize {
    if size <= 3 {
        return 3;
    }
    (size - 1).next_power_of_two() + 1
}

/// A lattice side already known to be `2^k + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeSize(usize);

impl LatticeSize {
    pub fn new(side: usize) -> Result<Self, TerrainError> {
        if is_power_of_two_plus_one(side) {
            Ok(Self(side))
        } else {
            Err(TerrainError::InvalidSize(side))
        }
    }

    /// The smallest valid lattice holding `n` samples per side.
    pub fn enclosing(n: usize) -> Self {
        Self(next_power_of_two_plus_one(n))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Run Diamond–Square on a `size × size` lattice.
///
/// Fails with [`TerrainError::InvalidSize`] unless `size = 2^k + 1`.
pub fn diamond_square(size: usize, roughness: f64, seed: i64) -> Result<Heightmap, TerrainError> {
    let lattice = LatticeSize::new(size)?;
    Ok(diamond_square_on(lattice, roughness, seed))
}

/// Infallible form for callers holding a checked [`LatticeSize`].
pub fn diamond_square_on(lattice: LatticeSize, roughness: f64, seed: i64) -> Heightmap {
    let size = lattice.get();
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut hm = Heightmap::flat(size, size);

    let last = size - 1;
    hm.set(0, 0, uniform(&mut rng));
    hm.set(0, last, uniform(&mut rng));
    hm.set(last, 0, uniform(&mut rng));
    hm.set(last, last, uniform(&mut rng));

    let mut step = last;
    let mut scale = roughness;

    while step > 1 {
        let half = step / 2;

        // ── Diamond: square centres from their four corners ─────────────────
        for y in (half..size).step_by(step) {
            for x in (half..size).step_by(step) {
                let avg = (hm.get(y - half, x - half)
                    + hm.get(y - half, x + half)
                    + hm.get(y + half, x - half)
                    + hm.get(y + half, x + half))
                    / 4.0;
                hm.set(y, x, avg + uniform(&mut rng) * scale);
            }
        }

        // ── Square: diamond centres from their four edge neighbours ─────────
        for y in (0..size).step_by(half) {
            for x in ((y + half) % step..size).step_by(step) {
                let avg = diamond_average(&hm, x, y, half);
                hm.set(y, x, avg + uniform(&mut rng) * scale);
            }
        }

        step /= 2;
        scale *= roughness;
    }

    hm
}

#[inline]
fn uniform(rng: &mut StdRng) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}

/// Mean of the up/down/left/right samples at distance `half`.
/// An index of -1 reads the far edge and an index of `size` reads index 0.
fn diamond_average(hm: &Heightmap, x: usize, y: usize, half: usize) -> f64 {
    let size = hm.width;
    let reflect = |i: isize| -> usize {
        if i < 0 {
            size - 1
        } else if i as usize >= size {
            0
        } else {
            i as usize
        }
    };
    let (x, y, h) = (x as isize, y as isize, half as isize);
    let up = hm.get(reflect(y - h), reflect(x));
    let down = hm.get(reflect(y + h), reflect(x));
    let left = hm.get(reflect(y), reflect(x - h));
    let right = hm.get(reflect(y), reflect(x + h));
    (up + down + left + right) / 4.0
}
