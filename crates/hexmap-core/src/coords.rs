//! Hex coordinate algebra for flat-top hexagons.
//! Offsets use the even-q layout; pixel math uses f64.
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A hex addressed by axial coordinates. The cube coordinate `s = -q - r` is implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    /// Neighbour directions: E, NE, NW, W, SW, SE.
    pub const DIRECTIONS: [AxialCoord; 6] = [
        AxialCoord { q: 1, r: 0 },
        AxialCoord { q: 1, r: -1 },
        AxialCoord { q: 0, r: -1 },
        AxialCoord { q: -1, r: 0 },
        AxialCoord { q: -1, r: 1 },
        AxialCoord { q: 0, r: 1 },
    ];

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// The adjacent hex in `DIRECTIONS[direction % 6]`.
    pub fn neighbor(self, direction: usize) -> Self {
        self + Self::DIRECTIONS[direction % 6]
    }

    /// Even-q offset `(col, row)`. Rows past the `i32` range wrap around.
    #[inline]
    pub fn to_offset(self) -> (i32, i32) {
        (self.q, self.r.wrapping_add(ceil_half(self.q)))
    }

    /// Inverse of [`AxialCoord::to_offset`].
    #[inline]
    pub fn from_offset(col: i32, row: i32) -> Self {
        Self { q: col, r: row.wrapping_sub(ceil_half(col)) }
    }

    /// Offset `(col, row)` widened to `i64`; never overflows.
    #[inline]
    pub(crate) fn to_offset_wide(self) -> (i64, i64) {
        (i64::from(self.q), i64::from(self.r) + i64::from(ceil_half(self.q)))
    }

    /// `self + other`, or None when either component overflows.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self { q: self.q.checked_add(other.q)?, r: self.r.checked_add(other.r)? })
    }

    /// Centre of the hex in pixels for a hex of radius `size`.
    pub fn to_pixel(self, size: f64) -> (f64, f64) {
        let q = self.q as f64;
        let r = self.r as f64;
        let x = size * (1.5 * q);
        let y = size * (SQRT_3 / 2.0 * q + SQRT_3 * r);
        (x, y)
    }

    /// The hex containing pixel `(x, y)`.
    pub fn from_pixel(x: f64, y: f64, size: f64) -> Self {
        let qf = (2.0 / 3.0) * x / size;
        let rf = (-x / 3.0 + SQRT_3 / 3.0 * y) / size;
        axial_round(qf, rf)
    }

    pub fn distance_to(self, other: Self) -> i32 {
        hex_distance(self, other)
    }
}

impl Add for AxialCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self { q: self.q + other.q, r: self.r + other.r }
    }
}

impl Sub for AxialCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self { q: self.q - other.q, r: self.r - other.r }
    }
}

impl std::fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

/// Round fractional axial coordinates to the nearest hex.
///
/// The component with the largest rounding error is rebuilt from the other
/// two so that `q + r + s = 0` still holds.
pub fn axial_round(qf: f64, rf: f64) -> AxialCoord {
    let sf = -qf - rf;

    let mut rq = qf.round();
    let mut rr = rf.round();
    let rs = sf.round();

    let q_diff = (rq - qf).abs();
    let r_diff = (rr - rf).abs();
    let s_diff = (rs - sf).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    }

    AxialCoord::new(rq as i32, rr as i32)
}

/// `(q + (q & 1)) / 2` without the intermediate overflow at `i32::MAX`.
#[inline]
const fn ceil_half(q: i32) -> i32 {
    q.div_euclid(2) + (q & 1)
}

/// Number of hex steps between `a` and `b` on an unbounded plane,
/// saturating at `i32::MAX`.
#[inline]
pub fn hex_distance(a: AxialCoord, b: AxialCoord) -> i32 {
    let d = hex_distance_wide((i64::from(a.q), i64::from(a.r)), (i64::from(b.q), i64::from(b.r)));
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// [`hex_distance`] on `i64` axial pairs.
#[inline]
pub(crate) fn hex_distance_wide((aq, ar): (i64, i64), (bq, br): (i64, i64)) -> i64 {
    ((aq - bq).abs() + (aq + ar - bq - br).abs() + (ar - br).abs()) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn offset_roundtrip_for_any_axial() {
        for q in -25..=25 {
            for r in -25..=25 {
                let c = AxialCoord::new(q, r);
                let (col, row) = c.to_offset();
                assert_eq!(AxialCoord::from_offset(col, row), c, "offset roundtrip for {c}");
            }
        }
    }

    #[test]
    fn offset_conversion_matches_even_q_layout() {
        assert_eq!(AxialCoord::new(0, 0).to_offset(), (0, 0));
        assert_eq!(AxialCoord::new(1, 0).to_offset(), (1, 1));
        assert_eq!(AxialCoord::new(4, -2).to_offset(), (4, 0));
        assert_eq!(AxialCoord::new(-1, 1).to_offset(), (-1, 1));
        assert_eq!(AxialCoord::from_offset(4, 2), AxialCoord::new(4, 0));
        assert_eq!(AxialCoord::from_offset(3, 0), AxialCoord::new(3, -2));
    }

    #[test]
    fn pixel_roundtrip_within_tolerance() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let q = rng.gen_range(-100..=100);
            let r = rng.gen_range(-100..=100);
            let size = rng.gen_range(0.5..40.5);

            let c = AxialCoord::new(q, r);
            let (x, y) = c.to_pixel(size);
            assert_eq!(AxialCoord::from_pixel(x, y, size), c, "pixel roundtrip at size {size}");
        }
    }

    #[test]
    fn pixel_centre_formula() {
        let (x, y) = AxialCoord::new(2, -1).to_pixel(10.0);
        assert_abs_diff_eq!(x, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-9);

        let (x, y) = AxialCoord::new(0, 1).to_pixel(2.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 2.0 * SQRT_3, epsilon = 1e-9);
    }

    #[test]
    fn axial_round_preserves_cube_constraint() {
        let samples = [(0.4, 0.4), (0.6, -0.2), (-1.49, 0.51), (2.5, -1.2), (-0.3, -0.3)];
        for (qf, rf) in samples {
            let c = axial_round(qf, rf);
            assert_eq!(c.q + c.r + c.s(), 0);
            assert!(
                ((c.q as f64 - qf).abs() + (c.r as f64 - rf).abs()) < 2.0,
                "{c} too far from ({qf}, {rf})"
            );
        }
        assert_eq!(axial_round(0.4, 0.4), AxialCoord::new(0, 1));
        assert_eq!(axial_round(1.1, -0.1), AxialCoord::new(1, 0));
    }

    #[test]
    fn distance_axioms() {
        let coords: Vec<AxialCoord> = (-3..=3)
            .flat_map(|q| (-3..=3).map(move |r| AxialCoord::new(q, r)))
            .collect();
        for &a in &coords {
            assert_eq!(hex_distance(a, a), 0);
            for &b in &coords {
                let ab = hex_distance(a, b);
                assert!(ab >= 0);
                assert_eq!(ab, hex_distance(b, a));
                for &c in coords.iter().step_by(5) {
                    assert!(hex_distance(a, c) <= ab + hex_distance(b, c));
                }
            }
        }
    }

    #[test]
    fn neighbours_are_one_step_away() {
        let c = AxialCoord::new(3, -7);
        for dir in 0..6 {
            assert_eq!(hex_distance(c, c.neighbor(dir)), 1);
        }
        assert_eq!(hex_distance(AxialCoord::new(0, 0), AxialCoord::new(2, 1)), 3);
    }

    #[test]
    fn ceil_half_matches_even_q_rule() {
        for q in -9..=9 {
            assert_eq!(ceil_half(q), (q + (q & 1)) / 2, "q = {q}");
        }
        assert_eq!(ceil_half(i32::MAX), i32::MAX / 2 + 1);
        assert_eq!(ceil_half(i32::MIN), i32::MIN / 2);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let far = AxialCoord::new(i32::MAX, 0);
        let near = AxialCoord::new(i32::MIN, i32::MAX);
        assert_eq!(hex_distance(far, AxialCoord::new(i32::MAX - 3, 0)), 3);
        assert_eq!(hex_distance(far, near), i32::MAX);
        assert_eq!(far.to_offset_wide(), (i64::from(i32::MAX), i64::from(i32::MAX) / 2 + 1));
        assert_eq!(far.checked_add(AxialCoord::DIRECTIONS[0]), None);
        assert_eq!(far.checked_add(AxialCoord::DIRECTIONS[3]), Some(AxialCoord::new(i32::MAX - 1, 0)));
        let (col, row) = far.to_offset();
        assert_eq!(AxialCoord::from_offset(col, row), far);
    }
}
