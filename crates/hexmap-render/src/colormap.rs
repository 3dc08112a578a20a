//! Elevation → colour mapping.
//!
//! A colour map is an ascending list of breakpoints; elevations between two
//! breakpoints are interpolated channel by channel, elevations outside the
//! list clamp to the nearest end.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBreakpoint {
    pub elevation: f64,
    pub color: Rgba<u8>,
}

const fn bp(elevation: f64, r: u8, g: u8, b: u8) -> ColorBreakpoint {
    ColorBreakpoint { elevation, color: Rgba([r, g, b, 255]) }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElevationColorMap {
    pub sea_level: f64,
    pub breakpoints: Vec<ColorBreakpoint>,
}

impl ElevationColorMap {
    /// Topographic colours: blues, tan coast, greens, browns, grey, white peaks.
    pub fn terrain() -> Self {
        Self {
            sea_level: 0.0,
            breakpoints: vec![
                bp(-11000.0, 0, 0, 128),
                bp(-2000.0, 0, 64, 192),
                bp(-200.0, 0, 128, 255),
                bp(0.0, 244, 164, 96),
                bp(100.0, 144, 238, 144),
                bp(500.0, 34, 139, 34),
                bp(1000.0, 154, 205, 50),
                bp(2000.0, 139, 69, 19),
                bp(3000.0, 160, 82, 45),
                bp(5000.0, 169, 169, 169),
                bp(8000.0, 255, 255, 255),
            ],
        }
    }

    pub fn realistic_earth() -> Self {
        Self {
            sea_level: 0.0,
            breakpoints: vec![
                bp(-11000.0, 0, 0, 128),
                bp(-3000.0, 0, 50, 150),
                bp(-1000.0, 0, 102, 204),
                bp(-100.0, 102, 178, 255),
                bp(0.0, 244, 196, 161),
                bp(50.0, 200, 230, 200),
                bp(200.0, 34, 139, 34),
                bp(800.0, 0, 100, 0),
                bp(1500.0, 160, 82, 45),
                bp(3000.0, 105, 105, 105),
                bp(6000.0, 248, 248, 255),
            ],
        }
    }

    /// High-contrast bands for eyeballing thresholds.
    pub fn debug() -> Self {
        Self {
            sea_level: 0.0,
            breakpoints: vec![
                bp(-5000.0, 0, 0, 255),
                bp(0.0, 255, 255, 0),
                bp(1000.0, 0, 255, 0),
                bp(3000.0, 255, 0, 0),
                bp(8000.0, 255, 0, 255),
            ],
        }
    }

    pub fn color_at(&self, elevation: f64) -> Rgba<u8> {
        elevation_to_color(elevation, self)
    }
}

/// Per-channel linear blend; `ratio` is clamped to `[0, 1]` and channels truncate.
/// A channel equal at both ends is returned unchanged.
pub fn interpolate_color(c1: Rgba<u8>, c2: Rgba<u8>, ratio: f64) -> Rgba<u8> {
    let t = ratio.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
    Rgba([mix(c1[0], c2[0]), mix(c1[1], c2[1]), mix(c1[2], c2[2]), mix(c1[3], c2[3])])
}

/// Colour for `elevation` under `map`. Opaque black for an empty map.
pub fn elevation_to_color(elevation: f64, map: &ElevationColorMap) -> Rgba<u8> {
    let (Some(first), Some(last)) = (map.breakpoints.first(), map.breakpoints.last()) else {
        return Rgba([0, 0, 0, 255]);
    };
    if elevation <= first.elevation {
        return first.color;
    }
    if elevation >= last.elevation {
        return last.color;
    }
    for pair in map.breakpoints.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if elevation >= lo.elevation && elevation <= hi.elevation {
            let span = hi.elevation - lo.elevation;
            if span.abs() < 1e-6 {
                return lo.color;
            }
            return interpolate_color(lo.color, hi.color, (elevation - lo.elevation) / span);
        }
    }
    last.color
}

/// Opaque grey with `(e + 5000) / 15000` clamped to `[0, 1]` as intensity.
pub fn grayscale(elevation: f64) -> Rgba<u8> {
    let v = ((elevation + 5000.0) / 15000.0).clamp(0.0, 1.0);
    let g = (v * 255.0) as u8;
    Rgba([g, g, g, 255])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Elevation,
    Realistic,
    Debug,
    Grayscale,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] =
        [ColorScheme::Elevation, ColorScheme::Realistic, ColorScheme::Debug, ColorScheme::Grayscale];

    /// The breakpoint map behind this scheme; None for grayscale.
    pub fn color_map(self) -> Option<ElevationColorMap> {
        match self {
            ColorScheme::Elevation => Some(ElevationColorMap::terrain()),
            ColorScheme::Realistic => Some(ElevationColorMap::realistic_earth()),
            ColorScheme::Debug => Some(ElevationColorMap::debug()),
            ColorScheme::Grayscale => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Elevation => "elevation",
            ColorScheme::Realistic => "realistic",
            ColorScheme::Debug => "debug",
            ColorScheme::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown color scheme '{s}' (expected elevation, realistic, debug or grayscale)"))
    }
}

/// Maps elevations to colours for one scheme, building the breakpoint list once.
#[derive(Debug, Clone)]
pub struct SchemePalette {
    map: Option<ElevationColorMap>,
}

impl SchemePalette {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { map: scheme.color_map() }
    }

    pub fn color(&self, elevation: f64) -> Rgba<u8> {
        match &self.map {
            Some(map) => map.color_at(elevation),
            None => grayscale(elevation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_clamp_to_first_and_last_breakpoint() {
        let map = ElevationColorMap::terrain();
        assert_eq!(map.color_at(-20_000.0), Rgba([0, 0, 128, 255]));
        assert_eq!(map.color_at(-11_000.0), Rgba([0, 0, 128, 255]));
        assert_eq!(map.color_at(8000.0), Rgba([255, 255, 255, 255]));
        assert_eq!(map.color_at(12_000.0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn breakpoints_are_hit_exactly() {
        let map = ElevationColorMap::terrain();
        assert_eq!(map.color_at(0.0), Rgba([244, 164, 96, 255]));
        assert_eq!(map.color_at(500.0), Rgba([34, 139, 34, 255]));
        let real = ElevationColorMap::realistic_earth();
        assert_eq!(real.color_at(-100.0), Rgba([102, 178, 255, 255]));
    }

    #[test]
    fn midpoint_interpolates_and_truncates() {
        let map = ElevationColorMap::debug();
        // Halfway between yellow (0 m) and green (1000 m).
        assert_eq!(map.color_at(500.0), Rgba([127, 255, 0, 255]));
    }

    #[test]
    fn interpolation_clamps_ratio() {
        let a = Rgba([0, 0, 0, 0]);
        let b = Rgba([200, 100, 50, 255]);
        assert_eq!(interpolate_color(a, b, -1.0), a);
        assert_eq!(interpolate_color(a, b, 2.0), b);
        assert_eq!(interpolate_color(a, b, 0.5), Rgba([100, 50, 25, 127]));
    }

    #[test]
    fn breakpoint_maps_stay_opaque() {
        for map in [ElevationColorMap::terrain(), ElevationColorMap::realistic_earth(), ElevationColorMap::debug()] {
            let mut e = -12_000.0;
            while e <= 9000.0 {
                assert_eq!(map.color_at(e)[3], 255, "alpha at {e}");
                e += 7.0;
            }
        }
        // Just above the deepest breakpoint.
        assert_eq!(ElevationColorMap::terrain().color_at(-10_951.0), Rgba([0, 0, 128, 255]));
    }

    #[test]
    fn equal_channels_are_preserved_at_any_ratio() {
        let a = Rgba([37, 200, 255, 255]);
        let b = Rgba([37, 10, 255, 255]);
        for i in 0..=100 {
            let c = interpolate_color(a, b, i as f64 / 100.0);
            assert_eq!((c[0], c[2], c[3]), (37, 255, 255), "ratio {i}%");
        }
    }

    #[test]
    fn empty_map_is_black() {
        let map = ElevationColorMap { sea_level: 0.0, breakpoints: Vec::new() };
        assert_eq!(elevation_to_color(100.0, &map), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn grayscale_ramp() {
        assert_eq!(grayscale(-9000.0), Rgba([0, 0, 0, 255]));
        assert_eq!(grayscale(-5000.0), Rgba([0, 0, 0, 255]));
        assert_eq!(grayscale(2500.0), Rgba([127, 127, 127, 255]));
        assert_eq!(grayscale(10_000.0), Rgba([255, 255, 255, 255]));
        assert_eq!(SchemePalette::new(ColorScheme::Grayscale).color(10_000.0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn scheme_names_round_trip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.as_str().parse::<ColorScheme>(), Ok(scheme));
        }
        assert_eq!("GrayScale".parse::<ColorScheme>(), Ok(ColorScheme::Grayscale));
        assert!("sepia".parse::<ColorScheme>().is_err());
        assert_eq!(serde_json::to_string(&ColorScheme::Realistic).unwrap(), "\"realistic\"");
    }
}
