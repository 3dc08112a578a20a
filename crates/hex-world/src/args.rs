//! Shared command-line arguments and their parsers.

use std::fmt;
use std::str::FromStr;

use clap::{Args, ValueEnum};
use hexmap_core::{AxialCoord, Grid, GridConfig, TerrainConfig, Topology, LAND_RATIO_EARTH, SEA_LEVEL_DEFAULT};

/// `WIDTHxHEIGHT`, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| "size must be in format WIDTHxHEIGHT (e.g. 100x100)".to_string())?;
        let parse = |v: &str| v.trim().parse::<usize>().map_err(|_| format!("invalid size '{s}'"));
        let (width, height) = (parse(w)?, parse(h)?);
        if width == 0 || height == 0 {
            return Err("size dimensions must be positive".into());
        }
        Ok(Self { width, height })
    }
}

/// `Q,R` axial coordinate.
pub fn parse_coord(s: &str) -> Result<AxialCoord, String> {
    let (q, r) = s.split_once(',').ok_or_else(|| "coordinate must be in format Q,R".to_string())?;
    let parse = |v: &str| v.trim().parse::<i32>().map_err(|_| format!("invalid coordinate '{s}'"));
    Ok(AxialCoord::new(parse(q)?, parse(r)?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopologyArg {
    /// Bounded map.
    Region,
    /// Toroidal map wrapping on both axes.
    World,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Region => Topology::Region,
            TopologyArg::World => Topology::World,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Grid dimensions as WIDTHxHEIGHT.
    #[arg(long)]
    pub size: Option<GridSize>,
    #[arg(long, value_enum, default_value_t = TopologyArg::Region)]
    pub topology: TopologyArg,
}

impl GridArgs {
    pub fn grid_config(&self, default_size: GridSize) -> GridConfig {
        let size = self.size.unwrap_or(default_size);
        GridConfig::new(size.width, size.height, self.topology.into())
    }

    pub fn grid(&self, default_size: GridSize) -> Grid {
        Grid::new(self.grid_config(default_size))
    }
}

#[derive(Args, Debug, Clone)]
pub struct TerrainArgs {
    #[arg(long, default_value_t = 42, allow_hyphen_values = true)]
    pub seed: i64,
    /// Target land fraction (0.0-1.0).
    #[arg(long, default_value_t = LAND_RATIO_EARTH)]
    pub land_ratio: f64,
    /// Sea level in metres.
    #[arg(long, default_value_t = SEA_LEVEL_DEFAULT, allow_hyphen_values = true)]
    pub sea_level: f64,
}

impl TerrainArgs {
    pub fn config(&self) -> TerrainConfig {
        TerrainConfig {
            seed: self.seed,
            sea_level: self.sea_level,
            land_ratio: self.land_ratio,
            ..TerrainConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_parse() {
        assert_eq!("100x80".parse::<GridSize>(), Ok(GridSize::new(100, 80)));
        assert_eq!("7X3".parse::<GridSize>(), Ok(GridSize::new(7, 3)));
        assert!("0x5".parse::<GridSize>().is_err());
        assert!("10".parse::<GridSize>().is_err());
        assert!("ax5".parse::<GridSize>().is_err());
        assert_eq!(GridSize::new(10, 8).to_string(), "10x8");
    }

    #[test]
    fn coords_parse() {
        assert_eq!(parse_coord("3,-2"), Ok(AxialCoord::new(3, -2)));
        assert_eq!(parse_coord(" 0 , 7 "), Ok(AxialCoord::new(0, 7)));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("a,b").is_err());
    }

    #[test]
    fn terrain_args_fill_config() {
        let args = TerrainArgs { seed: -5, land_ratio: 0.4, sea_level: 10.0 };
        let config = args.config();
        assert_eq!(config.seed, -5);
        assert_eq!(config.land_ratio, 0.4);
        assert_eq!(config.sea_level, 10.0);
        assert_eq!(config.noise_params, TerrainConfig::default().noise_params);
    }

    #[test]
    fn grid_args_fall_back_to_default_size() {
        let args = GridArgs { size: None, topology: TopologyArg::World };
        let config = args.grid_config(GridSize::new(10, 8));
        assert_eq!((config.width, config.height, config.topology), (10, 8, Topology::World));
    }
}
