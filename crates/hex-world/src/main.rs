//! hex-world: hex map world generation tool.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::args::{GridArgs, TerrainArgs};
use crate::commands::render::{DemoRenderArgs, RenderArgs};

#[derive(Parser, Debug)]
#[command(name = "hex-world", version, about = "Hex map world generation tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the coordinate system on a sample grid.
    DemoCoords {
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Distance and shortest path between two hexes on a 10x8 grid.
    DemoDistance {
        /// Start as Q,R.
        #[arg(long, default_value = "0,0", value_parser = args::parse_coord, allow_hyphen_values = true)]
        from: hexmap_core::AxialCoord,
        /// Target as Q,R.
        #[arg(long, default_value = "3,2", value_parser = args::parse_coord, allow_hyphen_values = true)]
        to: hexmap_core::AxialCoord,
        #[arg(long, value_enum, default_value_t = args::TopologyArg::Region)]
        topology: args::TopologyArg,
    },
    /// Generate terrain and save it as JSON.
    GenerateTerrain {
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        terrain: TerrainArgs,
        #[arg(short, long, default_value = "terrain.json")]
        output: std::path::PathBuf,
    },
    /// Print the statistics stored in a terrain file.
    TerrainStats { file: std::path::PathBuf },
    /// Recompute statistics for a terrain file and check realism.
    ValidateTerrain {
        file: std::path::PathBuf,
        /// Also require a 95% hypsometric match and land within 1 point of 29%.
        #[arg(long)]
        strict: bool,
    },
    /// Generate terrain in memory and print a summary.
    DemoTerrain {
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        terrain: TerrainArgs,
    },
    /// Render a terrain file to PNG or JPEG.
    Render(RenderArgs),
    /// Render a generated terrain with every colour scheme.
    DemoRender(DemoRenderArgs),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::DemoCoords { grid } => commands::grid::demo_coords(&grid),
        Command::DemoDistance { from, to, topology } => commands::grid::demo_distance(from, to, topology.into()),
        Command::GenerateTerrain { grid, terrain, output } => commands::terrain::generate(&grid, &terrain, &output),
        Command::TerrainStats { file } => commands::terrain::stats(&file),
        Command::ValidateTerrain { file, strict } => commands::terrain::validate(&file, strict),
        Command::DemoTerrain { grid, terrain } => commands::terrain::demo(&grid, &terrain),
        Command::Render(args) => commands::render::render(&args),
        Command::DemoRender(args) => commands::render::demo_render(&args),
    }
}
