use anyhow::Result;
use hexmap_core::{hex_distance, AxialCoord, Grid, GridConfig, Topology};

use super::rule;
use crate::args::{GridArgs, GridSize};

const DEMO_SIZE: GridSize = GridSize::new(10, 8);

pub fn demo_coords(args: &GridArgs) -> Result<()> {
    let config = args.grid_config(DEMO_SIZE);
    config.validate()?;
    let grid = Grid::new(config);
    let coords = grid.all_coords();

    println!("Hex Grid Demo - {}x{} {:?} topology", config.width, config.height, config.topology);
    println!("{}", rule(50));
    println!("Total coordinates: {}", coords.len());

    println!("\nSample coordinates:");
    println!("Axial      | Offset  | Neighbors | Edge");
    println!("-----------|---------|-----------|-----");
    let samples = [coords[0], coords[coords.len() / 2], coords[coords.len() - 1]];
    for c in samples {
        let (col, row) = c.to_offset();
        println!(
            "({:2},{:2})    | ({col},{row})   | {}         | {}",
            c.q,
            c.r,
            grid.neighbors(c).len(),
            grid.is_edge(c)
        );
    }

    if config.topology == Topology::World {
        println!("\nWrapping examples:");
        let (w, h) = (config.width as i32, config.height as i32);
        for c in [AxialCoord::new(-1, 0), AxialCoord::new(w, 0), AxialCoord::new(0, h)] {
            let wrapped = grid.wrap(c);
            let (col, row) = c.to_offset();
            let (wcol, wrow) = wrapped.to_offset();
            println!("{c} offset({col},{row}) → {wrapped} offset({wcol},{wrow})");
        }
    }
    Ok(())
}

pub fn demo_distance(from: AxialCoord, to: AxialCoord, topology: Topology) -> Result<()> {
    let grid = Grid::new(GridConfig::new(DEMO_SIZE.width, DEMO_SIZE.height, topology));

    println!("Distance Demo - {topology:?} topology");
    println!("{}", rule(30));
    println!("From: {from}");
    println!("To:   {to}");

    let distance = grid.distance(from, to);
    println!("Distance: {distance} hexes");

    let path = grid.shortest_path(from, to);
    if path.is_empty() {
        println!("No path: an endpoint lies outside the {DEMO_SIZE} grid");
        return Ok(());
    }
    println!("Path length: {} steps", path.len() - 1);
    println!("Path:");
    let last = path.len() - 1;
    for (i, c) in path.iter().enumerate() {
        match i {
            0 => println!("  Start: {c}"),
            i if i == last => println!("  End:   {c}"),
            i => println!("  Step {i}: {c}"),
        }
    }

    if topology == Topology::World {
        let direct = hex_distance(from, to);
        if distance < direct {
            println!("\nWrapping used! Direct distance would be {direct}");
        }
    }
    Ok(())
}
