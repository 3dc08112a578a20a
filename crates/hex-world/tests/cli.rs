use std::path::PathBuf;
use std::process::{Command, Output};

fn hex_world(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hex-world"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run hex-world")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hex-world-cli-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn world_distance_wraps_across_the_seam() {
    let out = hex_world(&["demo-distance", "--from", "0,0", "--to", "9,0", "--topology", "world"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Distance: 1 hexes"), "{text}");
    assert!(text.contains("Wrapping used! Direct distance would be 9"), "{text}");
}

#[test]
fn demo_coords_lists_samples() {
    let out = hex_world(&["demo-coords", "--size", "5x3", "--topology", "world"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Total coordinates: 15"), "{text}");
    assert!(text.contains("Wrapping examples:"), "{text}");
}

#[test]
fn generate_then_inspect_and_render() {
    let dir = scratch("pipeline");
    let json = dir.join("terrain.json");
    let json_arg = json.to_str().unwrap();

    let out = hex_world(&["generate-terrain", "--size", "24x16", "--seed", "9", "--output", json_arg]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(doc["config"]["seed"], 9);
    assert_eq!(doc["stats"]["total_tiles"], 384);
    assert_eq!(doc["tiles"].as_array().unwrap().len(), 384);

    let out = hex_world(&["terrain-stats", json_arg]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Total Tiles: 384"));

    let png = dir.join("terrain.png");
    let out = hex_world(&[
        "render",
        "--input",
        json_arg,
        "--output",
        png.to_str().unwrap(),
        "--width",
        "200",
        "--height",
        "150",
        "--layers",
        "elevation,water",
        "--metadata",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(png.exists());
    let meta: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("terrain.png.json")).unwrap()).unwrap();
    assert_eq!(meta["world_seed"], 9);
    assert_eq!(meta["view_config"]["width"], 200);

    let other = dir.join("terrain.bmp");
    let out = hex_world(&[
        "render",
        "--input",
        json_arg,
        "--output",
        other.to_str().unwrap(),
        "--width",
        "80",
        "--height",
        "60",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(std::fs::read(&other).unwrap().starts_with(b"\x89PNG"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_input_fails() {
    let out = hex_world(&["terrain-stats", "/nonexistent/terrain.json"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("reading /nonexistent/terrain.json"));
}

#[test]
fn bad_size_is_rejected_by_the_parser() {
    let out = hex_world(&["demo-terrain", "--size", "0x4"]);
    assert!(!out.status.success());
}
