//! Subcommand implementations. Reports go to stdout; diagnostics go through
//! `tracing` to stderr.

pub mod grid;
pub mod render;
pub mod terrain;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hexmap_core::TerrainDocument;

pub(crate) fn rule(width: usize) -> String {
    "=".repeat(width)
}

pub(crate) fn load_document(path: &Path) -> Result<TerrainDocument> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    TerrainDocument::from_json(&json).with_context(|| format!("parsing terrain document {}", path.display()))
}

pub(crate) fn save_document(doc: &TerrainDocument, path: &Path) -> Result<()> {
    let json = doc.to_json_pretty().context("serializing terrain document")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

pub(crate) fn check_mark(ok: bool) -> &'static str {
    if ok {
        "✅"
    } else {
        "❌"
    }
}
