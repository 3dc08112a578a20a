//! PNG / JPEG export and the JSON metadata sidecar.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use hexmap_core::{compute_realism_score, TerrainStats};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RenderError;
use crate::renderer::RenderConfig;

pub const GENERATOR: &str = concat!("hexmap ", env!("CARGO_PKG_VERSION"));

// ── Image encoding ──────────────────────────────────────────────────────────

pub fn export_png(img: &RgbaImage, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    img.save_with_format(path, ImageFormat::Png)?;
    debug!(path = %path.display(), "wrote png");
    Ok(())
}

/// JPEG has no alpha channel; the image is flattened to RGB first.
pub fn export_jpeg(img: &RgbaImage, path: impl AsRef<Path>, quality: u8) -> Result<(), RenderError> {
    check_quality(quality)?;
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_jpeg(img, &mut out, quality)?;
    out.flush()?;
    debug!(path = %path.display(), quality, "wrote jpeg");
    Ok(())
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

pub fn encode_jpeg(img: &RgbaImage, quality: u8) -> Result<Vec<u8>, RenderError> {
    check_quality(quality)?;
    let mut buf = Vec::new();
    write_jpeg(img, &mut buf, quality)?;
    Ok(buf)
}

fn write_jpeg<W: Write>(img: &RgbaImage, out: W, quality: u8) -> Result<(), RenderError> {
    let rgb: RgbImage = DynamicImage::ImageRgba8(img.clone()).into_rgb8();
    let mut encoder = JpegEncoder::new_with_quality(out, quality);
    encoder.encode_image(&rgb)?;
    Ok(())
}

fn check_quality(quality: u8) -> Result<(), RenderError> {
    if (1..=100).contains(&quality) {
        Ok(())
    } else {
        Err(RenderError::InvalidQuality(quality))
    }
}

// ── Metadata ────────────────────────────────────────────────────────────────

/// Provenance written next to an exported image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderMetadata {
    pub generator: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
    pub world_seed: i64,
    #[serde(rename = "generation_stage")]
    pub stage: String,
    pub view_config: RenderConfig,
    pub terrain_stats: TerrainStats,
    /// Realism score scaled to `[0, 1]`.
    pub quality_score: f64,
    pub known_issues: Vec<String>,
}

impl RenderMetadata {
    /// Stamp the current time and derive the quality score and known issues
    /// from `stats`.
    pub fn new(world_seed: i64, stage: impl Into<String>, view_config: RenderConfig, stats: TerrainStats) -> Self {
        let score = compute_realism_score(&stats);
        Self {
            generator: GENERATOR.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            world_seed,
            stage: stage.into(),
            view_config,
            quality_score: score.total / 100.0,
            known_issues: score.issues().iter().map(ToString::to_string).collect(),
            terrain_stats: stats,
        }
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// `terrain.png` → `terrain.png.json`.
pub fn sidecar_path(image_path: &Path) -> PathBuf {
    let mut name = image_path.as_os_str().to_owned();
    name.push(".json");
    PathBuf::from(name)
}

/// Format implied by the file extension; anything but `.jpg`/`.jpeg` is PNG.
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}

/// Write `img` as JPEG for `.jpg`/`.jpeg` paths and as PNG otherwise.
pub fn export_image(img: &RgbaImage, path: impl AsRef<Path>, quality: u8) -> Result<(), RenderError> {
    let path = path.as_ref();
    if is_jpeg_path(path) {
        export_jpeg(img, path, quality)
    } else {
        export_png(img, path)
    }
}

/// Write the image via [`export_image`] plus a metadata sidecar. Returns the
/// sidecar path.
pub fn export_with_metadata(
    img: &RgbaImage,
    path: impl AsRef<Path>,
    metadata: &RenderMetadata,
) -> Result<PathBuf, RenderError> {
    let path = path.as_ref();
    export_image(img, path, metadata.view_config.quality)?;
    let sidecar = sidecar_path(path);
    std::fs::write(&sidecar, metadata.to_json()?)?;
    info!(image = %path.display(), metadata = %sidecar.display(), "exported render");
    Ok(sidecar)
}

/// Read the sidecar written by [`export_with_metadata`].
pub fn read_metadata(image_path: impl AsRef<Path>) -> Result<RenderMetadata, RenderError> {
    let json = std::fs::read_to_string(sidecar_path(image_path.as_ref()))?;
    RenderMetadata::from_json(&json)
}
