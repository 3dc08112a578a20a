//! Rasterization of generated hex terrain.
//!
//! [`HexRenderer`] draws a tile slice into an RGBA canvas layer by layer;
//! the [`export`] functions write it out as PNG or JPEG, optionally with a
//! JSON metadata sidecar.

pub mod colormap;
pub mod error;
pub mod export;
pub mod renderer;

pub use colormap::{
    elevation_to_color, grayscale, interpolate_color, ColorBreakpoint, ColorScheme, ElevationColorMap, SchemePalette,
};
pub use error::RenderError;
pub use export::{
    encode_jpeg, encode_png, export_image, export_jpeg, export_png, export_with_metadata, is_jpeg_path, read_metadata,
    sidecar_path,
    RenderMetadata,
};
pub use renderer::{point_in_hex, water_color, HexRenderer, RenderConfig, RenderLayer, BACKGROUND};
