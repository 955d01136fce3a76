//! Plain-shapes raster renderer for generated dungeon grids.

mod canvas;
mod glyphs;
mod grid_render;
pub mod style;

use std::path::Path;

use dungeon_core::{Grid, GridError};
use image::{ImageFormat, RgbImage};
use thiserror::Error;
use tracing::info;

pub use style::{MIN_CELL_SIZE, RenderStyle};

/// Largest image, in pixels, the renderer will allocate.
pub const MAX_PIXELS: u64 = 1 << 26;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render style: {0}")]
    InvalidStyle(String),
    #[error("a {width}x{height} grid at {cell_size}px per cell exceeds {MAX_PIXELS} pixels")]
    ImageTooLarge { width: usize, height: usize, cell_size: u32 },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

pub fn render(grid: &Grid, style: &RenderStyle) -> Result<RgbImage, RenderError> {
    style.validate()?;
    grid_render::draw_grid(grid, style)
}

pub fn save_png(grid: &Grid, style: &RenderStyle, path: &Path) -> Result<(), RenderError> {
    let image = render(grid, style)?;
    image.save_with_format(path, ImageFormat::Png)?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "grid image written"
    );
    Ok(())
}
