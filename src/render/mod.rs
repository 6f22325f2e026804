//! Painting a [`PixelGrid`] onto something that can fill rectangles.
mod raster;

use tracing::debug;

pub use raster::RasterSurface;

use crate::color::Rgb;
use crate::error::{InputError, Result};
use crate::types::PixelGrid;

/// A drawable target. Implementations clip anything outside their bounds.
pub trait Surface {
    /// Width and height in surface units.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb);
}

/// Draw each cell as a `cell_size` square, row by row.
pub fn render<S: Surface + ?Sized>(grid: &PixelGrid, surface: &mut S, cell_size: u32) -> Result<()> {
    if cell_size == 0 {
        return Err(InputError::ZeroCellSize.into());
    }
    // Every origin is below the canvas extent, so the products below fit.
    canvas_size(grid, cell_size)?;
    for (row, cells) in grid.rows().enumerate() {
        for (col, color) in cells.iter().enumerate() {
            surface.fill_rect(
                col as u32 * cell_size,
                row as u32 * cell_size,
                cell_size,
                cell_size,
                *color,
            );
        }
    }
    debug!(
        width = grid.width(),
        height = grid.height(),
        cell_size,
        "rendered grid"
    );
    Ok(())
}

/// Pixel size of `grid` once rendered at `cell_size`.
pub fn canvas_size(grid: &PixelGrid, cell_size: u32) -> Result<(u32, u32)> {
    let too_large = || InputError::CanvasTooLarge {
        width: grid.width(),
        height: grid.height(),
        cell_size,
    };
    let extent = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|n| n.checked_mul(cell_size))
    };
    let width = extent(grid.width()).ok_or_else(too_large)?;
    let height = extent(grid.height()).ok_or_else(too_large)?;
    Ok((width, height))
}
