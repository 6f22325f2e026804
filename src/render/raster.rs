/// PNG-backed raster surface.
use std::path::Path;

use image::{ImageFormat, Rgb as Pixel, RgbImage};
use tracing::info;

use super::Surface;
use crate::color::Rgb;
use crate::error::{ArtError, EnvironmentError, Result};

pub struct RasterSurface {
    image: RgbImage,
}

impl RasterSurface {
    /// Allocate a black canvas. Zero-sized canvases are refused.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ArtError::surface_unavailable(format!(
                "cannot allocate a {width}x{height} canvas"
            )));
        }
        Ok(Self {
            image: RgbImage::new(width, height),
        })
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(EnvironmentError::from)?;
        }
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| EnvironmentError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), "wrote header image");
        Ok(())
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        let (max_x, max_y) = self.image.dimensions();
        let pixel = Pixel([color.r, color.g, color.b]);
        for py in y..y.saturating_add(height).min(max_y) {
            for px in x..x.saturating_add(width).min(max_x) {
                self.image.put_pixel(px, py, pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::{GenerateOptions, SeedSource, generate};
    use crate::color::PALETTE;
    use crate::render::{canvas_size, render};
    use crate::types::Strategy;

    #[test]
    fn fills_cells_with_grid_colors() {
        let options = GenerateOptions::for_strategy(Strategy::Shuffle);
        let art = generate(
            &SeedSource::Title("Cyberpunk Gradient Post".into()),
            &options,
            &PALETTE,
        )
        .unwrap();
        let (w, h) = canvas_size(&art.grid, 10).unwrap();
        let mut surface = RasterSurface::new(w, h).unwrap();
        render(&art.grid, &mut surface, 10).unwrap();

        assert_eq!(surface.size(), (160, 160));
        // Top-left cell is palette index 3, bottom-right index 8.
        assert_eq!(surface.pixel(0, 0), Some(PALETTE[3]));
        assert_eq!(surface.pixel(9, 9), Some(PALETTE[3]));
        assert_eq!(surface.pixel(159, 159), Some(PALETTE[8]));
        assert_eq!(surface.pixel(160, 0), None);
    }

    #[test]
    fn clips_out_of_bounds_rects() {
        let mut surface = RasterSurface::new(4, 4).unwrap();
        surface.fill_rect(2, 2, 10, 10, PALETTE[0]);
        assert_eq!(surface.pixel(3, 3), Some(PALETTE[0]));
        assert_eq!(surface.pixel(1, 1), Some(Rgb::new(0, 0, 0)));
        surface.fill_rect(u32::MAX - 1, 0, 5, 5, PALETTE[1]);
    }

    #[test]
    fn zero_sized_canvas_is_unavailable() {
        let err = RasterSurface::new(0, 10).err().unwrap();
        assert!(!err.is_input());
    }

    #[test]
    fn saves_png_with_rendered_dimensions() {
        let dir = std::env::temp_dir().join(format!("pixelhead-test-{}", std::process::id()));
        let path = dir.join("nested").join("header.png");
        let mut surface = RasterSurface::new(32, 16).unwrap();
        surface.fill_rect(0, 0, 8, 8, PALETTE[4]);
        surface.save(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (32, 16));
        assert_eq!(decoded.get_pixel(0, 0).0, [0xff, 0xeb, 0x00]);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
