/// Terminal rendering of a pixel grid.
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::warn;

use super::helpers::rgb_to_color;
use crate::color::Rgb;
use crate::render::{Surface, render};
use crate::types::PixelGrid;

/// Terminal cells are about twice as tall as wide, so one surface unit is
/// two columns by one row.
const COLUMNS_PER_UNIT: u16 = 2;

pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }
}

impl Surface for TerminalSurface<'_> {
    fn size(&self) -> (u32, u32) {
        (
            u32::from(self.area.width / COLUMNS_PER_UNIT),
            u32::from(self.area.height),
        )
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        let (max_x, max_y) = self.size();
        let bg = rgb_to_color(color);
        for uy in y..y.saturating_add(height).min(max_y) {
            for ux in x..x.saturating_add(width).min(max_x) {
                let col = self.area.x + ux as u16 * COLUMNS_PER_UNIT;
                let row = self.area.y + uy as u16;
                for dx in 0..COLUMNS_PER_UNIT {
                    if let Some(cell) = self.buf.cell_mut((col + dx, row)) {
                        cell.set_symbol(" ").set_bg(bg);
                    }
                }
            }
        }
    }
}

/// Largest whole scale at which `grid` fits into `area`, at least 1.
pub fn fit_scale(grid: &PixelGrid, area: Rect) -> u32 {
    let by_width = u32::from(area.width / COLUMNS_PER_UNIT) / grid.width().max(1) as u32;
    let by_height = u32::from(area.height) / grid.height().max(1) as u32;
    by_width.min(by_height).max(1)
}

/// Renders a grid centered in its area.
pub struct ArtCanvas<'a> {
    pub grid: &'a PixelGrid,
}

impl Widget for ArtCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scale = fit_scale(self.grid, area);
        let cols = (self.grid.width() as u32 * scale * u32::from(COLUMNS_PER_UNIT)).min(u32::from(area.width)) as u16;
        let rows = (self.grid.height() as u32 * scale).min(u32::from(area.height)) as u16;
        let target = Rect {
            x: area.x + (area.width - cols) / 2,
            y: area.y + (area.height - rows) / 2,
            width: cols,
            height: rows,
        };
        let mut surface = TerminalSurface::new(buf, target);
        if let Err(err) = render(self.grid, &mut surface, scale) {
            warn!(%err, "could not draw preview");
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::art::{GenerateOptions, SeedSource, generate};
    use crate::color::PALETTE;
    use crate::types::Strategy;

    fn grid() -> PixelGrid {
        let options = GenerateOptions {
            strategy: Strategy::Shuffle,
            width: 4,
            height: 3,
        };
        generate(&SeedSource::Fixed(7), &options, &PALETTE)
            .unwrap()
            .grid
    }

    #[test]
    fn units_are_two_columns_wide() {
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        let grid = grid();
        render(&grid, &mut TerminalSurface::new(&mut buf, area), 1).unwrap();

        let first = rgb_to_color(grid.get(0, 0).unwrap());
        assert_eq!(buf.cell((0, 0)).unwrap().bg, first);
        assert_eq!(buf.cell((1, 0)).unwrap().bg, first);
        assert_eq!(
            buf.cell((2, 0)).unwrap().bg,
            rgb_to_color(grid.get(1, 0).unwrap())
        );
    }

    #[test]
    fn small_areas_clip_instead_of_panicking() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        ArtCanvas { grid: &grid() }.render(area, &mut buf);
        assert_ne!(buf.cell((0, 0)).unwrap().bg, Color::Reset);
    }

    #[test]
    fn scale_fills_available_space() {
        let grid = grid();
        assert_eq!(fit_scale(&grid, Rect::new(0, 0, 80, 24)), 8);
        assert_eq!(fit_scale(&grid, Rect::new(0, 0, 2, 1)), 1);
    }
}
