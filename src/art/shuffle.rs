/// Shuffle-and-cluster generation.
use super::rng::Mulberry32;
use crate::color::Rgb;
use crate::types::PixelGrid;

const GROUP_SIZE: usize = 3;
const CLUSTER_CHANCE: f64 = 0.3;
const JOIN_CHANCE: f64 = 0.7;

/// Caller has already checked that the palette and dimensions are non-empty.
pub(super) fn generate(
    rng: &mut Mulberry32,
    width: usize,
    height: usize,
    palette: &[Rgb],
) -> PixelGrid {
    let mut pixels: Vec<Rgb> = (0..width * height)
        .map(|_| palette[rng.below(palette.len())])
        .collect();

    for i in (1..pixels.len()).rev() {
        let j = rng.below(i + 1);
        pixels.swap(i, j);
    }

    cluster(rng, &mut pixels);

    PixelGrid::from_cells(width, height, pixels)
}

/// Walks groups of three and sometimes paints a group with its head color.
/// The group ending exactly at the last cell is never visited.
fn cluster(rng: &mut Mulberry32, pixels: &mut [Rgb]) {
    let mut i = 0;
    while i + GROUP_SIZE < pixels.len() {
        if rng.chance(CLUSTER_CHANCE) {
            let color = pixels[i];
            for j in 1..GROUP_SIZE {
                if rng.chance(JOIN_CHANCE) {
                    pixels[i + j] = color;
                }
            }
        }
        i += GROUP_SIZE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;

    #[test]
    fn small_grid_fixture() {
        let grid = generate(&mut Mulberry32::new(7), 4, 3, &PALETTE);
        assert_eq!(grid.index_rows(&PALETTE), vec!["3330", "616b", "8048"]);
    }

    #[test]
    fn single_color_palette_fills_everything() {
        let grid = generate(&mut Mulberry32::new(1), 5, 5, &PALETTE[..1]);
        assert!(grid.cells().iter().all(|c| *c == PALETTE[0]));
    }

    #[test]
    fn single_cell_grid() {
        let grid = generate(&mut Mulberry32::new(3), 1, 1, &PALETTE);
        assert_eq!(grid.cells().len(), 1);
        assert!(PALETTE.contains(&grid.cells()[0]));
    }
}
