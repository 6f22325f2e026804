/// Coordinate-noise generation with an optional smoothing pass.
use super::rng::Mulberry32;
use crate::color::Rgb;
use crate::types::PixelGrid;

const OFFSET_RANGE: f64 = 100.0;
const JITTER: f64 = 0.3;
const SMOOTH_CHANCE: f64 = 0.4;
const SMOOTH_CELL_CHANCE: f64 = 0.3;

/// (x frequency, y frequency, amplitude) for each of the three terms.
const TERMS: [(f64, f64, f64); 3] = [
    (12.9898, 78.233, 43758.5453),
    (93.9898, 47.233, 28653.8142),
    (65.9898, 12.233, 91735.2341),
];

/// Caller has already checked that the palette and dimensions are non-empty.
pub(super) fn generate(
    rng: &mut Mulberry32,
    width: usize,
    height: usize,
    palette: &[Rgb],
) -> PixelGrid {
    let offset_x = rng.next_f64() * OFFSET_RANGE;
    let offset_y = rng.next_f64() * OFFSET_RANGE;

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let base = sample(x as f64 + offset_x, y as f64 + offset_y);
            let value = (base + rng.next_f64() * JITTER).fract();
            let index = ((value * palette.len() as f64).floor() as usize).min(palette.len() - 1);
            pixels.push(palette[index]);
        }
    }

    if rng.chance(SMOOTH_CHANCE) {
        smooth(rng, &mut pixels, width, height);
    }

    PixelGrid::from_cells(width, height, pixels)
}

/// Mean of the three sine hashes, in `[0, 1)`.
fn sample(px: f64, py: f64) -> f64 {
    let sum: f64 = TERMS
        .iter()
        .map(|&(fx, fy, amp)| ((px * fx + py * fy).sin() * amp).abs().fract())
        .sum();
    sum / TERMS.len() as f64
}

/// One in-place pass over interior cells; a cell may copy an orthogonal
/// neighbor chosen as up, down, left or right.
fn smooth(rng: &mut Mulberry32, pixels: &mut [Rgb], width: usize, height: usize) {
    if width < 3 || height < 3 {
        return;
    }
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if !rng.chance(SMOOTH_CELL_CHANCE) {
                continue;
            }
            let (nx, ny) = match rng.below(4) {
                0 => (x, y - 1),
                1 => (x, y + 1),
                2 => (x - 1, y),
                _ => (x + 1, y),
            };
            pixels[y * width + x] = pixels[ny * width + nx];
        }
    }
}
