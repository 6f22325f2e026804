use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::color::Rgb;
use crate::error::InputError;

/// A fully populated grid of colors, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Rgb>,
}

impl PixelGrid {
    /// Reshape a flat row-major sequence. `cells.len()` must equal `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Rgb>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }

    /// Each row as palette indices in hex digits, e.g. `"0b3a"`.
    /// Colors missing from `palette` show up as `?`.
    pub fn index_rows(&self, palette: &[Rgb]) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|color| {
                        palette
                            .iter()
                            .position(|c| c == color)
                            .and_then(|i| char::from_digit(i as u32, 36))
                            .unwrap_or('?')
                    })
                    .collect()
            })
            .collect()
    }
}

/// Which generation algorithm builds the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Random fill, Fisher-Yates shuffle, then short color clusters.
    #[default]
    Shuffle,
    /// Sine-hash noise over offset coordinates with optional smoothing.
    Noise,
}

/// Grid and cell dimensions a strategy renders at unless told otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
}

impl Strategy {
    pub fn defaults(self) -> Dimensions {
        match self {
            Strategy::Shuffle => Dimensions {
                width: 16,
                height: 16,
                cell_size: 10,
            },
            Strategy::Noise => Dimensions {
                width: 32,
                height: 32,
                cell_size: 2,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Shuffle => "shuffle",
            Strategy::Noise => "noise",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Strategy::Shuffle => Strategy::Noise,
            Strategy::Noise => Strategy::Shuffle,
        }
    }
}

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(InputError::InvalidTheme {
                value: other.to_string(),
            }),
        }
    }
}
