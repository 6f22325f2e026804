/// Color values and the built-in header palette.
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 weights).
    pub fn brightness(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| InputError::InvalidColor {
            value: s.to_string(),
        })
    }
}

/// Shared by both generation strategies. Changing it changes every header.
pub const PALETTE: [Rgb; 12] = [
    Rgb::new(0xff, 0x00, 0x7f),
    Rgb::new(0x00, 0xff, 0xff),
    Rgb::new(0x00, 0x1e, 0xff),
    Rgb::new(0xff, 0x00, 0xff),
    Rgb::new(0xff, 0xeb, 0x00),
    Rgb::new(0x00, 0xff, 0x00),
    Rgb::new(0xf7, 0x25, 0x85),
    Rgb::new(0x72, 0x09, 0xb7),
    Rgb::new(0x43, 0x61, 0xee),
    Rgb::new(0x4c, 0xc9, 0xf0),
    Rgb::new(0x22, 0x22, 0x3b),
    Rgb::new(0xfc, 0xa3, 0x11),
];

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse a comma separated list like `#ff0000,#00ff00`.
pub fn parse_palette(list: &str) -> Result<Vec<Rgb>, InputError> {
    let mut colors = Vec::new();
    for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !is_valid_hex(item) {
            return Err(InputError::InvalidColor {
                value: item.to_string(),
            });
        }
        colors.push(item.parse()?);
    }
    if colors.is_empty() {
        return Err(InputError::EmptyPalette);
    }
    Ok(colors)
}
