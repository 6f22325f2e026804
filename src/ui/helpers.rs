use ratatui::style::Color;

use crate::color::Rgb;

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Rgb) -> Color {
    if background.brightness() > 128.0 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;

    #[test]
    fn clamps_long_titles() {
        assert_eq!(clamp_name("abc", 5), "abc  ");
        assert_eq!(clamp_name("abcdefgh", 5), "abc..");
    }

    #[test]
    fn contrast_text_follows_brightness() {
        assert_eq!(contrast_text(PALETTE[4]), Color::Black);
        assert_eq!(contrast_text(PALETTE[10]), Color::White);
        assert_eq!(contrast_text(PALETTE[7]), Color::White);
    }
}
