//! Pixel levels for memory-in-pixel LCDs
//!
//! The panel stores one bit per pixel: a set bit is white, a cleared bit is
//! black. Two gray levels are approximated with fixed dither patterns that
//! depend only on the absolute pixel position, so neighbouring shapes drawn
//! with the same gray line up.
//!
//! | Level | Pixel is white when |
//! |-------|---------------------|
//! | Black | never |
//! | White | always |
//! | LightGray | not (`x % 3 == 0` and `y % 3 == 0`) |
//! | DarkGray | `x` is odd |
//!
//! ## Example
//!
//! ```
//! use sharp_memory_lcd::Color;
//!
//! assert_eq!(Color::White.fill_byte(), Some(0xFF));
//! assert_eq!(Color::Black.fill_byte(), Some(0x00));
//! assert_eq!(Color::DarkGray.fill_byte(), None);
//!
//! assert!(!Color::LightGray.is_white_at(3, 6));
//! assert!(Color::LightGray.is_white_at(3, 5));
//! ```

/// Pixel levels supported by the driver
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Black pixels (bit cleared)
    Black,
    /// White pixels (bit set)
    #[default]
    White,
    /// Sparse 1-in-9 black dot pattern
    LightGray,
    /// Alternating vertical stripes, black on even columns
    DarkGray,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Black,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::White,
        }
    }
}

impl Color {
    /// Byte written by a bulk fill, if the level is a solid one
    ///
    /// Dithered levels return `None` and have to be written pixel by pixel.
    pub fn fill_byte(self) -> Option<u8> {
        match self {
            Self::Black => Some(0x00),
            Self::White => Some(0xFF),
            Self::LightGray | Self::DarkGray => None,
        }
    }

    /// Whether the pixel at `(x, y)` is white for this level
    pub fn is_white_at(self, x: u32, y: u32) -> bool {
        match self {
            Self::Black => false,
            Self::White => true,
            Self::LightGray => !(x % 3 == 0 && y % 3 == 0),
            Self::DarkGray => x % 2 == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_levels_ignore_position() {
        for (x, y) in [(0, 0), (1, 2), (7, 9), (399, 239)] {
            assert!(Color::White.is_white_at(x, y));
            assert!(!Color::Black.is_white_at(x, y));
        }
    }

    #[test]
    fn test_light_gray_one_in_nine() {
        let black = (0..9)
            .flat_map(|y| (0..9).map(move |x| (x, y)))
            .filter(|&(x, y)| !Color::LightGray.is_white_at(x, y))
            .count();
        assert_eq!(black, 9);
        assert!(!Color::LightGray.is_white_at(0, 0));
        assert!(!Color::LightGray.is_white_at(6, 3));
        assert!(Color::LightGray.is_white_at(1, 0));
    }

    #[test]
    fn test_dark_gray_odd_columns_white() {
        assert!(!Color::DarkGray.is_white_at(0, 5));
        assert!(Color::DarkGray.is_white_at(1, 5));
        assert!(!Color::DarkGray.is_white_at(2, 0));
        assert!(Color::DarkGray.is_white_at(3, 100));
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::White);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_from_binary_color() {
        use embedded_graphics_core::pixelcolor::BinaryColor;

        assert_eq!(Color::from(BinaryColor::On), Color::Black);
        assert_eq!(Color::from(BinaryColor::Off), Color::White);
    }
}
