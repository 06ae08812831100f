//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget)
//! trait from the embedded-graphics ecosystem for [`Framebuffer`] and
//! [`Display`], so text, images and styled primitives can be rendered
//! alongside the built-in integer primitives.
//!
//! Pixels are clipped the same way as [`Framebuffer::set_pixel`]. Gray
//! levels keep their positional dither pattern.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use sharp_memory_lcd::{Color, Dimensions, Framebuffer, Rotation};
//!
//! let dims = match Dimensions::new(240, 400) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = match Framebuffer::new(dims, Rotation::Rotate0) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! fb.fill(Color::White);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Color::DarkGray))
//!     .draw(&mut fb);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::Black, 2))
//!     .draw(&mut fb);
//!
//! let _ = Text::new(
//!     "Hello, memory LCD!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Color::Black),
//! )
//! .draw(&mut fb);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::display::Display;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

impl<B> DrawTarget for Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<B> OriginDimensions for Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer_mut().fill(color);
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::{Builder, Dimensions, Rotation};
    use crate::display::Display;
    use crate::framebuffer::Framebuffer;
    use alloc::vec::Vec;
    use embedded_graphics::{
        pixelcolor::BinaryColor,
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn set_chip_select(&mut self, _active: bool) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_framebuffer(rotation: Rotation) -> Framebuffer<Vec<u8>> {
        Framebuffer::new(Dimensions::new(16, 32).unwrap(), rotation).unwrap()
    }

    #[test]
    fn test_size_follows_rotation() {
        assert_eq!(test_framebuffer(Rotation::Rotate0).size(), Size::new(32, 16));
        assert_eq!(test_framebuffer(Rotation::Rotate90).size(), Size::new(16, 32));
    }

    #[test]
    fn test_styled_rectangle_matches_fill_rect() {
        let mut via_graphics = test_framebuffer(Rotation::Rotate0);
        Rectangle::new(Point::new(2, 3), Size::new(5, 4))
            .into_styled(PrimitiveStyle::with_fill(Color::White))
            .draw(&mut via_graphics)
            .unwrap();

        // embedded-graphics sizes are exclusive, fill_rect spans [x, x + w]
        let mut via_raster = test_framebuffer(Rotation::Rotate0);
        via_raster.fill_rect(2, 3, 4, 4, Color::White);

        assert_eq!(via_graphics.as_bytes(), via_raster.as_bytes());
    }

    #[test]
    fn test_draw_clips_negative_coordinates() {
        let mut fb = test_framebuffer(Rotation::Rotate0);
        Line::new(Point::new(-5, 0), Point::new(3, 0))
            .into_styled(PrimitiveStyle::with_stroke(Color::White, 1))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.as_bytes()[0], 0x0F);
    }

    #[test]
    fn test_clear_uses_fill() {
        let mut fb = test_framebuffer(Rotation::Rotate0);
        DrawTarget::clear(&mut fb, Color::DarkGray).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_binary_color_drawing() {
        let mut fb = test_framebuffer(Rotation::Rotate0);
        fb.fill(Color::White);
        Pixel(Point::new(1, 0), Color::from(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.get_pixel(1, 0), Some(Color::Black));
    }

    #[test]
    fn test_display_is_draw_target() {
        let config = Builder::new()
            .dimensions(Dimensions::new(8, 8).unwrap())
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface, config).unwrap();
        assert_eq!(display.size(), Size::new(8, 8));

        Pixel(Point::new(7, 7), Color::White)
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.framebuffer().as_bytes()[7], 0x80);
    }
}
