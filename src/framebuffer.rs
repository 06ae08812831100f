//! In-memory framebuffer
//!
//! The framebuffer mirrors the panel memory: one bit per pixel, `cols / 8`
//! bytes per line, lines stored top to bottom. A set bit is white and a
//! cleared bit is black.
//!
//! All pixel writes clip silently. Coordinates outside the (rotated) plane,
//! including negative ones, leave the buffer untouched, so shapes may hang
//! off the edge of the screen.
//!
//! ## Example
//!
//! ```
//! use sharp_memory_lcd::{Color, Dimensions, Framebuffer, Rotation};
//!
//! let dims = Dimensions::new(8, 16).unwrap();
//! let mut fb = Framebuffer::from_buffer([0u8; 16], dims, Rotation::Rotate0).unwrap();
//!
//! fb.set_pixel(9, 0, Color::White);
//! assert_eq!(fb.as_bytes()[1], 0b0000_0010);
//! assert_eq!(fb.get_pixel(9, 0), Some(Color::White));
//! assert_eq!(fb.get_pixel(-1, 0), None);
//! ```

use crate::color::Color;
use crate::config::{Dimensions, Rotation};
use crate::error::FramebufferError;
use crate::rotation::apply_rotation;

#[cfg(any(test, feature = "alloc"))]
use alloc::vec::Vec;

type FramebufferResult<T> = core::result::Result<T, FramebufferError>;

/// One-bit-per-pixel image of the panel memory
///
/// ## Type Parameters
///
/// * `B` - Storage, e.g. `Vec<u8>`, `[u8; N]` or `&mut [u8]`
pub struct Framebuffer<B> {
    /// Packed pixel storage, at least `dimensions.buffer_size()` bytes
    buffer: B,
    /// Physical dimensions
    dimensions: Dimensions,
    /// Mapping from drawing coordinates to the physical plane
    rotation: Rotation,
}

#[cfg(any(test, feature = "alloc"))]
impl Framebuffer<Vec<u8>> {
    /// Allocate a framebuffer on the heap, initially all black
    ///
    /// # Errors
    ///
    /// Returns `FramebufferError::Allocation` if the size overflows or the
    /// allocator refuses the request.
    pub fn new(dimensions: Dimensions, rotation: Rotation) -> FramebufferResult<Self> {
        let bytes = dimensions
            .line_size()
            .checked_mul(usize::from(dimensions.rows))
            .ok_or(FramebufferError::Allocation { bytes: usize::MAX })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(bytes)
            .map_err(|_| FramebufferError::Allocation { bytes })?;
        buffer.resize(bytes, 0x00);

        Ok(Self {
            buffer,
            dimensions,
            rotation,
        })
    }
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap caller-provided storage
    ///
    /// The existing content is kept. Bytes past `dimensions.buffer_size()`
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `FramebufferError::BufferTooSmall` if the storage is shorter
    /// than `dimensions.buffer_size()`.
    pub fn from_buffer(
        buffer: B,
        dimensions: Dimensions,
        rotation: Rotation,
    ) -> FramebufferResult<Self> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(FramebufferError::BufferTooSmall { required, provided });
        }
        Ok(Self {
            buffer,
            dimensions,
            rotation,
        })
    }

    /// Physical dimensions of the panel
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Rotation applied to drawing coordinates
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Width of the drawing plane (after rotation)
    pub fn width(&self) -> u16 {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions.cols,
            Rotation::Rotate90 | Rotation::Rotate270 => self.dimensions.rows,
        }
    }

    /// Height of the drawing plane (after rotation)
    pub fn height(&self) -> u16 {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions.rows,
            Rotation::Rotate90 | Rotation::Rotate270 => self.dimensions.cols,
        }
    }

    /// Packed pixel data, in natural bit order
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }

    /// Iterate over the physical lines, top to bottom
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.dimensions.line_size())
    }

    /// Give back the underlying storage
    pub fn release(self) -> B {
        self.buffer
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.fill(Color::Black);
    }

    /// Set every pixel to a level
    ///
    /// Solid levels are a single byte fill; dithered levels are written
    /// pixel by pixel so the pattern follows absolute coordinates.
    pub fn fill(&mut self, color: Color) {
        if let Some(byte) = color.fill_byte() {
            let size = self.dimensions.buffer_size();
            self.buffer.as_mut()[..size].fill(byte);
            return;
        }

        for y in 0..i32::from(self.height()) {
            for x in 0..i32::from(self.width()) {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Set a single pixel
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, bit)) = self.locate(x, y) else {
            return;
        };

        // locate() only returns in-range coordinates, both fit in u32
        let byte = &mut self.buffer.as_mut()[index];
        if color.is_white_at(x as u32, y as u32) {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Read back a single pixel
    ///
    /// Returns `None` for coordinates outside the drawing plane. Dithered
    /// levels read back as the black or white they resolved to.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, bit) = self.locate(x, y)?;
        if self.buffer.as_ref()[index] & bit != 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// Byte index and bit mask of a drawing coordinate, if it is on screen
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= u32::from(self.width()) || y >= u32::from(self.height()) {
            return None;
        }

        Some(apply_rotation(
            x,
            y,
            u32::from(self.dimensions.cols),
            u32::from(self.dimensions.rows),
            self.rotation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_framebuffer(rows: u16, cols: u16) -> Framebuffer<Vec<u8>> {
        Framebuffer::new(Dimensions::new(rows, cols).unwrap(), Rotation::Rotate0).unwrap()
    }

    fn all_pixels(fb: &Framebuffer<Vec<u8>>) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = i32::from(fb.width());
        (0..i32::from(fb.height())).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    #[test]
    fn test_new_allocates_black_plane() {
        let fb = test_framebuffer(240, 400);
        assert_eq!(fb.as_bytes().len(), 12_000);
        assert!(fb.as_bytes().iter().all(|&b| b == 0x00));
        assert_eq!(fb.rows().count(), 240);
        assert!(fb.rows().all(|row| row.len() == 50));
    }

    #[test]
    fn test_from_buffer_too_small() {
        let dims = Dimensions::new(8, 16).unwrap();
        let result = Framebuffer::from_buffer([0u8; 15], dims, Rotation::Rotate0);
        assert!(matches!(
            result,
            Err(FramebufferError::BufferTooSmall {
                required: 16,
                provided: 15
            })
        ));
    }

    #[test]
    fn test_from_buffer_ignores_extra_bytes() {
        let dims = Dimensions::new(8, 8).unwrap();
        let mut fb = Framebuffer::from_buffer([0xAAu8; 12], dims, Rotation::Rotate0).unwrap();
        fb.fill(Color::White);
        assert_eq!(fb.as_bytes().len(), 8);
        assert_eq!(fb.release()[8..], [0xAA; 4]);
    }

    #[test]
    fn test_pixel_bit_layout() {
        let mut fb = test_framebuffer(8, 16);
        fb.set_pixel(0, 0, Color::White);
        fb.set_pixel(15, 1, Color::White);
        assert_eq!(fb.as_bytes()[0], 0x01);
        assert_eq!(fb.as_bytes()[3], 0x80);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut fb = test_framebuffer(8, 8);
        fb.fill(Color::White);
        let before = fb.as_bytes().to_vec();

        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (i32::MIN, i32::MAX), (100, 3)] {
            fb.set_pixel(x, y, Color::Black);
            assert_eq!(fb.get_pixel(x, y), None);
        }
        assert_eq!(fb.as_bytes(), before.as_slice());
    }

    #[test]
    fn test_last_write_wins() {
        let mut fb = test_framebuffer(8, 8);
        fb.set_pixel(3, 4, Color::Black);
        fb.set_pixel(3, 4, Color::White);
        let twice = fb.as_bytes().to_vec();

        let mut single = test_framebuffer(8, 8);
        single.set_pixel(3, 4, Color::White);
        assert_eq!(single.as_bytes(), twice.as_slice());

        fb.set_pixel(3, 4, Color::Black);
        assert_eq!(fb.get_pixel(3, 4), Some(Color::Black));
        assert!(fb.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_white_sets_only_target_bit() {
        let mut fb = test_framebuffer(8, 8);
        fb.set_pixel(2, 0, Color::White);
        assert_eq!(fb.as_bytes()[0], 0b0000_0100);
    }

    #[test]
    fn test_fill_and_read_back() {
        let mut fb = test_framebuffer(16, 24);
        fb.fill(Color::White);
        assert!(all_pixels(&fb).all(|(x, y)| fb.get_pixel(x, y) == Some(Color::White)));

        fb.fill(Color::Black);
        assert!(all_pixels(&fb).all(|(x, y)| fb.get_pixel(x, y) == Some(Color::Black)));
    }

    #[test]
    fn test_clear_is_black() {
        let mut fb = test_framebuffer(8, 8);
        fb.fill(Color::White);
        fb.clear();
        assert!(fb.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_fill_dithered_levels() {
        let mut fb = test_framebuffer(8, 8);
        fb.fill(Color::DarkGray);
        // odd columns white: bits 1, 3, 5, 7
        assert!(fb.as_bytes().iter().all(|&b| b == 0xAA));

        fb.fill(Color::LightGray);
        for (x, y) in all_pixels(&fb).collect::<Vec<_>>() {
            let expected = if x % 3 == 0 && y % 3 == 0 {
                Color::Black
            } else {
                Color::White
            };
            assert_eq!(fb.get_pixel(x, y), Some(expected));
        }
    }

    #[test]
    fn test_rotated_plane() {
        let dims = Dimensions::new(8, 16).unwrap();
        let mut fb = Framebuffer::from_buffer([0u8; 16], dims, Rotation::Rotate90).unwrap();
        assert_eq!(fb.width(), 8);
        assert_eq!(fb.height(), 16);

        fb.set_pixel(0, 0, Color::White);
        // top-right physical pixel
        assert_eq!(fb.as_bytes()[1], 0x80);
        fb.set_pixel(8, 0, Color::White);
        assert_eq!(fb.get_pixel(8, 0), None);
        assert_eq!(fb.get_pixel(7, 15), Some(Color::Black));
    }
}
