//! Coordinate rotation utilities
//!
//! This module maps logical (drawing) coordinates to a physical location in
//! the framebuffer.
//!
//! The framebuffer stores each panel line as `cols / 8` bytes. Pixel `x` of a
//! line lives in byte `x / 8`, bit `x % 8` (the leftmost pixel of a byte is
//! its least significant bit). Bytes are mirrored on the wire, not here.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation
//! - **Rotate90**: 90° clockwise, width and height swapped
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° clockwise (or 90° counter-clockwise)
//!
//! ## Example
//!
//! ```
//! use sharp_memory_lcd::{rotation::apply_rotation, Rotation};
//!
//! // For an 8x1 display at native orientation, pixel (0,0) is at byte 0, bit 0 (LSB)
//! let (idx, bit) = apply_rotation(0, 0, 8, 1, Rotation::Rotate0);
//! assert_eq!(idx, 0);
//! assert_eq!(bit, 0x01);
//!
//! // Pixel (7,0) is at byte 0, bit 7 (MSB)
//! let (idx, bit) = apply_rotation(7, 0, 8, 1, Rotation::Rotate0);
//! assert_eq!(idx, 0);
//! assert_eq!(bit, 0x80);
//! ```

use crate::config::Rotation;

/// Apply rotation transformation to get buffer index and bit mask
///
/// # Arguments
///
/// * `x` - Logical X coordinate, inside the rotated width
/// * `y` - Logical Y coordinate, inside the rotated height
/// * `width` - Physical display width in pixels (must be multiple of 8)
/// * `height` - Physical display height in pixels
/// * `rotation` - Rotation mode
///
/// # Returns
///
/// Returns a tuple of (byte_index, bit_mask):
/// - `byte_index`: `row * (width / 8) + column / 8` of the physical pixel
/// - `bit_mask`: `1 << (column % 8)`
pub fn apply_rotation(x: u32, y: u32, width: u32, height: u32, rotation: Rotation) -> (usize, u8) {
    let (column, row) = match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (width - 1 - y, x),
        Rotation::Rotate180 => (width - 1 - x, height - 1 - y),
        Rotation::Rotate270 => (y, height - 1 - x),
    };
    let index = (row * (width / 8) + column / 8) as usize;
    let bit = 0x01 << (column % 8);
    (index, bit)
}
