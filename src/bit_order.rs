//! Bit-order conversion for the wire format
//!
//! The framebuffer keeps pixel `x` in bit `x % 8` of its byte (LSB = leftmost
//! pixel), and line addresses are plain integers. The panel clocks both in
//! the opposite order, so every address and pixel byte is mirrored while it
//! is serialized. The stored framebuffer is never mirrored in place.
//!
//! ## Example
//!
//! ```
//! use sharp_memory_lcd::bit_order::mirror;
//!
//! assert_eq!(mirror(0b0000_0001), 0b1000_0000);
//! assert_eq!(mirror(0b1100_1010), 0b0101_0011);
//! ```

/// Reverse the bit order of a byte (MSB-first <-> LSB-first)
pub const fn mirror(byte: u8) -> u8 {
    byte.reverse_bits()
}
