//! Line-update wire protocol
//!
//! Serializes the framebuffer into the byte stream a memory LCD expects
//! while its chip select is held active:
//!
//! ```text
//! mode | { address  data[cols/8]  0x00 } x rows | 0x00
//! ```
//!
//! Addresses are 1-based line numbers. Addresses and pixel bytes are
//! bit-mirrored on the way out, the framebuffer itself stays in natural
//! order. Bytes are staged in a small stack chunk so a full frame never has
//! to exist in memory at once.

use crate::bit_order::mirror;
use crate::command::{CLEAR_ALL, NO_UPDATE, TERMINATOR, WRITE_LINE, mode_byte};
use crate::config::Dimensions;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

/// Bytes staged before each bus write
pub const CHUNK_SIZE: usize = 64;

/// Number of bytes in a full-frame refresh
///
/// `1 + rows * (cols / 8 + 2) + 1`: mode byte, one address + data +
/// terminator group per line, and the frame terminator.
pub fn frame_size(dimensions: &Dimensions) -> usize {
    1 + usize::from(dimensions.rows) * (dimensions.line_size() + 2) + 1
}

/// Buffers outgoing bytes and hands them to the interface in chunks
pub(crate) struct FrameWriter<'a, I: DisplayInterface> {
    interface: &'a mut I,
    chunk: [u8; CHUNK_SIZE],
    len: usize,
    sent: usize,
}

impl<'a, I: DisplayInterface> FrameWriter<'a, I> {
    pub(crate) fn new(interface: &'a mut I) -> Self {
        Self {
            interface,
            chunk: [0; CHUNK_SIZE],
            len: 0,
            sent: 0,
        }
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<(), I::Error> {
        self.chunk[self.len] = byte;
        self.len += 1;
        if self.len == CHUNK_SIZE {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), I::Error> {
        if self.len > 0 {
            self.interface.write(&self.chunk[..self.len])?;
            self.sent += self.len;
            self.len = 0;
        }
        Ok(())
    }

    /// Write out whatever is still staged, returning the total byte count
    pub(crate) fn finish(mut self) -> Result<usize, I::Error> {
        self.flush()?;
        Ok(self.sent)
    }
}

/// Stream a full-frame line update
pub(crate) fn write_frame<I, B>(
    interface: &mut I,
    framebuffer: &Framebuffer<B>,
    vcom: bool,
) -> Result<usize, I::Error>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let mut out = FrameWriter::new(interface);
    out.push(mode_byte(WRITE_LINE, vcom))?;

    for (index, line) in framebuffer.rows().enumerate() {
        // Dimensions caps rows at MAX_LINES, so the address fits a byte
        out.push(mirror((index + 1) as u8))?;
        for &byte in line {
            out.push(mirror(byte))?;
        }
        out.push(TERMINATOR)?;
    }

    out.push(TERMINATOR)?;
    out.finish()
}

/// Send the all-clear command
pub(crate) fn write_clear<I: DisplayInterface>(
    interface: &mut I,
    vcom: bool,
) -> Result<usize, I::Error> {
    let bytes = [mode_byte(CLEAR_ALL, vcom), TERMINATOR];
    interface.write(&bytes)?;
    Ok(bytes.len())
}

/// Send a display-mode command that only latches the VCOM level
pub(crate) fn write_vcom<I: DisplayInterface>(
    interface: &mut I,
    vcom: bool,
) -> Result<usize, I::Error> {
    let bytes = [mode_byte(NO_UPDATE, vcom), TERMINATOR];
    interface.write(&bytes)?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::Rotation;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct RecordingInterface {
        writes: Vec<Vec<u8>>,
    }

    impl RecordingInterface {
        fn bytes(&self) -> Vec<u8> {
            self.writes.concat()
        }
    }

    impl DisplayInterface for RecordingInterface {
        type Error = core::convert::Infallible;

        fn set_chip_select(&mut self, _active: bool) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            self.writes.push(bytes.to_vec());
            Ok(())
        }
    }

    fn framebuffer(rows: u16, cols: u16) -> Framebuffer<Vec<u8>> {
        Framebuffer::new(Dimensions::new(rows, cols).unwrap(), Rotation::Rotate0).unwrap()
    }

    #[test]
    fn test_frame_size_formula() {
        let dims = Dimensions::new(240, 400).unwrap();
        assert_eq!(frame_size(&dims), 1 + 240 * 52 + 1);
        let dims = Dimensions::new(8, 8).unwrap();
        assert_eq!(frame_size(&dims), 26);
    }

    #[test]
    fn test_frame_length_matches_formula() {
        for (rows, cols) in [(8, 8), (16, 24), (168, 144), (240, 400)] {
            let fb = framebuffer(rows, cols);
            let mut interface = RecordingInterface::default();
            let sent = write_frame(&mut interface, &fb, false).unwrap();
            assert_eq!(sent, frame_size(fb.dimensions()));
            assert_eq!(interface.bytes().len(), sent);
        }
    }

    #[test]
    fn test_frame_layout() {
        let mut fb = framebuffer(8, 16);
        fb.set_pixel(0, 0, Color::White);
        fb.set_pixel(9, 2, Color::White);

        let mut interface = RecordingInterface::default();
        write_frame(&mut interface, &fb, true).unwrap();
        let bytes = interface.bytes();

        assert_eq!(bytes[0], 0xC0);
        // line 1: address, pixel 0 becomes the MSB on the wire
        assert_eq!(bytes[1..5], [0x80, 0x80, 0x00, 0x00]);
        // line 3 starts after two 4-byte groups
        assert_eq!(bytes[9..13], [mirror(3), 0x00, 0x40, 0x00]);
        // last line address, then the frame terminator
        assert_eq!(bytes[29], mirror(8));
        assert_eq!(bytes[bytes.len() - 2..], [0x00, 0x00]);
    }

    #[test]
    fn test_frame_does_not_touch_framebuffer() {
        let mut fb = framebuffer(8, 8);
        fb.set_pixel(1, 1, Color::White);
        let before = fb.as_bytes().to_vec();

        let mut interface = RecordingInterface::default();
        write_frame(&mut interface, &fb, false).unwrap();
        assert_eq!(fb.as_bytes(), before.as_slice());
    }

    #[test]
    fn test_frame_is_chunked() {
        let fb = framebuffer(240, 400);
        let mut interface = RecordingInterface::default();
        write_frame(&mut interface, &fb, false).unwrap();
        assert!(interface.writes.iter().all(|w| w.len() <= CHUNK_SIZE));
        assert_eq!(interface.writes.len(), frame_size(fb.dimensions()).div_ceil(CHUNK_SIZE));
    }

    #[test]
    fn test_clear_and_vcom_commands() {
        let mut interface = RecordingInterface::default();
        assert_eq!(write_clear(&mut interface, true).unwrap(), 2);
        assert_eq!(write_vcom(&mut interface, false).unwrap(), 2);
        assert_eq!(interface.bytes(), [0x60, 0x00, 0x00, 0x00]);
    }
}
