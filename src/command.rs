//! Memory LCD command definitions
//!
//! Every transaction starts with a single mode byte. The upper bits select
//! the operation and carry the current VCOM level; the remaining bits are
//! don't-care and sent as zero.
//!
//! ## Transaction layout
//!
//! | Transaction | Bytes |
//! |-------------|-------|
//! | Line update | `WRITE_LINE \| vcom`, then per line: address, data, `TERMINATOR`; then `TERMINATOR` |
//! | Clear | `CLEAR_ALL \| vcom`, `TERMINATOR` |
//! | VCOM only | `NO_UPDATE \| vcom`, `TERMINATOR` |
//!
//! ## Example
//!
//! ```
//! use sharp_memory_lcd::command::{self, mode_byte};
//!
//! assert_eq!(mode_byte(command::WRITE_LINE, true), 0xC0);
//! assert_eq!(mode_byte(command::CLEAR_ALL, false), 0x20);
//! ```

/// Line update mode (0x80)
///
/// Followed by one or more address + data + terminator groups.
pub const WRITE_LINE: u8 = 0x80;

/// VCOM bit (0x40)
///
/// Must alternate between transactions to keep DC bias off the liquid crystal.
pub const VCOM: u8 = 0x40;

/// All clear mode (0x20)
///
/// Clears the panel memory to its blank state.
pub const CLEAR_ALL: u8 = 0x20;

/// Display mode (0x00)
///
/// Leaves the panel memory untouched; only latches the VCOM level.
pub const NO_UPDATE: u8 = 0x00;

/// Dummy byte ending a line and a frame (0x00)
pub const TERMINATOR: u8 = 0x00;

/// Combine a mode with the VCOM level into the first byte of a transaction
pub const fn mode_byte(mode: u8, vcom: bool) -> u8 {
    if vcom { mode | VCOM } else { mode }
}
