//! Sharp Memory LCD Driver
//!
//! A driver for Sharp memory-in-pixel LCDs (LS013B7DH03, LS027B7DH01 and
//! friends) driven over a write-only SPI bus with a separate chip select.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable display dimensions and rotation
//! - Integer line, rectangle, circle and triangle rasterizers
//! - Dithered light and dark gray levels
//! - Heap-allocated (`alloc` feature) or caller-provided framebuffer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use sharp_memory_lcd::{Builder, Color, Dimensions, Display, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! let interface = Interface::new(spi, cs);
//! let dims = match Dimensions::new(240, 400) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.clear();
//!
//! let fb = display.framebuffer_mut();
//! fb.fill(Color::White);
//! fb.fill_circle(200, 120, 60, Color::LightGray);
//! fb.draw_line(0, 0, 399, 239, Color::Black);
//! let _ = display.refresh();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Bit-order conversion for the wire format
pub mod bit_order;
/// Pixel levels and dither patterns
pub mod color;
/// Memory LCD command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Integer rasterization of 2-D primitives
pub mod draw;
/// Error types for the driver
pub mod error;
/// In-memory framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Line-update wire protocol
pub mod protocol;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_LINES, Rotation};
pub use display::Display;
pub use error::{BuilderError, Error, FramebufferError};
pub use framebuffer::Framebuffer;
pub use interface::{DisplayInterface, Interface, InterfaceError};
pub use protocol::frame_size;
