//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! framebuffer storage ([`FramebufferError`]) and display transactions ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`FramebufferError`] - The framebuffer could not be allocated or the supplied storage is too small
//! - [`Error`] - Runtime errors during display construction and transactions
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Drawing outside the display is not an error: out-of-range pixels are clipped.
//!
//! ## Example
//!
//! ```
//! use sharp_memory_lcd::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Width must be a multiple of 8
//! let result = Dimensions::new(240, 401);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum number of lines (rows) a panel can have
///
/// Line addresses are a single byte on the wire, and the row count must stay
/// a multiple of 8, so 248 is the largest addressable height.
pub const MAX_LINES: u16 = 248;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// A transaction that fails this way leaves the panel content undefined
    /// until the next successful refresh.
    Interface(I::Error),
    /// Framebuffer could not be created
    Framebuffer(FramebufferError),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::Framebuffer(e) => write!(f, "Framebuffer error: {e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when creating a framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferError {
    /// The framebuffer allocation was refused, or its size overflowed
    Allocation {
        /// Number of bytes requested
        bytes: usize,
    },
    /// Caller-provided storage is too small for the display
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for FramebufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Allocation { bytes } => {
                write!(f, "Failed to allocate {bytes} bytes for the framebuffer")
            }
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl core::error::Error for FramebufferError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_LINES} rows, rows and cols must be non-zero multiples of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
