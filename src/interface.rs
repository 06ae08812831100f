//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with a memory LCD over SPI.
//!
//! ## Hardware Requirements
//!
//! A memory LCD needs:
//! - SPI bus (SI + SCLK), write only
//! - 1 GPIO pin:
//!   - **SCS**: Chip select (output, active high on Sharp panels)
//!
//! The chip select is driven by the driver rather than by an `SpiDevice`,
//! because the panel expects it high for the whole transaction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use sharp_memory_lcd::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI bus and chip select pin
//! let mut interface = Interface::new(MockSpi, MockPin);
//!
//! // Clear the panel memory by hand
//! let _ = interface.set_chip_select(true);
//! let _ = interface.write(&[0x20, 0x00]);
//! let _ = interface.set_chip_select(false);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to a memory LCD
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If the chip select
/// is handled elsewhere (e.g. by an I/O expander), implement this trait on
/// your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Drive the chip select line
    ///
    /// `true` starts a transaction, `false` ends it. Before ending a
    /// transaction the implementation must make sure every byte has left
    /// the bus.
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO (or the final bus flush) fails.
    fn set_chip_select(&mut self, active: bool) -> InterfaceResult<(), Self::Error>;

    /// Write bytes to the panel
    ///
    /// Blocks until the bytes are handed to the bus.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails.
    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for memory LCDs
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// Both peripherals may be passed by `&mut` reference when the caller keeps
/// ownership of them.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
pub struct Interface<SPI, CS> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin
    cs: CS,
    /// Chip select polarity (true = active high, false = active low)
    cs_active_high: bool,
}

impl<SPI, CS> Interface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a new Interface
    ///
    /// The chip select defaults to active high, as on Sharp panels.
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip select pin (output)
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            cs_active_high: true,
        }
    }

    /// Set chip select polarity
    ///
    /// Default is active-high. Set to false when the line goes through an
    /// inverting level shifter.
    pub fn set_cs_active_high(&mut self, active_high: bool) -> &mut Self {
        self.cs_active_high = active_high;
        self
    }

    /// Get chip select polarity (true = active high)
    pub fn cs_active_high(&self) -> bool {
        self.cs_active_high
    }

    /// Give back the SPI bus and the chip select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> DisplayInterface for Interface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = InterfaceError<SPI::Error, CS::Error>;

    fn set_chip_select(&mut self, active: bool) -> InterfaceResult<(), Self::Error> {
        if !active {
            self.spi.flush().map_err(InterfaceError::Spi)?;
        }
        let level = if active == self.cs_active_high {
            self.cs.set_high()
        } else {
            self.cs.set_low()
        };
        level.map_err(InterfaceError::Pin)
    }

    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.spi.write(bytes).map_err(InterfaceError::Spi)
    }
}
