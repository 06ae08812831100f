//! Core display operations

use crate::config::{Dimensions, Rotation};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::protocol::{write_clear, write_frame, write_vcom};

#[cfg(any(test, feature = "alloc"))]
use crate::config::Config;
#[cfg(any(test, feature = "alloc"))]
use alloc::vec::Vec;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for memory-in-pixel LCDs
///
/// Owns the interface and the framebuffer, and keeps the VCOM level that has
/// to alternate on every transaction. Draw into [`framebuffer_mut`](Self::framebuffer_mut),
/// then push the frame with [`refresh`](Self::refresh).
///
/// A panel whose image stays the same still needs its VCOM toggled
/// regularly (typically at 1-60 Hz); call [`toggle_vcom`](Self::toggle_vcom)
/// for that.
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Image of the panel memory
    framebuffer: Framebuffer<B>,
    /// VCOM level of the most recent transaction, flipped before each new one
    vcom: bool,
}

#[cfg(any(test, feature = "alloc"))]
impl<I> Display<I, Vec<u8>>
where
    I: DisplayInterface,
{
    /// Create a new Display with a heap-allocated framebuffer
    ///
    /// The framebuffer starts out black and the chip select is driven
    /// inactive.
    ///
    /// # Errors
    ///
    /// Returns `Error::Framebuffer` if the framebuffer cannot be allocated,
    /// or `Error::Interface` if the chip select cannot be driven.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        let framebuffer =
            Framebuffer::new(config.dimensions, config.rotation).map_err(Error::Framebuffer)?;
        Self::with_framebuffer(interface, framebuffer)
    }
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display around an existing framebuffer
    ///
    /// Use this with statically allocated storage when no allocator is
    /// available. The framebuffer content is kept as is.
    pub fn with_framebuffer(
        mut interface: I,
        framebuffer: Framebuffer<B>,
    ) -> Result<Self, Error<I>> {
        interface.set_chip_select(false).map_err(Error::Interface)?;

        log::trace!(
            "memory LCD {}x{} ready",
            framebuffer.dimensions().cols,
            framebuffer.dimensions().rows
        );

        Ok(Self {
            interface,
            framebuffer,
            vcom: true,
        })
    }

    /// Push the whole framebuffer to the panel
    ///
    /// Sends `1 + rows * (cols / 8 + 2) + 1` bytes in a single transaction.
    pub fn refresh(&mut self) -> DisplayResult<I> {
        let sent = self.transaction(|interface, framebuffer, vcom| {
            write_frame(interface, framebuffer, vcom)
        })?;
        log::debug!("refresh: {} bytes, vcom={}", sent, self.vcom);
        Ok(())
    }

    /// Clear the panel and the framebuffer to black
    ///
    /// The framebuffer is only cleared once the chip select is asserted.
    pub fn clear(&mut self) -> DisplayResult<I> {
        let sent = self.transaction(|interface, framebuffer, vcom| {
            framebuffer.clear();
            write_clear(interface, vcom)
        })?;
        log::debug!("clear: {} bytes, vcom={}", sent, self.vcom);
        Ok(())
    }

    /// Toggle VCOM without changing the panel memory
    pub fn toggle_vcom(&mut self) -> DisplayResult<I> {
        self.transaction(|interface, _, vcom| write_vcom(interface, vcom))?;
        log::debug!("vcom toggled: vcom={}", self.vcom);
        Ok(())
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Access the framebuffer mutably, for drawing
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        self.framebuffer.dimensions()
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.framebuffer.rotation()
    }

    /// Give back the interface and the framebuffer
    pub fn release(self) -> (I, Framebuffer<B>) {
        (self.interface, self.framebuffer)
    }

    /// Run one chip-select framed transaction
    ///
    /// VCOM flips before the body runs. Once the chip select is asserted it
    /// is always released again; a transport fault is reported after that.
    fn transaction<F>(&mut self, body: F) -> Result<usize, Error<I>>
    where
        F: FnOnce(&mut I, &mut Framebuffer<B>, bool) -> Result<usize, I::Error>,
    {
        self.interface
            .set_chip_select(true)
            .map_err(Error::Interface)?;
        self.vcom = !self.vcom;

        let sent = body(&mut self.interface, &mut self.framebuffer, self.vcom);
        let released = self.interface.set_chip_select(false);

        let sent = sent.map_err(|e| {
            log::warn!("transport fault, panel content undefined: {:?}", e);
            Error::Interface(e)
        })?;
        released.map_err(Error::Interface)?;
        Ok(sent)
    }
}
