//! Byte level transport to the device.
//! Every transaction is bracketed by exactly one `select` / `deselect` pair.



use embedded_hal::{
    digital::OutputPin,
    spi::SpiBus,
};

use super::HardwareError;



/// Synchronous full-duplex byte channel with a chip select line.
pub trait Transport {
    /// Error emitted by the underlying hardware.
    type Error;

    /// Prepares the transport for use.
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok( () )
    }

    /// Asserts the chip select line.
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Deasserts the chip select line.
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Clocks out one byte and returns the byte clocked in at the same time.
    /// Blocks until the transfer completes.
    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Runs `f` with the chip select asserted.
    /// The line is released even if `f` fails. The first error is reported.
    fn transaction<R, F>(&mut self, f: F) -> Result<R, Self::Error>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<R, Self::Error>,
    {
        self.select()?;

        let result = f(self);
        let released = self.deselect();

        let value = result?;
        released?;

        Ok( value )
    }
}



/// Transport over an `embedded-hal` SPI bus with a GPIO chip select.
pub struct SpiTransport<SPI, CS> {
    /// The SPI bus to the NRF24 device.
    spi: SPI,

    /// The active low chip select pin.
    cs: CS,
}

impl<SPI: SpiBus, CS: OutputPin> SpiTransport<SPI, CS> {
    /// Creates a new SPI transport.
    pub const fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs, }
    }

    /// Releases the bus and the chip select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI: SpiBus, CS: OutputPin> Transport for SpiTransport<SPI, CS> {
    type Error = HardwareError<SPI::Error, CS::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err( HardwareError::ChipSelect )
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err( HardwareError::ChipSelect )
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        // Wait for the bus to go idle before releasing the device.
        self.spi.flush().map_err( HardwareError::Serial )?;

        self.cs.set_high().map_err( HardwareError::ChipSelect )
    }

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut buf = [byte];

        self.spi.transfer_in_place(&mut buf).map_err( HardwareError::Serial )?;

        Ok( buf[0] )
    }
}
