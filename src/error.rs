//! Errors emitted by the NRF24L01 driver and the I2C command processor.
//! Radio errors come in two parts, a driver error and an optional hardware
//! error. The driver will always return at least a driver error. The hardware
//! error is present when the failure originated in the transport.



/// A set of possible errors in the radio driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
pub enum Error {
    /// The driver could not read the status registers.
    CouldNotReadStatus,

    /// Failed to flush one of the device FIFOs.
    FailedFlush,

    /// Failed to download a payload from the device.
    FailedPacketDownload,

    /// Failed to upload a payload to the device.
    FailedPacketUpload,

    /// Failed to modify a register.
    FailedRegisterWrite,

    /// Waiting on the IRQ line failed.
    InterruptWait,

    /// A transmission reached the maximum number of retries without an ACK.
    MaxRetries,

    /// The RX FIFO was full and has been flushed.
    /// Holds the number of payload bytes read during the same call before the
    /// flush (0 if none). Those bytes are valid but later packets were lost.
    RXFull( u8 ),

    /// A bounded wait ran out of polls.
    Timeout,

    /// The TX FIFO was full and has been flushed. Nothing was sent.
    TXFull,
}



/// A set of possible hardware errors of the SPI transport.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HardwareError<SPI, CS> {
    /// An error with the SPI hardware.
    Serial( SPI ),

    /// An error with the CS pin.
    ChipSelect( CS ),
}

#[cfg(feature = "log")]
impl<SPI, CS> defmt::Format for HardwareError<SPI, CS> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            HardwareError::Serial( _ ) => defmt::write!(f, "SPI Serial Error"),
            HardwareError::ChipSelect( _ ) => defmt::write!(f, "Chip Select Error"),
        }
    }
}



/// Errors of the I2C command processor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
pub enum ResponseError {
    /// The response buffer is full. The byte was dropped.
    CapacityExceeded,
}
