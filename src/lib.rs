//! NRF24L01 no-std register driver and I2C slave command processor.
//!
//! The radio side is layered:
//!   - Transport : A synchronous byte exchange with a chip select line.
//!   - Codec     : A static register table and field level get / set over raw register buffers.
//!   - Driver    : Register reads / writes, payload transfer and preset profiles.
//!
//! The I2C side (`slave`) rebuilds "command + arguments" messages from the
//! byte-by-byte interrupts of an I2C slave peripheral and serves the response
//! of the last command on the next read.



#![cfg_attr(not(test), no_std)]



pub mod codec;
pub mod common;
pub mod slave;
pub mod transport;



mod config;
mod error;
mod irq;
mod preset;
mod transfer;

#[cfg(test)]
mod mock;



pub use codec::*;

pub use config::*;

pub use error::*;

pub use transport::*;



use common::*;



/// Error returned by the driver: a driver error and, if the transport failed,
/// the hardware error behind it.
pub type DriverError<T> = (Error, Option<<T as Transport>::Error>);



pub struct Driver<T> {
    /// The transport to the NRF24 device.
    transport: T,

    /// Layout of the device's register file.
    map: &'static RegisterMap,
}

/// Creating / releasing the driver.
impl<T: Transport> Driver<T> {
    /// Creates a new NRF24L01 driver with the default register map.
    pub fn new(transport: T) -> Result<Self, T::Error> {
        Self::with_map(transport, &NRF24L01_MAP)
    }

    /// Creates a new driver over a custom register map.
    pub fn with_map(mut transport: T, map: &'static RegisterMap) -> Result<Self, T::Error> {
        // Bring up the transport.
        transport.init()?;

        #[cfg(feature = "log")]
        defmt::debug!("Driver : Transport initialized");

        Ok( Self { transport, map, } )
    }

    /// Register map used by this driver.
    pub fn map(&self) -> &'static RegisterMap {
        self.map
    }

    /// Releases the transport.
    pub fn release(self) -> T {
        self.transport
    }
}


/// Basic methods for interacting with the NRF24 device.
/// Reading and writing whole registers, fields and single byte commands.
impl<T: Transport> Driver<T> {
    /// Reads a register into `buf`. Returns the number of bytes read.
    /// The transfer is sized by the register map, not by the buffer.
    pub fn read_register<R: Into<u8>>(&mut self, r: R, buf: &mut RegisterBuffer) -> Result<usize, T::Error> {
        let reg = r.into();
        let size = self.map.size(reg);

        self.transport.transaction(|t| {
            // Send the command.
            t.exchange( Command::ReadRegister.register(reg) )?;

            // Clock in the register contents.
            for byte in &mut buf.data[..size] {
                *byte = t.exchange( Command::NOP as u8 )?;
            }

            Ok( () )
        })?;

        buf.size = size as u8;

        Ok( size )
    }

    /// Writes `buf` to a register. Returns the number of bytes written.
    /// The transfer is sized by the register map, not by the buffer.
    pub fn write_register<R: Into<u8>>(&mut self, r: R, buf: &RegisterBuffer) -> Result<usize, T::Error> {
        let reg = r.into();
        let size = self.map.size(reg);

        self.transport.transaction(|t| {
            // Send the command.
            t.exchange( Command::WriteRegister.register(reg) )?;

            // Clock out the register contents.
            for byte in &buf.data[..size] {
                t.exchange( *byte )?;
            }

            Ok( () )
        })?;

        Ok( size )
    }

    /// Read-modify-write of one register.
    /// The register is the one of the first field. Fields of other registers
    /// are skipped. Fields not listed keep the value read from the device.
    pub fn update(&mut self, fields: &[(Field, u8)]) -> Result<(), T::Error> {
        let reg = match fields.first() {
            Some( (field, _) ) => field.register,
            None => return Ok( () ),
        };

        // Read the full register.
        let mut buf = RegisterBuffer::new();
        self.read_register(reg, &mut buf)?;

        // Change only the given fields.
        for (field, value) in fields.iter().filter(|(f, _)| f.register == reg) {
            self.map.set_field(*field, &mut buf, *value);
        }

        // Write the full register back.
        self.write_register(reg, &buf)?;

        Ok( () )
    }

    /// Reads a single field from the device.
    pub fn read_field(&mut self, field: Field) -> Result<u8, T::Error> {
        let mut buf = RegisterBuffer::new();
        self.read_register(field.register, &mut buf)?;

        Ok( self.map.field(field, &buf) )
    }

    /// Sends a 1 byte command.
    pub fn command(&mut self, c: Command) -> Result<(), T::Error> {
        self.transport.transaction(|t| t.exchange( c.into() ).map(|_| ()))
    }

    /// Reads the STATUS register.
    pub(crate) fn status(&mut self) -> Result<RegisterBuffer, DriverError<T>> {
        let mut buf = RegisterBuffer::new();

        if let Err( hwe ) = self.read_register(Register::Status, &mut buf) {
            return Err( (Error::CouldNotReadStatus, Some(hwe)) );
        }

        Ok( buf )
    }

    /// Reads the FIFO_STATUS register.
    pub(crate) fn fifostatus(&mut self) -> Result<RegisterBuffer, DriverError<T>> {
        let mut buf = RegisterBuffer::new();

        if let Err( hwe ) = self.read_register(Register::FIFOStatus, &mut buf) {
            return Err( (Error::CouldNotReadStatus, Some(hwe)) );
        }

        Ok( buf )
    }

    /// Returns `true` if the given one bit field is set in `buf`.
    pub(crate) fn flag(&self, buf: &RegisterBuffer, field: Field) -> bool {
        self.map.field(field, buf) == 1
    }

    /// Writes a STATUS value back to clear the latched interrupt flags.
    pub(crate) fn clearirqs(&mut self, status: &RegisterBuffer) -> Result<(), DriverError<T>> {
        if let Err( hwe ) = self.write_register(Register::Status, status) {
            return Err( (Error::FailedRegisterWrite, Some(hwe)) );
        }

        Ok( () )
    }

    /// Flushes one of the FIFOs.
    pub(crate) fn flush(&mut self, c: Command) -> Result<(), DriverError<T>> {
        self.command(c).map_err(|hwe| (Error::FailedFlush, Some(hwe)))
    }
}


/// Diagnostics.
#[cfg(feature = "log")]
impl<T: Transport> Driver<T> {
    /// Logs every register of the device, field by field.
    pub fn report(&mut self) -> Result<(), T::Error> {
        for (reg, def) in self.map.registers().iter().enumerate() {
            // Skip reserved addresses.
            if def.reserved() { continue }

            let mut buf = RegisterBuffer::new();
            self.read_register(reg as u8, &mut buf)?;

            defmt::info!("Register {=str}: {=[u8]:x}", def.name, buf.as_slice());

            for (i, f) in def.fields.iter().enumerate() {
                defmt::info!("  {=usize}[{=u8}] {=str} = {=u8}", i, f.size, f.name, self.map.get(reg as u8, i as u8, &buf));
            }
        }

        Ok( () )
    }
}
