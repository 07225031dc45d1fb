//! Commands accepted by NRF24L01 devices.



#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Reads a register. The register address goes in the low 5 bits.
    ReadRegister = 0b00000000,

    /// Writes a register. The register address goes in the low 5 bits.
    WriteRegister = 0b00100000,

    /// Command to read a payload packet.
    ReadPayload = 0b01100001,

    /// Command to write a TX payload.
    WritePayload = 0b10100000,

    /// Writes an ACK payload. The pipe number goes in the low 3 bits.
    WriteAckPayload = 0b10101000,

    /// Flushes the TX FIFO.
    FlushTX = 0b11100001,

    /// Flushes the RX FIFO.
    FlushRX = 0b11100010,

    /// No operation.
    NOP = 0b11111111,
}

impl Command {
    /// Builds the command byte for the register at the given address.
    /// Only meaningful for `ReadRegister` and `WriteRegister`.
    pub const fn register(self, address: u8) -> u8 {
        (self as u8) | (address & 0x1F)
    }

    /// Builds the command byte for the given pipe.
    /// Only meaningful for `WriteAckPayload`.
    pub const fn pipe(self, pipe: u8) -> u8 {
        (self as u8) | (pipe & 0x07)
    }
}

impl Into<u8> for Command {
    fn into(self) -> u8 {
        self as u8
    }
}
