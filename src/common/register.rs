//! Addresses of the NRF24L01 register file.



#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// CONFIG : IRQ masks, CRC, power and primary RX/TX.
    Config = 0x00,

    /// EN_AA : Auto-acknowledge per pipe.
    EnableAutoACK = 0x01,

    /// EN_RXADDR : Enabled RX pipes.
    EnabledRXAddress = 0x02,

    /// SETUP_AW : Address width.
    AddressWidth = 0x03,

    /// SETUP_RETR : Auto retransmit count and delay.
    SetupRetries = 0x04,

    /// RF_CH : RF channel.
    RFChannel = 0x05,

    /// RF_SETUP : Data rate, output power and LNA gain.
    RFSetup = 0x06,

    /// STATUS : IRQ flags, RX pipe number and TX FIFO full flag.
    Status = 0x07,

    /// OBSERVE_TX : Lost and retransmitted packet counters.
    ObserveTX = 0x08,

    /// CD : Carrier detect.
    CarrierDetect = 0x09,

    /// RX_ADDR_P0 : 5 byte RX address of pipe 0.
    RX0Address = 0x0A,

    /// RX_ADDR_P1 : 5 byte RX address of pipe 1.
    RX1Address = 0x0B,

    /// RX_ADDR_P2 : Only the LSB is stored on the device.
    RX2Address = 0x0C,

    /// RX_ADDR_P3 : Only the LSB is stored on the device.
    RX3Address = 0x0D,

    /// RX_ADDR_P4 : Only the LSB is stored on the device.
    RX4Address = 0x0E,

    /// RX_ADDR_P5 : Only the LSB is stored on the device.
    RX5Address = 0x0F,

    /// TX_ADDR : 5 byte TX address.
    TXAddress = 0x10,

    /// RX_PW_P0 : Static payload width of pipe 0.
    RX0PayloadWidth = 0x11,

    /// RX_PW_P1 : Static payload width of pipe 1.
    RX1PayloadWidth = 0x12,

    /// RX_PW_P2 : Static payload width of pipe 2.
    RX2PayloadWidth = 0x13,

    /// RX_PW_P3 : Static payload width of pipe 3.
    RX3PayloadWidth = 0x14,

    /// RX_PW_P4 : Static payload width of pipe 4.
    RX4PayloadWidth = 0x15,

    /// RX_PW_P5 : Static payload width of pipe 5.
    RX5PayloadWidth = 0x16,

    /// FIFO_STATUS : RX and TX FIFO flags.
    FIFOStatus = 0x17,

    /// DYNPD : Dynamic payload length per pipe.
    DynamicPayload = 0x1C,

    /// FEATURE : Dynamic payload, ACK payload and NOACK enables.
    Features = 0x1D,
}

impl Register {
    /// Index of this register in the register table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Into<u8> for Register {
    fn into(self) -> u8 {
        self as u8
    }
}

impl Into<u8> for &Register {
    fn into(self) -> u8 {
        *self as u8
    }
}
