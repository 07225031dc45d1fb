//! `enum`s used in NRF24L01 configuration structs.






/// Operating profiles that can be applied in one call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
pub enum Preset {
    /// Plain ShockBurst.
    /// No auto-acknowledge and no auto retransmission.
    ShockBurst,

    /// Enhanced ShockBurst.
    /// Auto-acknowledge and auto retransmission on pipe 0.
    EnhancedShockBurst,

    /// Enhanced ShockBurst with dynamic payload width and ACK payloads on pipe 0.
    EnhancedShockBurstPayload,
}



/// Primary role of the device.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Primary transmitter.
    PTX = 0,

    /// Primary receiver.
    PRX = 1,
}



/// CRC checksum configurations of the NRF24L01 device.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
pub enum CRCBytes {
    /// No CRC bytes with each packet.
    None,

    /// One CRC bytes with each packet.
    One,

    /// Two CRC bytes with each packet.
    Two,
}

impl CRCBytes {
    /// Values of the (EN_CRC, CRCO) fields.
    pub(crate) const fn fields(self) -> (u8, u8) {
        match self {
            CRCBytes::None => (0, 0),
            CRCBytes::One => (1, 0),
            CRCBytes::Two => (1, 1),
        }
    }
}



/// RF gain configurations of NRF24L01 devices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
pub enum Gain {
    /// Maximum gain [0 dBm].
    Max,

    /// High gain [-6 dBm].
    High,

    /// Mid gain [-12 dBm].
    Mid,

    /// Low gain [-18 dBm].
    Low,
}

impl Gain {
    /// Value of the RF_PWR field.
    pub(crate) const fn field(self) -> u8 {
        match self {
            Gain::Max => 0b11,
            Gain::High => 0b10,
            Gain::Mid => 0b01,
            Gain::Low => 0b00,
        }
    }
}



/// RF data rate configurations of NRF24L01 devices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
pub enum DataRate {
    /// High data rate [2 Mbps].
    High,

    /// Mid data rate [1 Mbps].
    Mid,
}

impl DataRate {
    /// Value of the RF_DR field.
    pub(crate) const fn field(self) -> u8 {
        match self {
            DataRate::High => 1,
            DataRate::Mid => 0,
        }
    }
}
