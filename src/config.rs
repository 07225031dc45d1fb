//! Configuration applied by the preset profiles.



use super::common::*;



#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Primary role of the device.
    pub(crate) mode: Mode,

    /// RF channel of the device.
    pub(crate) ch: u8,

    /// Static payload width of pipe 0 (PRX only).
    pub(crate) pw: u8,

    /// Auto retransmit count.
    pub(crate) retries: u8,

    /// Auto retransmit delay [(n+1) * 250 us].
    pub(crate) delay: u8,

    /// Address of pipe 0 and the TX pipe, LSB first.
    pub(crate) address: [u8; 5],

    /// CRC checksum configuration.
    pub(crate) crc: CRCBytes,

    /// RF data rate.
    pub(crate) dr: DataRate,

    /// RF gain.
    pub(crate) gain: Gain,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance.
    pub const fn new() -> Self {
        Self {
            mode: Mode::PTX,
            ch: 2,
            pw: 32,
            retries: 3,
            delay: 0,
            address: [0xE7; 5],
            crc: CRCBytes::Two,
            dr: DataRate::Mid,
            gain: Gain::Max,
        }
    }

    /// Set the primary role.
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the RF channel.
    pub const fn channel(mut self, ch: u8) -> Self {
        self.ch = ch & 0x7F;
        self
    }

    /// Set the static payload width of pipe 0.
    pub const fn payload(mut self, pw: u8) -> Self {
        self.pw = if pw > 32 { 32 } else { pw };
        self
    }

    /// Set the maximum number of retransmissions.
    /// Ignored by the plain ShockBurst preset.
    pub const fn retries(mut self, retries: u8) -> Self {
        self.retries = if retries > 15 { 15 } else { retries };
        self
    }

    /// Set the raw retransmit delay code. The delay is (n+1) * 250 us.
    /// Ignored by the plain ShockBurst preset.
    pub const fn delay(mut self, delay: u8) -> Self {
        self.delay = if delay > 15 { 15 } else { delay };
        self
    }

    /// Set the pipe 0 / TX address.
    pub const fn address(mut self, address: [u8; 5]) -> Self {
        self.address = address;
        self
    }

    /// Set the CRC configuration.
    pub const fn crc(mut self, crc: CRCBytes) -> Self {
        self.crc = crc;
        self
    }

    /// Set the RF data rate.
    pub const fn datarate(mut self, dr: DataRate) -> Self {
        self.dr = dr;
        self
    }

    /// Set the RF gain.
    pub const fn gain(mut self, gain: Gain) -> Self {
        self.gain = gain;
        self
    }
}
