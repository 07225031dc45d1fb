//! Argument and response buffers of the I2C command processor.



use core::ops::Index;

use super::*;



/// Arguments collected for the current command.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Args {
    /// Argument bytes in arrival order.
    data: [u8; MAX_ARGS],

    /// Number of arguments collected so far.
    count: u8,
}

impl Args {
    /// Static initializer.
    pub const fn new() -> Self {
        Self { data: [0u8; MAX_ARGS], count: 0, }
    }

    /// Number of arguments collected.
    pub const fn len(&self) -> usize {
        self.count as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The collected arguments.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// Drops all arguments and zeroes the storage.
    pub(super) fn clear(&mut self) {
        self.data = [0u8; MAX_ARGS];
        self.count = 0;
    }

    /// Appends an argument. Returns `false` if there was no room for it.
    pub(super) fn push(&mut self, byte: u8) -> bool {
        if self.len() >= MAX_ARGS { return false }

        self.data[self.len()] = byte;
        self.count += 1;

        true
    }
}

impl Index<usize> for Args {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.as_slice()[i]
    }
}



/// Response served to the master on the next read transaction.
/// The response is not cleared after being read: reading it again returns
/// `NO_DATA` until it is cleared and refilled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Response {
    /// Response bytes.
    data: [u8; MAX_RESPONSE],

    /// Number of bytes queued.
    count: u8,

    /// Number of bytes already sent.
    sent: u8,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// Static initializer.
    pub const fn new() -> Self {
        Self { data: [0u8; MAX_RESPONSE], count: 0, sent: 0, }
    }

    /// Drops the queued bytes and rewinds the read position.
    pub fn clear(&mut self) {
        self.count = 0;
        self.sent = 0;
    }

    /// Queues a byte.
    pub fn push(&mut self, byte: u8) -> Result<(), ResponseError> {
        if self.len() >= MAX_RESPONSE {
            #[cfg(feature = "log")]
            defmt::warn!("I2C Slave : Response full, dropping {=u8:#04x}", byte);

            return Err( ResponseError::CapacityExceeded );
        }

        self.data[self.len()] = byte;
        self.count += 1;

        Ok( () )
    }

    /// Returns the next byte to send or `NO_DATA` past the end.
    pub fn next_byte(&mut self) -> u8 {
        if self.sent >= self.count { return NO_DATA }

        let byte = self.data[self.sent as usize];
        self.sent += 1;

        byte
    }

    /// Number of bytes queued.
    pub const fn len(&self) -> usize {
        self.count as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of queued bytes not yet sent.
    pub const fn remaining(&self) -> usize {
        (self.count - self.sent) as usize
    }

    /// The queued bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len()]
    }
}
