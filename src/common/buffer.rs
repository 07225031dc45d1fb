//! Fixed capacity byte buffers exchanged with the device.



use super::MAX_REGISTER_SIZE;



/// Maximum size of a radio payload in bytes.
pub const MAX_PAYLOAD_SIZE: usize = 32;



/// Raw contents of one register.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RegisterBuffer {
    /// Register bytes, LSB first.
    pub data: [u8; MAX_REGISTER_SIZE],

    /// Number of valid bytes in `data`.
    pub size: u8,
}

impl RegisterBuffer {
    /// Creates an empty, zeroed buffer.
    pub const fn new() -> Self {
        Self { data: [0u8; MAX_REGISTER_SIZE], size: 0, }
    }

    /// Creates a buffer holding the given bytes.
    /// Bytes beyond the buffer capacity are discarded.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buf = Self::new();

        let n = bytes.len().min(MAX_REGISTER_SIZE);
        buf.data[..n].copy_from_slice(&bytes[..n]);
        buf.size = n as u8;

        buf
    }

    /// The valid bytes of the buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.size as usize]
    }
}

impl From<[u8; MAX_REGISTER_SIZE]> for RegisterBuffer {
    fn from(data: [u8; MAX_REGISTER_SIZE]) -> Self {
        Self { data, size: MAX_REGISTER_SIZE as u8, }
    }
}



/// A radio payload.
/// The `size` sets how many bytes are clocked in or out on each transfer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Payload {
    /// Payload bytes.
    pub data: [u8; MAX_PAYLOAD_SIZE],

    /// Number of bytes used.
    pub size: u8,
}

impl Default for Payload {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Payload {
    /// Creates a zeroed payload of the given size (clamped to 32 bytes).
    pub const fn new(size: u8) -> Self {
        let size = if size as usize > MAX_PAYLOAD_SIZE { MAX_PAYLOAD_SIZE as u8 } else { size };
        Self { data: [0u8; MAX_PAYLOAD_SIZE], size, }
    }

    /// Creates a payload holding the given bytes.
    /// Bytes beyond 32 are discarded.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let n = bytes.len().min(MAX_PAYLOAD_SIZE);

        let mut payload = Self::new(n as u8);
        payload.data[..n].copy_from_slice(&bytes[..n]);

        payload
    }

    /// The used bytes of the payload.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.size as usize]
    }

    /// The used bytes of the payload, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.size as usize]
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_buffer_truncates() {
        let buf = RegisterBuffer::from_slice(&[1, 2, 3, 4, 5, 6, 7]);

        assert_eq!(buf.size, 5);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn payload_size_is_clamped() {
        assert_eq!(Payload::new(40).size, 32);
        assert_eq!(Payload::from_slice(&[7u8; 33]).as_slice(), &[7u8; 32]);
    }
}
