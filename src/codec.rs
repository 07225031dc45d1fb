//! Bit field packing over register buffers.
//!
//! A `RegisterMap` describes the layout of a register file. Fields are packed
//! LSB first from bit 0 of byte 0 and must not cross a byte boundary; the map
//! does not check this, a field that crosses a byte reads and writes garbage.
//! Out of range register or field indices panic on the table lookup.



use crate::common::*;



/// Default register map of NRF24L01 devices.
pub static NRF24L01_MAP: RegisterMap = RegisterMap::new(&REGISTERS);



/// Handle to a register layout table.
#[derive(Clone, Copy, Debug)]
pub struct RegisterMap {
    /// Register layouts indexed by address.
    registers: &'static [RegisterDef],
}

impl RegisterMap {
    /// Creates a map over the given table.
    pub const fn new(registers: &'static [RegisterDef]) -> Self {
        Self { registers, }
    }

    /// All registers in the map.
    pub fn registers(&self) -> &'static [RegisterDef] {
        self.registers
    }

    /// Layout of the register at the given address.
    pub fn def(&self, reg: u8) -> &'static RegisterDef {
        &self.registers[reg as usize]
    }

    /// Size in bytes of the register at the given address.
    pub fn size(&self, reg: u8) -> usize {
        self.def(reg).size as usize
    }

    /// Returns `true` if the host may change the given field.
    pub fn writable(&self, reg: u8, field: u8) -> bool {
        self.def(reg).fields[field as usize].writable
    }

    /// Byte and bit offset where the given field starts.
    pub fn offset(&self, reg: u8, field: u8) -> (usize, u8) {
        let mut byte = 0;
        let mut bit = 0;

        for f in &self.def(reg).fields[..field as usize] {
            bit += f.size;

            if bit >= 8 {
                byte += 1;
                bit -= 8;
            }
        }

        (byte, bit)
    }

    /// Reads a field value out of the buffer.
    pub fn get(&self, reg: u8, field: u8, buf: &RegisterBuffer) -> u8 {
        // Locate the field.
        let (byte, bit) = self.offset(reg, field);
        let mask = Self::mask( self.def(reg).fields[field as usize].size );

        (buf.data[byte] >> bit) & mask
    }

    /// Writes a field value into the buffer.
    /// Bits of `value` wider than the field are dropped.
    pub fn set(&self, reg: u8, field: u8, buf: &mut RegisterBuffer, value: u8) {
        // Locate the field.
        let (byte, bit) = self.offset(reg, field);
        let mask = Self::mask( self.def(reg).fields[field as usize].size ) << bit;

        // Clear the field and insert the new value.
        buf.data[byte] &= !mask;
        buf.data[byte] |= (value << bit) & mask;
    }

    /// Reads the field named by the handle.
    pub fn field(&self, field: Field, buf: &RegisterBuffer) -> u8 {
        self.get(field.register as u8, field.index, buf)
    }

    /// Writes the field named by the handle.
    pub fn set_field(&self, field: Field, buf: &mut RegisterBuffer, value: u8) {
        self.set(field.register as u8, field.index, buf, value)
    }

    /// Mask of the low `size` bits. `size` is 1 to 8.
    const fn mask(size: u8) -> u8 {
        0xFF >> (8 - size)
    }
}
