//! In-memory NRF24L01 used by the unit tests.
//! Simulates the register file, the payload commands and the write-1-to-clear
//! STATUS flags behind the `Transport` trait.



use std::collections::VecDeque;

use core::convert::Infallible;

use crate::{
    common::*,
    transport::Transport,
};



pub struct FakeRadio {
    /// Register file.
    pub regs: [[u8; MAX_REGISTER_SIZE]; REGISTER_COUNT],

    /// Bytes served by the next R_RX_PAYLOAD command.
    pub rx: Vec<u8>,

    /// Filler bytes clocked out while reading payloads.
    pub filler: Vec<u8>,

    /// Payloads written with W_TX_PAYLOAD.
    pub tx: Vec<Vec<u8>>,

    /// ACK payloads written with W_ACK_PAYLOAD, with their pipe.
    pub ack: Vec<(u8, Vec<u8>)>,

    /// First byte of every transaction.
    pub commands: Vec<u8>,

    /// STATUS values loaded on successive STATUS reads.
    pub status_script: VecDeque<u8>,

    /// Number of STATUS reads.
    pub status_reads: usize,

    /// Chip select state.
    pub selected: bool,

    /// Command of the current transaction.
    cmd: Option<u8>,

    /// Byte position inside the current transaction.
    pos: usize,

    /// Bytes received in the current transaction.
    current: Vec<u8>,
}

impl FakeRadio {
    /// Creates a device in its reset state.
    pub fn new() -> Self {
        let mut regs = [[0u8; MAX_REGISTER_SIZE]; REGISTER_COUNT];

        regs[Register::Config.index()][0] = 0b0000_1000;
        regs[Register::EnableAutoACK.index()][0] = 0b0011_1111;
        regs[Register::EnabledRXAddress.index()][0] = 0b0000_0011;
        regs[Register::AddressWidth.index()][0] = 0b0000_0011;
        regs[Register::SetupRetries.index()][0] = 0b0000_0011;
        regs[Register::RFChannel.index()][0] = 0b0000_0010;
        regs[Register::RFSetup.index()][0] = 0b0000_1111;
        regs[Register::Status.index()][0] = 0b0000_1110;
        regs[Register::RX0Address.index()] = [0xE7; 5];
        regs[Register::TXAddress.index()] = [0xE7; 5];
        regs[Register::FIFOStatus.index()][0] = 0b0001_0001;

        Self {
            regs,
            rx: Vec::new(),
            filler: Vec::new(),
            tx: Vec::new(),
            ack: Vec::new(),
            commands: Vec::new(),
            status_script: VecDeque::new(),
            status_reads: 0,
            selected: false,
            cmd: None,
            pos: 0,
            current: Vec::new(),
        }
    }

    /// Current value of a single byte register.
    pub fn reg(&self, r: Register) -> u8 {
        self.regs[r.index()][0]
    }

    /// Sets a single byte register.
    pub fn set_reg(&mut self, r: Register, v: u8) {
        self.regs[r.index()][0] = v;
    }

    /// Number of transactions that started with the given command byte.
    pub fn count(&self, cmd: u8) -> usize {
        self.commands.iter().filter(|&&c| c == cmd).count()
    }

    fn status(&self) -> u8 {
        self.reg(Register::Status)
    }

    fn start(&mut self, cmd: u8) {
        self.cmd = Some(cmd);
        self.pos = 0;
        self.current.clear();
        self.commands.push(cmd);

        match cmd {
            // FLUSH_TX : Clear both TX full flags, TX FIFO empty.
            0xE1 => {
                self.regs[Register::Status.index()][0] &= !0b0000_0001;
                self.regs[Register::FIFOStatus.index()][0] &= !0b0010_0000;
                self.regs[Register::FIFOStatus.index()][0] |= 0b0001_0000;
            },

            // FLUSH_RX : Clear RX full flag, RX FIFO empty.
            0xE2 => {
                self.regs[Register::FIFOStatus.index()][0] &= !0b0000_0010;
                self.regs[Register::FIFOStatus.index()][0] |= 0b0000_0001;
            },

            _ => (),
        }
    }
}

impl Transport for FakeRadio {
    type Error = Infallible;

    fn select(&mut self) -> Result<(), Self::Error> {
        assert!(!self.selected, "nested chip select");
        self.selected = true;

        Ok( () )
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        assert!(self.selected, "deselect without select");
        self.selected = false;

        match self.cmd.take() {
            Some(0xA0) => self.tx.push(core::mem::take(&mut self.current)),
            Some(c @ 0xA8..=0xAF) => self.ack.push((c & 0x07, core::mem::take(&mut self.current))),
            _ => (),
        }

        Ok( () )
    }

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        assert!(self.selected, "exchange outside a transaction");

        // The first byte is the command, the device answers with STATUS.
        let cmd = match self.cmd {
            None => {
                self.start(byte);
                return Ok( self.status() );
            },

            Some(c) => c,
        };

        let pos = self.pos;
        self.pos += 1;

        let reply = match cmd {
            // R_REGISTER
            0x00..=0x1F => {
                let reg = cmd as usize;

                if pos == 0 && reg == Register::Status.index() {
                    self.status_reads += 1;

                    if let Some(next) = self.status_script.pop_front() {
                        self.regs[reg][0] = next;
                    }
                }

                self.regs[reg][pos]
            },

            // W_REGISTER
            0x20..=0x3F => {
                let reg = (cmd & 0x1F) as usize;

                if reg == Register::Status.index() {
                    // Interrupt flags are cleared by writing 1.
                    self.regs[reg][0] &= !(byte & 0b0111_0000);
                } else {
                    self.regs[reg][pos] = byte;
                }

                0
            },

            // R_RX_PAYLOAD
            0x61 => {
                self.filler.push(byte);
                self.rx.get(pos).copied().unwrap_or(0)
            },

            // W_TX_PAYLOAD / W_ACK_PAYLOAD
            0xA0 | 0xA8..=0xAF => {
                self.current.push(byte);
                0
            },

            _ => 0,
        };

        Ok( reply )
    }
}
