//! Static layout of every NRF24L01 register.
//! Fields are listed LSB first, starting at bit 0 of byte 0.



/// A named bit field inside a register.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDef {
    /// Name of the field as given in the datasheet.
    pub name: &'static str,

    /// Width of the field in bits (1 to 8).
    pub size: u8,

    /// Whether the host may change the field.
    pub writable: bool,
}

impl FieldDef {
    /// Static initializer.
    /// `size` must be 1 to 8 and the field must not cross a byte boundary;
    /// the codec does not check either.
    pub const fn new(name: &'static str, size: u8, writable: bool) -> Self {
        Self { name, size, writable, }
    }
}



/// Layout of a single register.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegisterDef {
    /// Name of the register as given in the datasheet.
    pub name: &'static str,

    /// Size of the register in bytes. Reserved addresses have size 0.
    pub size: u8,

    /// Ordered fields of the register.
    pub fields: &'static [FieldDef],
}

impl RegisterDef {
    /// Static initializer.
    pub const fn new(name: &'static str, size: u8, fields: &'static [FieldDef]) -> Self {
        Self { name, size, fields, }
    }

    /// Returns `true` if the address is not backed by a register.
    pub const fn reserved(&self) -> bool {
        self.size == 0
    }
}



const fn rw(name: &'static str, size: u8) -> FieldDef {
    FieldDef::new(name, size, true)
}

const fn ro(name: &'static str, size: u8) -> FieldDef {
    FieldDef::new(name, size, false)
}



static CONFIG: [FieldDef; 7] = [
    rw("PRIM_RX", 1),
    rw("PWR_UP", 1),
    rw("CRCO", 1),
    rw("EN_CRC", 1),
    rw("MASK_MAX_RT", 1),
    rw("MASK_TX_DS", 1),
    rw("MASK_RX_DR", 1),
];

static EN_AA: [FieldDef; 6] = [
    rw("ENAA_P0", 1),
    rw("ENAA_P1", 1),
    rw("ENAA_P2", 1),
    rw("ENAA_P3", 1),
    rw("ENAA_P4", 1),
    rw("ENAA_P5", 1),
];

static EN_RXADDR: [FieldDef; 6] = [
    rw("ERX_P0", 1),
    rw("ERX_P1", 1),
    rw("ERX_P2", 1),
    rw("ERX_P3", 1),
    rw("ERX_P4", 1),
    rw("ERX_P5", 1),
];

static SETUP_AW: [FieldDef; 1] = [
    rw("AW", 2),
];

static SETUP_RETR: [FieldDef; 2] = [
    rw("ARC", 4),
    rw("ARD", 4),
];

static RF_CH: [FieldDef; 1] = [
    rw("RF_CH", 7),
];

static RF_SETUP: [FieldDef; 4] = [
    rw("LNA_HCURR", 1),
    rw("RF_PWR", 2),
    rw("RF_DR", 1),
    rw("PLL_LOCK", 1),
];

static STATUS: [FieldDef; 5] = [
    ro("TX_FULL", 1),
    ro("RX_P_NO", 3),
    rw("MAX_RT", 1),
    rw("TX_DS", 1),
    rw("RX_DR", 1),
];

static OBSERVE_TX: [FieldDef; 2] = [
    ro("ARC_CNT", 4),
    ro("PLOS_CNT", 4),
];

static CD: [FieldDef; 1] = [
    ro("CD", 1),
];

static ADDRESS: [FieldDef; 5] = [
    rw("A", 8),
    rw("B", 8),
    rw("C", 8),
    rw("D", 8),
    rw("E", 8),
];

static RX_PW: [FieldDef; 1] = [
    rw("RX_PW", 6),
];

static FIFO_STATUS: [FieldDef; 6] = [
    ro("RX_EMPTY", 1),
    ro("RX_FULL", 1),
    ro("RESERVED", 2),
    ro("TX_EMPTY", 1),
    ro("TX_FULL", 1),
    ro("TX_REUSE", 1),
];

static DYNPD: [FieldDef; 6] = [
    rw("DPL_P0", 1),
    rw("DPL_P1", 1),
    rw("DPL_P2", 1),
    rw("DPL_P3", 1),
    rw("DPL_P4", 1),
    rw("DPL_P5", 1),
];

static FEATURE: [FieldDef; 3] = [
    rw("EN_DYN_ACK", 1),
    rw("EN_ACK_PAY", 1),
    rw("EN_DPL", 1),
];



/// Number of addresses in the register file, reserved ones included.
pub const REGISTER_COUNT: usize = 30;

/// Largest register size in bytes.
pub const MAX_REGISTER_SIZE: usize = 5;

/// Register file of NRF24L01 devices, indexed by register address.
pub static REGISTERS: [RegisterDef; REGISTER_COUNT] = [
    RegisterDef::new("CONFIG", 1, &CONFIG),
    RegisterDef::new("EN_AA", 1, &EN_AA),
    RegisterDef::new("EN_RXADDR", 1, &EN_RXADDR),
    RegisterDef::new("SETUP_AW", 1, &SETUP_AW),
    RegisterDef::new("SETUP_RETR", 1, &SETUP_RETR),
    RegisterDef::new("RF_CH", 1, &RF_CH),
    RegisterDef::new("RF_SETUP", 1, &RF_SETUP),
    RegisterDef::new("STATUS", 1, &STATUS),
    RegisterDef::new("OBSERVE_TX", 1, &OBSERVE_TX),
    RegisterDef::new("CD", 1, &CD),
    RegisterDef::new("RX_ADDR_P0", 5, &ADDRESS),
    RegisterDef::new("RX_ADDR_P1", 5, &ADDRESS),
    RegisterDef::new("RX_ADDR_P2", 5, &ADDRESS),
    RegisterDef::new("RX_ADDR_P3", 5, &ADDRESS),
    RegisterDef::new("RX_ADDR_P4", 5, &ADDRESS),
    RegisterDef::new("RX_ADDR_P5", 5, &ADDRESS),
    RegisterDef::new("TX_ADDR", 5, &ADDRESS),
    RegisterDef::new("RX_PW_P0", 1, &RX_PW),
    RegisterDef::new("RX_PW_P1", 1, &RX_PW),
    RegisterDef::new("RX_PW_P2", 1, &RX_PW),
    RegisterDef::new("RX_PW_P3", 1, &RX_PW),
    RegisterDef::new("RX_PW_P4", 1, &RX_PW),
    RegisterDef::new("RX_PW_P5", 1, &RX_PW),
    RegisterDef::new("FIFO_STATUS", 1, &FIFO_STATUS),
    RegisterDef::new("NA", 0, &[]),
    RegisterDef::new("NA", 0, &[]),
    RegisterDef::new("NA", 0, &[]),
    RegisterDef::new("NA", 0, &[]),
    RegisterDef::new("DYNPD", 1, &DYNPD),
    RegisterDef::new("FEATURE", 1, &FEATURE),
];
