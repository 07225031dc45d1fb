//! Named handles to the bit fields of the register table.



use super::Register;



/// A field of a register, addressed by its position in the register table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
pub struct Field {
    /// Register that holds the field.
    pub register: Register,

    /// Index of the field within the register.
    pub index: u8,
}

impl Field {
    /// Static initializer.
    pub const fn new(register: Register, index: u8) -> Self {
        Self { register, index, }
    }
}



/// Primary role, 1 = PRX.
pub const CONFIG_PRIM_RX: Field = Field::new(Register::Config, 0);
/// Power up.
pub const CONFIG_PWR_UP: Field = Field::new(Register::Config, 1);
/// CRC length, 1 = 2 bytes.
pub const CONFIG_CRCO: Field = Field::new(Register::Config, 2);
/// CRC enable.
pub const CONFIG_EN_CRC: Field = Field::new(Register::Config, 3);
/// Masks the MAX_RT interrupt on the IRQ line.
pub const CONFIG_MASK_MAX_RT: Field = Field::new(Register::Config, 4);
/// Masks the TX_DS interrupt on the IRQ line.
pub const CONFIG_MASK_TX_DS: Field = Field::new(Register::Config, 5);
/// Masks the RX_DR interrupt on the IRQ line.
pub const CONFIG_MASK_RX_DR: Field = Field::new(Register::Config, 6);

/// Address width, 0b11 = 5 bytes.
pub const SETUP_AW_AW: Field = Field::new(Register::AddressWidth, 0);

/// Auto retransmit count.
pub const SETUP_RETR_ARC: Field = Field::new(Register::SetupRetries, 0);
/// Auto retransmit delay, (n+1) * 250 us.
pub const SETUP_RETR_ARD: Field = Field::new(Register::SetupRetries, 1);

/// RF channel.
pub const RF_CH_RF_CH: Field = Field::new(Register::RFChannel, 0);

/// LNA gain.
pub const RF_SETUP_LNA_HCURR: Field = Field::new(Register::RFSetup, 0);
/// Output power.
pub const RF_SETUP_RF_PWR: Field = Field::new(Register::RFSetup, 1);
/// Data rate, 1 = 2 Mbps.
pub const RF_SETUP_RF_DR: Field = Field::new(Register::RFSetup, 2);
/// Forces the PLL lock signal. Test only.
pub const RF_SETUP_PLL_LOCK: Field = Field::new(Register::RFSetup, 3);

/// TX FIFO full.
pub const STATUS_TX_FULL: Field = Field::new(Register::Status, 0);
/// Pipe of the payload at the head of the RX FIFO.
pub const STATUS_RX_P_NO: Field = Field::new(Register::Status, 1);
/// Maximum retransmissions reached. Write 1 to clear.
pub const STATUS_MAX_RT: Field = Field::new(Register::Status, 2);
/// Data sent. Write 1 to clear.
pub const STATUS_TX_DS: Field = Field::new(Register::Status, 3);
/// Data ready. Write 1 to clear.
pub const STATUS_RX_DR: Field = Field::new(Register::Status, 4);

/// Retransmissions of the last packet.
pub const OBSERVE_TX_ARC_CNT: Field = Field::new(Register::ObserveTX, 0);
/// Lost packets.
pub const OBSERVE_TX_PLOS_CNT: Field = Field::new(Register::ObserveTX, 1);

/// Carrier detect.
pub const CD_CD: Field = Field::new(Register::CarrierDetect, 0);

/// Static payload width of pipe 0.
pub const RX_PW_P0: Field = Field::new(Register::RX0PayloadWidth, 0);

/// RX FIFO empty.
pub const FIFO_STATUS_RX_EMPTY: Field = Field::new(Register::FIFOStatus, 0);
/// RX FIFO full.
pub const FIFO_STATUS_RX_FULL: Field = Field::new(Register::FIFOStatus, 1);
/// TX FIFO empty.
pub const FIFO_STATUS_TX_EMPTY: Field = Field::new(Register::FIFOStatus, 3);
/// TX FIFO full.
pub const FIFO_STATUS_TX_FULL: Field = Field::new(Register::FIFOStatus, 4);
/// Last TX payload is being reused.
pub const FIFO_STATUS_TX_REUSE: Field = Field::new(Register::FIFOStatus, 5);

/// Enables the no-ACK TX command.
pub const FEATURE_EN_DYN_ACK: Field = Field::new(Register::Features, 0);
/// Enables ACK payloads.
pub const FEATURE_EN_ACK_PAY: Field = Field::new(Register::Features, 1);
/// Enables dynamic payload width.
pub const FEATURE_EN_DPL: Field = Field::new(Register::Features, 2);



/// Per-pipe enable fields share the same layout: bit `n` is pipe `n`.
/// Valid for EN_AA, EN_RXADDR and DYNPD.
pub const fn pipe(register: Register, n: u8) -> Field {
    Field::new(register, n)
}
