//! Preset operating profiles.
//! Each profile is applied as a sequence of read-modify-write updates, so
//! fields a profile does not name keep their current value.



use super::*;



/// Number of data pipes of the device.
const PIPES: usize = 6;



impl<T: Transport> Driver<T> {
    /// Configures the device for the given profile and powers it up.
    pub fn preset(&mut self, preset: Preset, config: &Config) -> Result<(), DriverError<T>> {
        #[cfg(feature = "log")]
        defmt::debug!("Driver : Applying preset {} in mode {}", preset, config.mode);

        let esb = match preset {
            Preset::ShockBurst => 0,
            _ => 1,
        };

        let prx = config.mode as u8;

        // Auto acknowledge on pipe 0 only with Enhanced ShockBurst.
        self.pipes(Register::EnableAutoACK, esb)?;

        // Only pipe 0 receives.
        self.pipes(Register::EnabledRXAddress, 1)?;

        // CRC, role and interrupt masks.
        // Only the mask of the role's unused interrupt is set, the other is left as is.
        let (en, crco) = config.crc.fields();

        let mask = match config.mode {
            Mode::PRX => field::CONFIG_MASK_TX_DS,
            Mode::PTX => field::CONFIG_MASK_RX_DR,
        };

        self.apply(&[
            (field::CONFIG_PRIM_RX, prx),
            (field::CONFIG_CRCO, crco),
            (field::CONFIG_EN_CRC, en),
            (field::CONFIG_MASK_MAX_RT, 1),
            (mask, 1),
        ])?;

        // Auto retransmission.
        let (arc, ard) = match preset {
            Preset::ShockBurst => (0, 0),
            _ => (config.retries, config.delay),
        };

        self.apply(&[
            (field::SETUP_RETR_ARC, arc),
            (field::SETUP_RETR_ARD, ard),
        ])?;

        // 5 byte addresses.
        self.apply(&[(field::SETUP_AW_AW, 0b11)])?;

        let address = RegisterBuffer::from(config.address);
        self.address(Register::RX0Address, &address)?;
        self.address(Register::TXAddress, &address)?;

        // Dynamic payload width and ACK payloads.
        if preset == Preset::EnhancedShockBurstPayload {
            self.apply(&[
                (field::FEATURE_EN_ACK_PAY, 1),
                (field::FEATURE_EN_DPL, 1),
            ])?;

            self.pipes(Register::DynamicPayload, 1)?;
        }

        // Static payload width of the receiving pipe.
        if config.mode == Mode::PRX {
            self.apply(&[(field::RX_PW_P0, config.pw)])?;
        }

        // RF channel, data rate and gain.
        self.apply(&[(field::RF_CH_RF_CH, config.ch)])?;

        self.apply(&[
            (field::RF_SETUP_RF_PWR, config.gain.field()),
            (field::RF_SETUP_RF_DR, config.dr.field()),
        ])?;

        // Power up.
        self.apply(&[(field::CONFIG_PWR_UP, 1)])?;

        #[cfg(feature = "log")]
        defmt::debug!("Driver : Preset applied");

        Ok( () )
    }

    /// Read-modify-write of one register, mapping failures.
    fn apply(&mut self, fields: &[(Field, u8)]) -> Result<(), DriverError<T>> {
        self.update(fields).map_err(|hwe| (Error::FailedRegisterWrite, Some(hwe)))
    }

    /// Sets pipe 0 of a per-pipe enable register and clears the others.
    fn pipes(&mut self, reg: Register, p0: u8) -> Result<(), DriverError<T>> {
        let fields: [(Field, u8); PIPES] = core::array::from_fn(|n| {
            (field::pipe(reg, n as u8), if n == 0 { p0 } else { 0 })
        });

        self.apply(&fields)
    }

    /// Writes a full address register.
    fn address(&mut self, reg: Register, address: &RegisterBuffer) -> Result<(), DriverError<T>> {
        if let Err( hwe ) = self.write_register(reg, address) {
            return Err( (Error::FailedRegisterWrite, Some(hwe)) );
        }

        Ok( () )
    }
}
