//! Payload transfer through the TX / RX FIFOs.
//!
//! FIFO overflow is only visible through the polled status bits: a full TX
//! FIFO is flushed before anything is sent, a full RX FIFO is flushed after
//! the current payload (if any) has been read.



use super::*;



/// Byte clocked out while reading payload bytes.
const RX_FILLER: u8 = 0x00;



/// High level methods to move payloads in and out of the device.
impl<T: Transport> Driver<T> {
    /// Uploads a payload to the TX FIFO. Returns the number of bytes sent.
    /// If the TX FIFO is full it is flushed and `Error::TXFull` is returned
    /// without sending the payload.
    pub fn send(&mut self, payload: &Payload) -> Result<usize, DriverError<T>> {
        self.txguard()?;

        self.upload( Command::WritePayload as u8, payload )
    }

    /// Uploads a payload and waits until it was either acknowledged or it
    /// reached the maximum number of retransmissions.
    /// WARNING : This method spins forever if the device never raises TX_DS
    /// or MAX_RT.
    pub fn send_blocking(&mut self, payload: &Payload) -> Result<usize, DriverError<T>> {
        let sent = self.send(payload)?;

        loop {
            let status = self.status()?;

            if let Some( outcome ) = self.sent(&status, sent)? {
                return outcome;
            }
        }
    }

    /// Like `send_blocking` but gives up after `polls` reads of the status
    /// register with `Error::Timeout`. The payload stays in the TX FIFO.
    pub fn send_polled(&mut self, payload: &Payload, polls: usize) -> Result<usize, DriverError<T>> {
        let sent = self.send(payload)?;

        for _ in 0..polls {
            let status = self.status()?;

            if let Some( outcome ) = self.sent(&status, sent)? {
                return outcome;
            }
        }

        #[cfg(feature = "log")]
        defmt::warn!("TX Driver : No TX result after {} polls", polls);

        Err( (Error::Timeout, None) )
    }

    /// Reads a payload if the device signals data ready. Returns the number
    /// of bytes read (0 if there was no data).
    /// If the RX FIFO is full after the read it is flushed and
    /// `Error::RXFull` is returned; the payload read during this call (if
    /// any) is still valid, its size is carried by the error.
    pub fn receive(&mut self, payload: &mut Payload) -> Result<usize, DriverError<T>> {
        let status = self.status()?;

        let received = match self.flag(&status, field::STATUS_RX_DR) {
            true => self.fetch(&status, payload)?,
            false => 0,
        };

        self.rxguard(received)
    }

    /// Waits until the device signals data ready and reads the payload.
    /// Same RX FIFO full behaviour as `receive`.
    /// WARNING : This method spins forever if no data arrives.
    pub fn receive_blocking(&mut self, payload: &mut Payload) -> Result<usize, DriverError<T>> {
        let status = loop {
            let status = self.status()?;

            if self.flag(&status, field::STATUS_RX_DR) { break status }
        };

        let received = self.fetch(&status, payload)?;

        self.rxguard(received)
    }

    /// Like `receive_blocking` but gives up after `polls` reads of the status
    /// register with `Error::Timeout`.
    pub fn receive_polled(&mut self, payload: &mut Payload, polls: usize) -> Result<usize, DriverError<T>> {
        for _ in 0..polls {
            let status = self.status()?;

            if self.flag(&status, field::STATUS_RX_DR) {
                let received = self.fetch(&status, payload)?;

                return self.rxguard(received);
            }
        }

        Err( (Error::Timeout, None) )
    }

    /// Queues a payload to be sent with the next ACK on the given pipe.
    /// Only the low 3 bits of `pipe` are used.
    /// Same TX FIFO full behaviour as `send`.
    pub fn write_ack_payload(&mut self, payload: &Payload, pipe: u8) -> Result<usize, DriverError<T>> {
        self.txguard()?;

        self.upload( Command::WriteAckPayload.pipe(pipe), payload )
    }

    /// Reads a payload that arrived with an ACK.
    /// If the RX FIFO is full it is flushed and `Error::RXFull(0)` is returned
    /// without reading.
    pub fn read_ack_payload(&mut self, payload: &mut Payload) -> Result<usize, DriverError<T>> {
        let fifo = self.fifostatus()?;

        if self.flag(&fifo, field::FIFO_STATUS_RX_FULL) {
            #[cfg(feature = "log")]
            defmt::warn!("RX Driver : RX FIFO full, flushing");

            self.flush( Command::FlushRX )?;

            return Err( (Error::RXFull(0), None) );
        }

        self.download(payload)
    }
}


/// Internal steps shared by the transfer methods.
impl<T: Transport> Driver<T> {
    /// Flushes the TX FIFO and fails if it is full.
    fn txguard(&mut self) -> Result<(), DriverError<T>> {
        let status = self.status()?;

        if self.flag(&status, field::STATUS_TX_FULL) {
            #[cfg(feature = "log")]
            defmt::warn!("TX Driver : TX FIFO full, flushing");

            self.flush( Command::FlushTX )?;

            return Err( (Error::TXFull, None) );
        }

        Ok( () )
    }

    /// Flushes the RX FIFO and fails if it is full.
    /// `received` is the number of bytes already read during this call.
    pub(crate) fn rxguard(&mut self, received: usize) -> Result<usize, DriverError<T>> {
        let fifo = self.fifostatus()?;

        if self.flag(&fifo, field::FIFO_STATUS_RX_FULL) {
            #[cfg(feature = "log")]
            defmt::warn!("RX Driver : RX FIFO full after {} bytes, flushing", received);

            self.flush( Command::FlushRX )?;

            return Err( (Error::RXFull(received as u8), None) );
        }

        Ok( received )
    }

    /// Downloads a payload and clears RX_DR by writing back `status`.
    pub(crate) fn fetch(&mut self, status: &RegisterBuffer, payload: &mut Payload) -> Result<usize, DriverError<T>> {
        let received = self.download(payload)?;

        self.clearirqs(status)?;

        #[cfg(feature = "log")]
        defmt::debug!("RX Driver : Received {} bytes", received);

        Ok( received )
    }

    /// Checks a STATUS value for the end of a transmission.
    /// Returns `None` while the transmission is pending. Once it ended the
    /// latched flags are cleared and the outcome is returned.
    pub(crate) fn sent(&mut self, status: &RegisterBuffer, sent: usize) -> Result<Option<Result<usize, DriverError<T>>>, DriverError<T>> {
        let outcome = if self.flag(status, field::STATUS_MAX_RT) {
            #[cfg(feature = "log")]
            defmt::warn!("TX Driver : Maximum retransmissions reached");

            Err( (Error::MaxRetries, None) )
        } else if self.flag(status, field::STATUS_TX_DS) {
            #[cfg(feature = "log")]
            defmt::debug!("TX Driver : Sent {} bytes", sent);

            Ok( sent )
        } else {
            return Ok( None );
        };

        // Clear TX_DS / MAX_RT.
        self.clearirqs(status)?;

        Ok( Some(outcome) )
    }

    /// Sends a write command followed by the payload bytes.
    fn upload(&mut self, cmd: u8, payload: &Payload) -> Result<usize, DriverError<T>> {
        let result = self.transport.transaction(|t| {
            t.exchange( cmd )?;

            for byte in payload.as_slice() {
                t.exchange( *byte )?;
            }

            Ok( () )
        });

        if let Err( hwe ) = result {
            return Err( (Error::FailedPacketUpload, Some(hwe)) );
        }

        Ok( payload.size as usize )
    }

    /// Sends the read payload command and clocks in `payload.size` bytes.
    fn download(&mut self, payload: &mut Payload) -> Result<usize, DriverError<T>> {
        let result = self.transport.transaction(|t| {
            t.exchange( Command::ReadPayload as u8 )?;

            for byte in payload.as_mut_slice() {
                *byte = t.exchange( RX_FILLER )?;
            }

            Ok( () )
        });

        if let Err( hwe ) = result {
            return Err( (Error::FailedPacketDownload, Some(hwe)) );
        }

        Ok( payload.size as usize )
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use mock::FakeRadio;

    const TX_FULL: u8 = 0b0000_0001;
    const MAX_RT: u8 = 0b0001_0000;
    const TX_DS: u8 = 0b0010_0000;
    const RX_DR: u8 = 0b0100_0000;

    const FIFO_RX_FULL: u8 = 0b0000_0010;

    fn driver() -> Driver<FakeRadio> {
        Driver::new( FakeRadio::new() ).unwrap()
    }

    #[test]
    fn send_uploads_the_payload() {
        let mut radio = driver();

        assert_eq!(radio.send( &Payload::from_slice(&[1, 2, 3]) ), Ok(3));
        assert_eq!(radio.transport.tx, vec![vec![1, 2, 3]]);
        assert_eq!(radio.transport.commands, vec![0x07, 0xA0]);
    }

    #[test]
    fn send_on_full_fifo_flushes_instead() {
        let mut radio = driver();
        radio.transport.set_reg(Register::Status, 0b0000_1111);

        assert_eq!(radio.send( &Payload::from_slice(&[1, 2, 3]) ), Err((Error::TXFull, None)));
        assert!(radio.transport.tx.is_empty());
        assert_eq!(radio.transport.commands, vec![0x07, 0xE1]);
    }

    #[test]
    fn send_blocking_waits_for_tx_ds() {
        let mut radio = driver();
        radio.transport.status_script.extend([0x0E, 0x0E, 0x0E, 0x0E | TX_DS]);

        assert_eq!(radio.send_blocking( &Payload::from_slice(&[9; 4]) ), Ok(4));

        // One check before sending, two pending polls and the final one.
        assert_eq!(radio.transport.status_reads, 4);
        assert_eq!(radio.transport.reg(Register::Status) & TX_DS, 0);
        assert_eq!(radio.transport.count(0x27), 1);
    }

    #[test]
    fn send_blocking_reports_max_retries() {
        let mut radio = driver();
        radio.transport.status_script.extend([0x0E, 0x0E | MAX_RT]);

        assert_eq!(radio.send_blocking( &Payload::from_slice(&[9]) ), Err((Error::MaxRetries, None)));
        assert_eq!(radio.transport.reg(Register::Status) & MAX_RT, 0);
        assert_eq!(radio.transport.count(0x27), 1);
    }

    #[test]
    fn send_blocking_on_full_fifo_sends_nothing() {
        let mut radio = driver();
        radio.transport.set_reg(Register::Status, 0x0E | TX_FULL);

        assert_eq!(radio.send_blocking( &Payload::from_slice(&[9]) ), Err((Error::TXFull, None)));
        assert!(radio.transport.tx.is_empty());
        assert_eq!(radio.transport.status_reads, 1);
    }

    #[test]
    fn send_polled_times_out() {
        let mut radio = driver();

        assert_eq!(radio.send_polled( &Payload::from_slice(&[9]), 3 ), Err((Error::Timeout, None)));
        assert_eq!(radio.transport.status_reads, 4);
        assert_eq!(radio.transport.tx.len(), 1);
    }

    #[test]
    fn receive_without_data_reads_nothing() {
        let mut radio = driver();
        let mut payload = Payload::new(4);

        assert_eq!(radio.receive(&mut payload), Ok(0));
        assert_eq!(radio.transport.count(0x61), 0);
        assert_eq!(payload.as_slice(), &[0; 4]);
    }

    #[test]
    fn receive_reads_and_clears_rx_dr() {
        let mut radio = driver();
        radio.transport.set_reg(Register::Status, 0x0E | RX_DR);
        radio.transport.rx = vec![5, 6, 7, 8];

        let mut payload = Payload::new(4);

        assert_eq!(radio.receive(&mut payload), Ok(4));
        assert_eq!(payload.as_slice(), &[5, 6, 7, 8]);
        assert_eq!(radio.transport.reg(Register::Status) & RX_DR, 0);
        assert_eq!(radio.transport.filler, vec![RX_FILLER; 4]);
    }

    #[test]
    fn receive_reports_full_fifo_after_reading() {
        let mut radio = driver();
        radio.transport.set_reg(Register::Status, 0x0E | RX_DR);
        radio.transport.set_reg(Register::FIFOStatus, FIFO_RX_FULL);
        radio.transport.rx = vec![1, 2];

        let mut payload = Payload::new(2);

        assert_eq!(radio.receive(&mut payload), Err((Error::RXFull(2), None)));
        assert_eq!(payload.as_slice(), &[1, 2]);
        assert_eq!(radio.transport.count(0xE2), 1);
        assert_eq!(radio.transport.reg(Register::FIFOStatus) & FIFO_RX_FULL, 0);
    }

    #[test]
    fn receive_reports_full_fifo_without_data() {
        let mut radio = driver();
        radio.transport.set_reg(Register::FIFOStatus, FIFO_RX_FULL);

        let mut payload = Payload::new(2);

        assert_eq!(radio.receive(&mut payload), Err((Error::RXFull(0), None)));
        assert_eq!(radio.transport.count(0x61), 0);
        assert_eq!(radio.transport.count(0xE2), 1);
    }

    #[test]
    fn receive_blocking_waits_for_rx_dr() {
        let mut radio = driver();
        radio.transport.status_script.extend([0x0E, 0x0E, 0x0E | RX_DR]);
        radio.transport.rx = vec![42];

        let mut payload = Payload::new(1);

        assert_eq!(radio.receive_blocking(&mut payload), Ok(1));
        assert_eq!(payload.as_slice(), &[42]);
        assert_eq!(radio.transport.status_reads, 3);
    }

    #[test]
    fn receive_blocking_reports_full_fifo_after_reading() {
        let mut radio = driver();
        radio.transport.status_script.extend([0x0E, 0x0E | RX_DR]);
        radio.transport.set_reg(Register::FIFOStatus, FIFO_RX_FULL);
        radio.transport.rx = vec![4, 5, 6];

        let mut payload = Payload::new(3);

        assert_eq!(radio.receive_blocking(&mut payload), Err((Error::RXFull(3), None)));
        assert_eq!(payload.as_slice(), &[4, 5, 6]);
        assert_eq!(radio.transport.count(0xE2), 1);
        assert_eq!(radio.transport.reg(Register::Status) & RX_DR, 0);
    }

    #[test]
    fn receive_polled_times_out() {
        let mut radio = driver();
        let mut payload = Payload::new(1);

        assert_eq!(radio.receive_polled(&mut payload, 2), Err((Error::Timeout, None)));
        assert_eq!(radio.transport.status_reads, 2);
    }

    #[test]
    fn ack_payload_goes_to_pipe() {
        let mut radio = driver();

        assert_eq!(radio.write_ack_payload( &Payload::from_slice(&[3, 4]), 2 ), Ok(2));
        assert_eq!(radio.transport.ack, vec![(2, vec![3, 4])]);
        assert_eq!(radio.transport.count(0xAA), 1);
    }

    #[test]
    fn ack_payload_on_full_fifo_flushes_instead() {
        let mut radio = driver();
        radio.transport.set_reg(Register::Status, 0x0E | TX_FULL);

        assert_eq!(radio.write_ack_payload( &Payload::from_slice(&[3]), 0 ), Err((Error::TXFull, None)));
        assert!(radio.transport.ack.is_empty());
        assert_eq!(radio.transport.count(0xE1), 1);
    }

    #[test]
    fn read_ack_payload_checks_fifo_first() {
        let mut radio = driver();
        radio.transport.set_reg(Register::FIFOStatus, FIFO_RX_FULL);
        radio.transport.rx = vec![1];

        let mut payload = Payload::new(1);

        assert_eq!(radio.read_ack_payload(&mut payload), Err((Error::RXFull(0), None)));
        assert_eq!(radio.transport.count(0x61), 0);

        assert_eq!(radio.read_ack_payload(&mut payload), Ok(1));
        assert_eq!(payload.as_slice(), &[1]);
    }
}
