//! Interrupt driven payload transfer.
//! Instead of spinning on the STATUS register these methods wait for the
//! active low IRQ line of the device before each read.
//! The interrupts being waited on must be unmasked in CONFIG.



use embedded_hal_async::digital::Wait;

use super::*;



impl<T: Transport> Driver<T> {
    /// Uploads a payload and waits on the IRQ line until it was either
    /// acknowledged or it reached the maximum number of retransmissions.
    /// Requires the TX_DS and MAX_RT interrupts to be unmasked.
    pub async fn send_irq<IRQ: Wait>(&mut self, payload: &Payload, irq: &mut IRQ) -> Result<usize, DriverError<T>> {
        let sent = self.send(payload)?;

        loop {
            Self::interrupt(irq).await?;

            let status = self.status()?;

            if let Some( outcome ) = self.sent(&status, sent)? {
                return outcome;
            }

            // Spurious wake up, let other tasks run.
            embassy_futures::yield_now().await;
        }
    }

    /// Waits on the IRQ line until data is ready and reads the payload.
    /// Same RX FIFO full behaviour as `receive`.
    /// Requires the RX_DR interrupt to be unmasked.
    pub async fn receive_irq<IRQ: Wait>(&mut self, payload: &mut Payload, irq: &mut IRQ) -> Result<usize, DriverError<T>> {
        let status = loop {
            Self::interrupt(irq).await?;

            let status = self.status()?;

            if self.flag(&status, field::STATUS_RX_DR) { break status }

            embassy_futures::yield_now().await;
        };

        let received = self.fetch(&status, payload)?;

        self.rxguard(received)
    }

    /// Waits for the IRQ line to go low.
    async fn interrupt<IRQ: Wait>(irq: &mut IRQ) -> Result<(), DriverError<T>> {
        if irq.wait_for_low().await.is_err() {
            #[cfg(feature = "log")]
            defmt::error!("IRQ Driver : Failed to wait on the IRQ line");

            return Err( (Error::InterruptWait, None) );
        }

        Ok( () )
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use mock::FakeRadio;

    use embassy_futures::block_on;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    const TX_DS: u8 = 0b0010_0000;
    const MAX_RT: u8 = 0b0001_0000;
    const RX_DR: u8 = 0b0100_0000;

    /// IRQ line that is always asserted, counting the waits.
    struct FakeIrq {
        waits: usize,
        broken: bool,
    }

    impl FakeIrq {
        fn new() -> Self {
            Self { waits: 0, broken: false, }
        }
    }

    impl ErrorType for FakeIrq {
        type Error = ErrorKind;
    }

    impl Wait for FakeIrq {
        async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
            Ok( () )
        }

        async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
            if self.broken { return Err( ErrorKind::Other ) }

            self.waits += 1;
            Ok( () )
        }

        async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
            Ok( () )
        }

        async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
            Ok( () )
        }

        async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
            Ok( () )
        }
    }

    fn driver() -> Driver<FakeRadio> {
        Driver::new( FakeRadio::new() ).unwrap()
    }

    #[test]
    fn send_waits_on_the_irq_line() {
        let mut radio = driver();
        let mut irq = FakeIrq::new();

        radio.transport.status_script.extend([0x0E, 0x0E, 0x0E | TX_DS]);

        let result = block_on( radio.send_irq(&Payload::from_slice(&[1, 2]), &mut irq) );

        assert_eq!(result, Ok(2));
        assert_eq!(irq.waits, 2);
        assert_eq!(radio.transport.tx, vec![vec![1, 2]]);
        assert_eq!(radio.transport.reg(Register::Status) & TX_DS, 0);
    }

    #[test]
    fn send_reports_max_retries() {
        let mut radio = driver();
        let mut irq = FakeIrq::new();

        radio.transport.status_script.extend([0x0E, 0x0E | MAX_RT]);

        let result = block_on( radio.send_irq(&Payload::from_slice(&[1]), &mut irq) );

        assert_eq!(result, Err((Error::MaxRetries, None)));
        assert_eq!(irq.waits, 1);
    }

    #[test]
    fn receive_waits_on_the_irq_line() {
        let mut radio = driver();
        let mut irq = FakeIrq::new();

        radio.transport.status_script.extend([0x0E, 0x0E | RX_DR]);
        radio.transport.rx = vec![7, 8, 9];

        let mut payload = Payload::new(3);

        assert_eq!(block_on( radio.receive_irq(&mut payload, &mut irq) ), Ok(3));
        assert_eq!(payload.as_slice(), &[7, 8, 9]);
        assert_eq!(irq.waits, 2);
        assert_eq!(radio.transport.reg(Register::Status) & RX_DR, 0);
    }

    #[test]
    fn broken_irq_line_is_reported() {
        let mut radio = driver();
        let mut irq = FakeIrq { waits: 0, broken: true, };

        let mut payload = Payload::new(3);

        assert_eq!(block_on( radio.receive_irq(&mut payload, &mut irq) ), Err((Error::InterruptWait, None)));
        assert_eq!(radio.transport.status_reads, 0);
    }
}
