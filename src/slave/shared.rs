//! Command processor shared between interrupt handlers and foreground code.



use core::cell::RefCell;

use embassy_sync::blocking_mutex::{
    Mutex,

    raw::RawMutex,
};

use super::*;



/// A `CommandProcessor` behind a blocking mutex.
/// Can be placed in a `static` with a `Sync` raw mutex (e.g.
/// `CriticalSectionRawMutex`) so the I2C interrupt handlers and the
/// application reach the same instance.
pub struct SharedProcessor<'a, M: RawMutex, C> {
    inner: Mutex<M, RefCell<CommandProcessor<'a, C>>>,
}

impl<'a, M: RawMutex, C> SharedProcessor<'a, M, C> {
    /// Static initializer.
    pub const fn new(processor: CommandProcessor<'a, C>) -> Self {
        Self { inner: Mutex::new( RefCell::new(processor) ), }
    }

    /// Runs `f` with exclusive access to the processor.
    /// Panics if called again from within `f`.
    pub fn lock<U>(&self, f: impl FnOnce(&mut CommandProcessor<'a, C>) -> U) -> U {
        self.inner.lock(|cell| f( &mut cell.borrow_mut() ))
    }

    /// Forwards a START condition.
    pub fn on_start(&self) {
        self.lock(|p| p.on_start())
    }

    /// Forwards a received byte.
    pub fn on_receive(&self, data: u8) {
        self.lock(|p| p.on_receive(data))
    }

    /// Forwards a byte request. Returns the byte to send.
    pub fn on_request(&self) -> u8 {
        self.lock(|p| p.on_request())
    }

    /// Forwards an event of a shared data interrupt.
    pub fn handle(&self, event: SlaveEvent) -> Option<u8> {
        self.lock(|p| p.handle(event))
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    fn store(value: &mut u8, args: &Args, response: &mut Response) {
        *value = args[0];

        response.clear();
        let _ = response.push(value.wrapping_add(1));
    }

    static COMMANDS: [SlaveCommand<u8>; 1] = [
        SlaveCommand::new(0x07, 1, store),
    ];

    #[test]
    fn events_reach_the_processor() {
        let shared: SharedProcessor<NoopRawMutex, u8> = SharedProcessor::new(
            CommandProcessor::new(0x10, &COMMANDS, 0)
        );

        shared.on_start();
        shared.on_receive(0x07);
        assert_eq!(shared.handle(SlaveEvent::Received(0x30)), None);

        assert_eq!(shared.lock(|p| *p.context()), 0x30);
        assert_eq!(shared.on_request(), 0x31);
        assert_eq!(shared.handle(SlaveEvent::Requested), Some(NO_DATA));

        // Foreground access to the response.
        shared.lock(|p| {
            p.clear_response();
            p.add_response_byte(0x99)
        }).unwrap();

        assert_eq!(shared.on_request(), 0x99);
    }
}
