//! I2C slave command processor.
//!
//! The master writes a command code followed by its arguments, with no framing
//! other than the I2C START condition. The processor rebuilds the message from
//! the byte-by-byte receive interrupts, calls the handler of the command once
//! all of its arguments arrived and serves the response the handler queued on
//! the next read transaction.
//!
//! Unknown command codes and bytes beyond the expected arguments are dropped
//! silently. The master reads `NO_DATA` past the end of the response.



mod buffer;

#[cfg(feature = "shared")]
mod shared;



pub use buffer::*;

#[cfg(feature = "shared")]
pub use shared::*;



pub(self) use super::ResponseError;



/// Maximum number of arguments of a command.
pub const MAX_ARGS: usize = 5;

/// Capacity of the response buffer.
pub const MAX_RESPONSE: usize = 25;

/// Byte sent to the master once the response is exhausted.
pub const NO_DATA: u8 = 0xFF;



/// Command handler.
/// Runs in interrupt context: it must be short and must not block. It is
/// expected to clear the response before queueing new bytes.
pub type Handler<C> = fn(&mut C, &Args, &mut Response);



/// Entry of the command table.
pub struct SlaveCommand<C> {
    /// Command code, the first byte after START.
    pub(crate) code: u8,

    /// Number of argument bytes following the code.
    pub(crate) args: u8,

    /// Function called once all arguments arrived.
    pub(crate) handler: Handler<C>,
}

impl<C> SlaveCommand<C> {
    /// Static initializer. The argument count is clamped to `MAX_ARGS`.
    pub const fn new(code: u8, args: u8, handler: Handler<C>) -> Self {
        let args = if args as usize > MAX_ARGS { MAX_ARGS as u8 } else { args };

        Self { code, args, handler, }
    }

    /// Command code.
    pub const fn code(&self) -> u8 {
        self.code
    }

    /// Number of expected arguments.
    pub const fn args(&self) -> u8 {
        self.args
    }
}

impl<C> Clone for SlaveCommand<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for SlaveCommand<C> {}



/// Progress of the current transaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
enum Phase {
    /// Waiting for a command code.
    Idle,

    /// Collecting the arguments of the command at this table index.
    Collecting( usize ),

    /// The handler ran. Further bytes are dropped until the next START.
    Dispatched,
}



/// Interrupt events of an I2C slave peripheral.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "log", derive(defmt::Format))]
pub enum SlaveEvent {
    /// START condition addressed to this slave.
    Start,

    /// The master wrote a byte.
    Received( u8 ),

    /// The master requests a byte.
    Requested,
}

/// Receiver of I2C slave interrupt events.
pub trait SlaveEvents {
    /// START condition.
    fn on_start(&mut self);

    /// A byte was received.
    fn on_receive(&mut self, data: u8);

    /// A byte is requested. Returns the byte to send.
    fn on_request(&mut self) -> u8;

    /// Dispatches an event. Returns the byte to send on `Requested`.
    /// Meant for peripherals that share one data interrupt between receive
    /// and transmit.
    fn handle(&mut self, event: SlaveEvent) -> Option<u8> {
        match event {
            SlaveEvent::Start => self.on_start(),
            SlaveEvent::Received( data ) => self.on_receive(data),
            SlaveEvent::Requested => return Some( self.on_request() ),
        }

        None
    }
}

/// I2C slave peripheral that can be bound to an address.
pub trait SlavePort {
    type Error;

    /// Sets the slave address and starts answering to it.
    fn listen(&mut self, address: u8) -> Result<(), Self::Error>;
}



/// Command processor of an I2C slave.
/// Owns the application context `C` handed to the command handlers.
pub struct CommandProcessor<'a, C> {
    /// Slave address.
    address: u8,

    /// Command table.
    commands: &'a [SlaveCommand<C>],

    /// Application context.
    context: C,

    /// Arguments of the current command.
    args: Args,

    /// Response of the last command.
    response: Response,

    /// Transaction progress.
    phase: Phase,
}

impl<'a, C> CommandProcessor<'a, C> {
    /// Static initializer.
    pub const fn new(address: u8, commands: &'a [SlaveCommand<C>], context: C) -> Self {
        Self {
            address,
            commands,
            context,
            args: Args::new(),
            response: Response::new(),
            phase: Phase::Idle,
        }
    }

    /// Binds the peripheral to the slave address.
    pub fn init<P: SlavePort>(&mut self, port: &mut P) -> Result<(), P::Error> {
        port.listen(self.address)?;

        self.args.clear();
        self.phase = Phase::Idle;

        #[cfg(feature = "log")]
        defmt::debug!("I2C Slave : Listening on {=u8:#04x} with {=usize} commands", self.address, self.commands.len());

        Ok( () )
    }

    /// Slave address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Drops the response.
    pub fn clear_response(&mut self) {
        self.response.clear()
    }

    /// Queues a response byte.
    pub fn add_response_byte(&mut self, byte: u8) -> Result<(), ResponseError> {
        self.response.push(byte)
    }

    /// Current response.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Arguments of the current command.
    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consumes the processor and returns the application context.
    pub fn release(self) -> C {
        self.context
    }

    /// Runs the handler of the command at the given index.
    fn dispatch(&mut self, index: usize) {
        self.phase = Phase::Dispatched;

        let command = self.commands[index];

        #[cfg(feature = "log")]
        defmt::trace!("I2C Slave : Command {=u8:#04x} args {=[u8]}", command.code, self.args.as_slice());

        (command.handler)(&mut self.context, &self.args, &mut self.response);
    }
}

impl<'a, C> SlaveEvents for CommandProcessor<'a, C> {
    fn on_start(&mut self) {
        self.args.clear();
        self.phase = Phase::Idle;
    }

    fn on_receive(&mut self, data: u8) {
        match self.phase {
            Phase::Idle => match self.commands.iter().position(|c| c.code == data) {
                Some( index ) if self.commands[index].args == 0 => self.dispatch(index),

                Some( index ) => self.phase = Phase::Collecting( index ),

                None => {
                    #[cfg(feature = "log")]
                    defmt::trace!("I2C Slave : Unknown command {=u8:#04x}", data);
                },
            },

            Phase::Collecting( index ) => {
                self.args.push(data);

                if self.args.len() == self.commands[index].args as usize {
                    self.dispatch(index);
                }
            },

            Phase::Dispatched => {
                #[cfg(feature = "log")]
                defmt::trace!("I2C Slave : Dropped {=u8:#04x}", data);
            },
        }
    }

    fn on_request(&mut self) -> u8 {
        self.response.next_byte()
    }
}
