//! `enum`s, tables and buffers used by the driver.



mod buffer;
mod command;
mod config;
mod register;
mod table;

pub mod field;



pub use buffer::*;
pub use command::*;
pub use config::*;
pub use field::Field;
pub use register::*;
pub use table::*;
