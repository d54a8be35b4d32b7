#![no_std]

pub mod io;
pub mod mmio;

pub use io::{PortIo, Ports};
