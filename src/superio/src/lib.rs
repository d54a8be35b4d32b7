#![no_std]

pub mod pnp;
pub mod smsc;

pub use pnp::PnpDev;
