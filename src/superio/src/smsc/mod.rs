pub mod kbc1100;

/// Serial port 1 logical device on SMSC super-I/Os
pub const SMSCSUPERIO_SP1: u8 = 4;
