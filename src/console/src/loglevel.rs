//! coreboot console log levels and their `log` counterparts

use log::LevelFilter;

pub const BIOS_EMERG: u8 = 0;
pub const BIOS_ALERT: u8 = 1;
pub const BIOS_CRIT: u8 = 2;
pub const BIOS_ERR: u8 = 3;
pub const BIOS_WARNING: u8 = 4;
pub const BIOS_NOTICE: u8 = 5;
pub const BIOS_INFO: u8 = 6;
pub const BIOS_DEBUG: u8 = 7;
pub const BIOS_SPEW: u8 = 8;

/// `log` has no levels above error, so EMERG through ERR collapse.
pub const fn level_filter(loglevel: u8) -> LevelFilter {
    match loglevel {
        BIOS_EMERG..=BIOS_ERR => LevelFilter::Error,
        BIOS_WARNING => LevelFilter::Warn,
        BIOS_NOTICE | BIOS_INFO => LevelFilter::Info,
        BIOS_DEBUG => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
