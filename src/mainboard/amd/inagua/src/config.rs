use oreboot_console::loglevel::BIOS_DEBUG;
use oreboot_soc::amd::{family14::GnbConfig, mmconf::MmioConfig};
use oreboot_superio::{smsc::SMSCSUPERIO_SP1, PnpDev};

pub const CONFIG_MMCONF_BASE_ADDRESS: u64 = 0xe000_0000;
pub const CONFIG_MMCONF_BUS_NUMBER: u16 = 256;
pub const CONFIG_ROM_SIZE: u64 = 16 << 20;
pub const CPU_PHYS_ADDRESS_BITS: u8 = 48;

pub const MMIO: MmioConfig = match MmioConfig::new(
    CONFIG_MMCONF_BASE_ADDRESS,
    CONFIG_MMCONF_BUS_NUMBER,
    CONFIG_ROM_SIZE,
    CPU_PHYS_ADDRESS_BITS,
) {
    Ok(c) => c,
    Err(_) => panic!("invalid MMCONF or ROM cache configuration"),
};

pub const CONFIG_FRAME_BUFFER_BASE: u32 = 0x8000_0000;
pub const CONFIG_GMM_BASE: u32 = 0x9600_0000;

pub const GNB: GnbConfig = match GnbConfig::new(CONFIG_FRAME_BUFFER_BASE, CONFIG_GMM_BASE) {
    Ok(c) => c,
    Err(_) => panic!("invalid graphics bridge configuration"),
};

pub const SUPERIO_PORT: u16 = 0x2e;
pub const SERIAL_DEV: PnpDev = PnpDev::new(SUPERIO_PORT, SMSCSUPERIO_SP1);
pub const CONFIG_TTYS0_BASE: u16 = 0x3f8;
pub const CONFIG_TTYS0_BAUD: u32 = 115200;

pub const CONFIG_DEFAULT_CONSOLE_LOGLEVEL: u8 = BIOS_DEBUG;
