//! SMSC KBC1100 keyboard and embedded controller

use crate::pnp::{PnpDev, PNP_IDX_IO0};
use log::debug;
use oreboot_asm::PortIo;

/// 8042 keyboard controller logical device
pub const KBC1100_KBC: u8 = 7;

/// Global configuration register holding the serial IRQ mode
pub const KBC1100_SERIRQ_CFG: u8 = 0x25;
pub const KBC1100_SERIRQ_EN: u8 = 0x04;

/// Turn on serial IRQs and the 8042 keyboard controller.
pub fn early_init<P: PortIo>(io: &mut P, port: u16) {
    let dev = PnpDev::new(port, KBC1100_KBC);
    debug!("KBC1100: early init at {port:#x}");

    dev.enter_conf_state(io);
    dev.write_config(io, KBC1100_SERIRQ_CFG, KBC1100_SERIRQ_EN);
    dev.set_logical_device(io);
    dev.set_enable(io, true);
    dev.exit_conf_state(io);
}

/// Decode the UART logical device `dev` at `iobase`.
pub fn early_serial<P: PortIo>(io: &mut P, dev: PnpDev, iobase: u16) {
    debug!("KBC1100: LDN {} serial at {iobase:#x}", dev.device());

    dev.enter_conf_state(io);
    dev.set_logical_device(io);
    dev.set_enable(io, false);
    dev.set_iobase(io, PNP_IDX_IO0, iobase);
    dev.set_enable(io, true);
    dev.exit_conf_state(io);
}
