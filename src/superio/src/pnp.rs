//! Super-I/O configuration through the PNP index/data port pair

use oreboot_asm::PortIo;

pub const PNP_IDX_LDN: u8 = 0x07;
pub const PNP_IDX_EN: u8 = 0x30;
pub const PNP_IDX_IO0: u8 = 0x60;
pub const PNP_IDX_IO1: u8 = 0x62;
pub const PNP_IDX_IRQ0: u8 = 0x70;

/// Key that unlocks configuration mode on SMSC parts
pub const PNP_ENTER_CONF: u8 = 0x55;
pub const PNP_EXIT_CONF: u8 = 0xaa;

/// A logical device behind a configuration port (`PNP_DEV(port, device)`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PnpDev {
    port: u16,
    device: u8,
}

impl PnpDev {
    pub const fn new(port: u16, device: u8) -> Self {
        Self { port, device }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn device(&self) -> u8 {
        self.device
    }

    pub fn enter_conf_state<P: PortIo>(&self, io: &mut P) {
        io.outb(PNP_ENTER_CONF, self.port);
    }

    pub fn exit_conf_state<P: PortIo>(&self, io: &mut P) {
        io.outb(PNP_EXIT_CONF, self.port);
    }

    pub fn write_config<P: PortIo>(&self, io: &mut P, reg: u8, value: u8) {
        io.outb(reg, self.port);
        io.outb(value, self.port + 1);
    }

    pub fn read_config<P: PortIo>(&self, io: &mut P, reg: u8) -> u8 {
        io.outb(reg, self.port);
        io.inb(self.port + 1)
    }

    pub fn set_logical_device<P: PortIo>(&self, io: &mut P) {
        self.write_config(io, PNP_IDX_LDN, self.device);
    }

    pub fn set_enable<P: PortIo>(&self, io: &mut P, enable: bool) {
        self.write_config(io, PNP_IDX_EN, u8::from(enable));
    }

    pub fn set_iobase<P: PortIo>(&self, io: &mut P, index: u8, iobase: u16) {
        let [lo, hi] = iobase.to_le_bytes();
        self.write_config(io, index, hi);
        self.write_config(io, index + 1, lo);
    }
}
