use oreboot_asm::PortIo;
use oreboot_superio::{
    pnp::{PNP_IDX_IO0, PNP_IDX_LDN},
    smsc::{kbc1100, SMSCSUPERIO_SP1},
    PnpDev,
};
use std::collections::VecDeque;

#[derive(Default)]
struct FakePorts {
    writes: Vec<(u16, u8)>,
    reads: VecDeque<u8>,
}

impl PortIo for FakePorts {
    fn inb(&mut self, _port: u16) -> u8 {
        self.reads.pop_front().unwrap_or(0xff)
    }

    fn outb(&mut self, value: u8, port: u16) {
        self.writes.push((port, value));
    }
}

#[test]
fn config_access_uses_index_and_data_port() {
    let mut io = FakePorts {
        reads: VecDeque::from([0x04]),
        ..Default::default()
    };
    let dev = PnpDev::new(0x4e, 3);
    dev.write_config(&mut io, 0xf0, 0x12);
    assert_eq!(dev.read_config(&mut io, PNP_IDX_LDN), 0x04);
    assert_eq!(io.writes, [(0x4e, 0xf0), (0x4f, 0x12), (0x4e, 0x07)]);
}

#[test]
fn iobase_is_written_high_byte_first() {
    let mut io = FakePorts::default();
    PnpDev::new(0x2e, SMSCSUPERIO_SP1).set_iobase(&mut io, PNP_IDX_IO0, 0x3f8);
    assert_eq!(
        io.writes,
        [(0x2e, 0x60), (0x2f, 0x03), (0x2e, 0x61), (0x2f, 0xf8)]
    );
}

#[test]
fn kbc1100_early_init_enables_serirq_and_keyboard() {
    let mut io = FakePorts::default();
    kbc1100::early_init(&mut io, 0x2e);
    assert_eq!(
        io.writes,
        [
            (0x2e, 0x55),
            (0x2e, 0x25),
            (0x2f, 0x04),
            (0x2e, 0x07),
            (0x2f, kbc1100::KBC1100_KBC),
            (0x2e, 0x30),
            (0x2f, 0x01),
            (0x2e, 0xaa),
        ]
    );
}

#[test]
fn kbc1100_early_serial_maps_ttys0() {
    let mut io = FakePorts::default();
    kbc1100::early_serial(&mut io, PnpDev::new(0x2e, SMSCSUPERIO_SP1), 0x3f8);
    assert_eq!(
        io.writes,
        [
            (0x2e, 0x55),
            (0x2e, 0x07),
            (0x2f, 0x04),
            (0x2e, 0x30),
            (0x2f, 0x00),
            (0x2e, 0x60),
            (0x2f, 0x03),
            (0x2e, 0x61),
            (0x2f, 0xf8),
            (0x2e, 0x30),
            (0x2f, 0x01),
            (0x2e, 0xaa),
        ]
    );
}
