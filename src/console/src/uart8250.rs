use core::fmt;
use oreboot_asm::PortIo;

pub const UART8250_TBR: u16 = 0x00;
pub const UART8250_IER: u16 = 0x01;
pub const UART8250_FCR: u16 = 0x02;
pub const UART8250_LCR: u16 = 0x03;
pub const UART8250_MCR: u16 = 0x04;
pub const UART8250_LSR: u16 = 0x05;
/// Divisor latch, valid while LCR.DLAB is set
pub const UART8250_DLL: u16 = 0x00;
pub const UART8250_DLM: u16 = 0x01;

pub const UART8250_FCR_FIFO_EN: u8 = 0x01;
pub const UART8250_FCR_CLEAR_RCVR: u8 = 0x02;
pub const UART8250_FCR_CLEAR_XMIT: u8 = 0x04;
pub const UART8250_LCR_WLS_8: u8 = 0x03;
pub const UART8250_LCR_DLAB: u8 = 0x80;
pub const UART8250_MCR_DTR: u8 = 0x01;
pub const UART8250_MCR_RTS: u8 = 0x02;
pub const UART8250_LSR_THRE: u8 = 0x20;
pub const UART8250_LSR_TEMT: u8 = 0x40;

/// Input clock of a PC-compatible UART divided by 16
pub const UART8250_BASE_BAUD: u32 = 115200;
/// Polls of LSR before a byte is sent regardless
pub const SINGLE_CHAR_TIMEOUT: u32 = 50 * 1000;

pub const fn divisor(baud: u32) -> u16 {
    (UART8250_BASE_BAUD / baud) as u16
}

/// An 8250 compatible UART in I/O port space, 8N1, no interrupts.
pub struct Uart8250<P> {
    io: P,
    base: u16,
}

impl<P: PortIo> Uart8250<P> {
    pub const fn new(io: P, base: u16) -> Self {
        Self { io, base }
    }

    pub fn init(&mut self, divisor: u16) {
        let [dll, dlm] = divisor.to_le_bytes();

        self.write_reg(0, UART8250_IER);
        self.write_reg(UART8250_LCR_DLAB | UART8250_LCR_WLS_8, UART8250_LCR);
        self.write_reg(dll, UART8250_DLL);
        self.write_reg(dlm, UART8250_DLM);
        self.write_reg(UART8250_LCR_WLS_8, UART8250_LCR);
        self.write_reg(
            UART8250_FCR_FIFO_EN | UART8250_FCR_CLEAR_RCVR | UART8250_FCR_CLEAR_XMIT,
            UART8250_FCR,
        );
        self.write_reg(UART8250_MCR_DTR | UART8250_MCR_RTS, UART8250_MCR);
    }

    pub fn write_byte(&mut self, byte: u8) {
        let mut spins = SINGLE_CHAR_TIMEOUT;
        while self.read_reg(UART8250_LSR) & UART8250_LSR_THRE == 0 && spins > 0 {
            spins -= 1;
        }
        self.write_reg(byte, UART8250_TBR);
    }

    /// Wait until both holding and shift register are empty.
    pub fn flush(&mut self) {
        let mut spins = SINGLE_CHAR_TIMEOUT;
        while self.read_reg(UART8250_LSR) & UART8250_LSR_TEMT == 0 && spins > 0 {
            spins -= 1;
        }
    }

    fn read_reg(&mut self, reg: u16) -> u8 {
        self.io.inb(self.base + reg)
    }

    fn write_reg(&mut self, value: u8, reg: u16) {
        self.io.outb(value, self.base + reg);
    }
}

impl<P: PortIo> fmt::Write for Uart8250<P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            if b == b'\n' {
                self.write_byte(b'\r');
            }
            self.write_byte(b);
        }
        Ok(())
    }
}
