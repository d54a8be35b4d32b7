use oreboot_asm::PortIo;

/// Legacy POST code port, latched by debug cards
pub const POST_PORT: u16 = 0x80;

/// Writes POST codes to the legacy POST port.
pub struct PostPort<P> {
    io: P,
}

impl<P: PortIo> PostPort<P> {
    pub const fn new(io: P) -> Self {
        Self { io }
    }

    pub fn post_code(&mut self, code: u8) {
        self.io.outb(code, POST_PORT);
    }
}
