//! x86 I/O port access

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use core::arch::asm;

/// Byte-wide access to the I/O port space.
///
/// Drivers take this instead of calling `inb`/`outb` directly so they can be
/// exercised against a recording implementation.
pub trait PortIo {
    fn inb(&mut self, port: u16) -> u8;
    fn outb(&mut self, value: u8, port: u16);
}

impl<T: PortIo> PortIo for &mut T {
    fn inb(&mut self, port: u16) -> u8 {
        (**self).inb(port)
    }

    fn outb(&mut self, value: u8, port: u16) {
        (**self).outb(value, port)
    }
}

/// # Safety
///
/// Port writes can reprogram any device in the system.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub unsafe fn outb(value: u8, port: u16) {
    asm!(
        "out dx, al",
        in("dx") port,
        in("al") value,
        options(nomem, nostack, preserves_flags),
    );
}

/// # Safety
///
/// Port reads can have side effects on the device behind `port`.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub unsafe fn inb(port: u16) -> u8 {
    let value: u8;
    asm!(
        "in al, dx",
        out("al") value,
        in("dx") port,
        options(nomem, nostack, preserves_flags),
    );
    value
}

/// The real I/O port space.
#[derive(Clone, Copy, Debug)]
pub struct Ports(());

impl Ports {
    /// # Safety
    ///
    /// The caller must be the only code driving the ports it touches through
    /// this handle, which holds before SMP bring-up.
    pub const unsafe fn new() -> Self {
        Self(())
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl PortIo for Ports {
    fn inb(&mut self, port: u16) -> u8 {
        unsafe { inb(port) }
    }

    fn outb(&mut self, value: u8, port: u16) {
        unsafe { outb(value, port) }
    }
}
