//! Little-endian MMIO accessors, after u-boot's <asm/io.h>

use core::ptr::write_volatile;

/// # Safety
///
/// `addr` must be a mapped, 4-byte aligned device register.
pub unsafe fn writel(v: u32, addr: usize) {
    write_volatile(addr as *mut u32, v.to_le());
}
