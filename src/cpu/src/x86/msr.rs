use core::arch::asm;

/// Local APIC base and BSP flag
pub const IA32_APIC_BASE: u32 = 0x1b;
/// AMD family 10h+ PCI MMIO configuration base
pub const MMIO_CONF_BASE: u32 = 0xc001_0058;

/// # Safety
///
/// Reading an unimplemented MSR raises #GP.
pub unsafe fn rdmsr(msr: u32) -> u64 {
    let (lo, hi): (u32, u32);
    asm!(
        "rdmsr",
        in("ecx") msr,
        out("eax") lo,
        out("edx") hi,
        options(nomem, nostack, preserves_flags),
    );
    (u64::from(hi) << 32) | u64::from(lo)
}

/// # Safety
///
/// MSR writes change processor behaviour globally; reserved bits raise #GP.
pub unsafe fn wrmsr(msr: u32, value: u64) {
    asm!(
        "wrmsr",
        in("ecx") msr,
        in("eax") value as u32,
        in("edx") (value >> 32) as u32,
        options(nostack, preserves_flags),
    );
}
