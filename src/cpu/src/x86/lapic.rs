use super::msr::{rdmsr, IA32_APIC_BASE};

/// BSP flag in IA32_APIC_BASE
pub const LAPIC_BASE_MSR_BOOTSTRAP_PROCESSOR: u64 = 1 << 8;

/// Whether this core is the boot strap processor.
pub fn boot_cpu() -> bool {
    let base = unsafe { rdmsr(IA32_APIC_BASE) };
    base & LAPIC_BASE_MSR_BOOTSTRAP_PROCESSOR != 0
}
