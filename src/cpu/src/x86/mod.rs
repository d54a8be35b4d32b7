pub mod lapic;
pub mod msr;
pub mod mtrr;

use core::arch::asm;

/// CPUID Fn0000_0001 EAX: stepping, model, family and their extended fields.
pub fn family_model() -> u32 {
    raw_cpuid::cpuid!(0x1).eax
}

/// Human readable family and model, for logging.
pub fn family_model_ids() -> Option<(u8, u8)> {
    raw_cpuid::CpuId::new()
        .get_feature_info()
        .map(|f| (f.family_id(), f.model_id()))
}

/// Stop this core for good.
pub fn hang() -> ! {
    loop {
        unsafe { asm!("cli", "hlt", options(nomem, nostack)) };
    }
}
