/// First variable MTRR base register; mask follows at +1
pub const MTRR_PHYS_BASE_0: u32 = 0x200;
pub const MTRR_VALID: u64 = 1 << 11;

pub const MTRR_TYPE_UNCACHEABLE: u8 = 0;
pub const MTRR_TYPE_WRCOMB: u8 = 1;
pub const MTRR_TYPE_WRTHROUGH: u8 = 4;
pub const MTRR_TYPE_WRPROT: u8 = 5;
pub const MTRR_TYPE_WRBACK: u8 = 6;

pub const fn mtrr_phys_base(reg: u32) -> u32 {
    MTRR_PHYS_BASE_0 + 2 * reg
}

pub const fn mtrr_phys_mask(reg: u32) -> u32 {
    mtrr_phys_base(reg) + 1
}
