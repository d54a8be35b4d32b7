//! PCI MMCONF window and ROM caching, needed before any other romstage code

use super::Error;
use log::debug;
use oreboot_cpu::x86::{
    msr::{wrmsr, MMIO_CONF_BASE},
    mtrr::{mtrr_phys_base, mtrr_phys_mask, MTRR_TYPE_WRPROT, MTRR_VALID},
};

pub const MMCONF_ENABLE: u64 = 1 << 0;
pub const MMCONF_BUS_RANGE_SHIFT: u32 = 2;
/// Variable MTRR the boot ROM is cached through
pub const ROM_CACHE_MTRR: u32 = 6;

const FOUR_GIB: u64 = 1 << 32;

/// MMIO_CONF_BASE value for a window of `bus_count` buses at `base`.
pub const fn mmconf_msr(base: u64, bus_count: u16) -> Result<u64, Error> {
    if bus_count == 0 || bus_count > 256 || !bus_count.is_power_of_two() {
        return Err(Error::InvalidBusCount(bus_count));
    }
    // 1MiB of config space per bus
    let window = (bus_count as u64) << 20;
    if base == 0 || base % window != 0 {
        return Err(Error::UnalignedBase(base));
    }
    let range = bus_count.trailing_zeros() as u64;
    Ok(base | (range << MMCONF_BUS_RANGE_SHIFT) | MMCONF_ENABLE)
}

/// Base and mask of a write-protect MTRR covering the top `size` bytes below
/// 4GiB, where the boot ROM is mapped.
pub const fn rom_cache_mtrr(size: u64, phys_bits: u8) -> Result<(u64, u64), Error> {
    if size < 0x1000 || size > FOUR_GIB || !size.is_power_of_two() {
        return Err(Error::InvalidRomSize(size));
    }
    if phys_bits < 32 || phys_bits > 52 {
        return Err(Error::InvalidPhysBits(phys_bits));
    }
    let base = (FOUR_GIB - size) | MTRR_TYPE_WRPROT as u64;
    let mask = (((1u64 << phys_bits) - 1) & !(size - 1)) | MTRR_VALID;
    Ok((base, mask))
}

/// Register values for [`amd_initmmio`], validated at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MmioConfig {
    mmconf: u64,
    rom_base: u64,
    rom_mask: u64,
}

impl MmioConfig {
    pub const fn new(
        mmconf_base: u64,
        bus_count: u16,
        rom_cache_size: u64,
        phys_bits: u8,
    ) -> Result<Self, Error> {
        let mmconf = match mmconf_msr(mmconf_base, bus_count) {
            Ok(v) => v,
            Err(e) => return Err(e),
        };
        let (rom_base, rom_mask) = match rom_cache_mtrr(rom_cache_size, phys_bits) {
            Ok(v) => v,
            Err(e) => return Err(e),
        };
        Ok(Self {
            mmconf,
            rom_base,
            rom_mask,
        })
    }

    pub fn mmconf(&self) -> u64 {
        self.mmconf
    }

    pub fn rom_cache(&self) -> (u64, u64) {
        (self.rom_base, self.rom_mask)
    }
}

/// Enable the PCI MMCONF window and cache the boot ROM write-protected.
pub fn amd_initmmio(config: &MmioConfig) {
    debug!("MMCONF: {:#x}", config.mmconf);
    unsafe {
        wrmsr(MMIO_CONF_BASE, config.mmconf);
        wrmsr(mtrr_phys_base(ROM_CACHE_MTRR), config.rom_base);
        wrmsr(mtrr_phys_mask(ROM_CACHE_MTRR), config.rom_mask);
    }
}
