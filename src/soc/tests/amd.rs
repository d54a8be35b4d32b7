#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use oreboot_cpu::x86::mtrr::{mtrr_phys_base, mtrr_phys_mask};
use oreboot_soc::amd::{
    family14::{ecam_offset, env_writes, GnbConfig},
    mmconf::{mmconf_msr, rom_cache_mtrr, MmioConfig, ROM_CACHE_MTRR},
    Error,
};

#[test]
fn mmconf_msr_encodes_bus_range() {
    assert_eq!(mmconf_msr(0xe000_0000, 256), Ok(0xe000_0021));
    assert_eq!(mmconf_msr(0xf800_0000, 64), Ok(0xf800_0019));
    assert_eq!(mmconf_msr(0xe000_0000, 1), Ok(0xe000_0001));
}

#[test]
fn mmconf_msr_rejects_bad_windows() {
    assert_eq!(mmconf_msr(0xe000_0000, 0), Err(Error::InvalidBusCount(0)));
    assert_eq!(mmconf_msr(0xe000_0000, 100), Err(Error::InvalidBusCount(100)));
    assert_eq!(mmconf_msr(0xe000_0000, 512), Err(Error::InvalidBusCount(512)));
    assert_eq!(
        mmconf_msr(0xe008_0000, 256),
        Err(Error::UnalignedBase(0xe008_0000))
    );
    assert_eq!(mmconf_msr(0, 256), Err(Error::UnalignedBase(0)));
}

#[test]
fn rom_cache_covers_top_of_4g() {
    assert_eq!(
        rom_cache_mtrr(16 << 20, 48),
        Ok((0xff00_0005, 0xffff_ff00_0800))
    );
    assert_eq!(
        rom_cache_mtrr(4 << 20, 40),
        Ok((0xffc0_0005, 0xff_ffc0_0800))
    );
    assert_eq!(
        rom_cache_mtrr(3 << 20, 48),
        Err(Error::InvalidRomSize(3 << 20))
    );
    assert_eq!(rom_cache_mtrr(16 << 20, 64), Err(Error::InvalidPhysBits(64)));
}

#[test]
fn mmio_config_validates_everything() {
    let cfg = MmioConfig::new(0xe000_0000, 256, 16 << 20, 48).unwrap();
    assert_eq!(cfg.mmconf(), 0xe000_0021);
    assert_eq!(cfg.rom_cache(), (0xff00_0005, 0xffff_ff00_0800));
    assert!(MmioConfig::new(0xe000_0000, 3, 16 << 20, 48).is_err());
}

#[test]
fn ecam_offsets() {
    assert_eq!(ecam_offset(0, 1, 0, 0x18), 0x0_8018);
    assert_eq!(ecam_offset(1, 5, 0, 0x10), 0x12_8010);
    assert_eq!(ecam_offset(0xff, 0x1f, 7, 0xffc), 0xfff_fffc);
}

#[test]
fn inagua_bridge_windows() {
    let gnb = GnbConfig::new(0x8000_0000, 0x9600_0000).unwrap();
    let writes: Vec<_> = env_writes(&gnb)
        .iter()
        .map(|w| (w.bus, w.dev, w.reg, w.value))
        .collect();
    assert_eq!(
        writes,
        [
            (0, 1, 0x18, 0x0001_0100),
            (1, 5, 0x10, 0x8000_0000),
            (1, 5, 0x18, 0x9600_0000),
            (0, 1, 0x20, 0x9600_9600),
            (0, 1, 0x24, 0x8ff1_8001),
        ]
    );
}

#[test]
fn rom_cache_mtrr_registers() {
    assert_eq!(mtrr_phys_base(ROM_CACHE_MTRR), 0x20c);
    assert_eq!(mtrr_phys_mask(ROM_CACHE_MTRR), 0x20d);
}

#[test]
fn gnb_config_rejects_wrapping_windows() {
    assert!(GnbConfig::new(0xf000_0000, 0x9600_0000).is_ok());
    assert_eq!(
        GnbConfig::new(0xf010_0000, 0x9600_0000),
        Err(Error::InvalidFrameBuffer(0xf010_0000))
    );
    assert_eq!(
        GnbConfig::new(0x8008_0000, 0x9600_0000),
        Err(Error::InvalidFrameBuffer(0x8008_0000))
    );
    assert_eq!(GnbConfig::new(0, 0x9600_0000), Err(Error::InvalidFrameBuffer(0)));
    assert_eq!(
        GnbConfig::new(0x8000_0000, 0x9601_0000),
        Err(Error::InvalidGmmBase(0x9601_0000))
    );

    let top = GnbConfig::new(0xf000_0000, 0x9600_0000).unwrap();
    assert_eq!(env_writes(&top)[4].value, 0xfff1_f001);
}
