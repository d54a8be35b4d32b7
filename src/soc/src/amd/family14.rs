//! Family 14h graphics bridge setup left to the board after AGESA InitEnv

use super::Error;
use log::debug;
use oreboot_asm::mmio::writel;

/// Offset of a function's config space inside the MMCONF window
pub const fn ecam_offset(bus: u8, dev: u8, func: u8, reg: u16) -> usize {
    ((bus as usize) << 20)
        | ((dev as usize & 0x1f) << 15)
        | ((func as usize & 0x7) << 12)
        | (reg as usize & 0xfff)
}

/// A 32-bit config space write.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PciWrite {
    pub bus: u8,
    pub dev: u8,
    pub func: u8,
    pub reg: u16,
    pub value: u32,
}

impl PciWrite {
    const fn new(bus: u8, dev: u8, func: u8, reg: u16, value: u32) -> Self {
        Self {
            bus,
            dev,
            func,
            reg,
            value,
        }
    }

    pub const fn offset(&self) -> usize {
        ecam_offset(self.bus, self.dev, self.func, self.reg)
    }
}

/// Bridge windows are programmed in 1MiB units
const WINDOW_ALIGN: u32 = 1 << 20;
/// Prefetchable window opened for the frame buffer
const FRAME_BUFFER_SIZE: u32 = 256 << 20;

/// Where the integrated GPU's frame buffer and register BARs go
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GnbConfig {
    frame_buffer_base: u32,
    gmm_base: u32,
}

impl GnbConfig {
    pub const fn new(frame_buffer_base: u32, gmm_base: u32) -> Result<Self, Error> {
        // the frame buffer window has to end below 4GiB
        if frame_buffer_base == 0
            || frame_buffer_base % WINDOW_ALIGN != 0
            || frame_buffer_base > u32::MAX - (FRAME_BUFFER_SIZE - 1)
        {
            return Err(Error::InvalidFrameBuffer(frame_buffer_base));
        }
        if gmm_base == 0 || gmm_base % WINDOW_ALIGN != 0 {
            return Err(Error::InvalidGmmBase(gmm_base));
        }
        Ok(Self {
            frame_buffer_base,
            gmm_base,
        })
    }
}

/// The D1F0 bridge and the GPU behind it, in the order they are programmed.
pub const fn env_writes(gnb: &GnbConfig) -> [PciWrite; 5] {
    let fb = gnb.frame_buffer_base;
    let gmm = gnb.gmm_base;
    [
        // primary 0, secondary 1, subordinate 1
        PciWrite::new(0, 1, 0, 0x18, 0x0001_0100),
        PciWrite::new(1, 5, 0, 0x10, fb),
        PciWrite::new(1, 5, 0, 0x18, gmm),
        // memory base/limit: the GMM 1MiB page
        PciWrite::new(0, 1, 0, 0x20, (gmm & 0xfff0_0000) | (gmm >> 16)),
        // prefetchable base/limit: 256MiB of frame buffer, 64-bit capable
        PciWrite::new(
            0,
            1,
            0,
            0x24,
            ((fb + (FRAME_BUFFER_SIZE - WINDOW_ALIGN)) & 0xfff0_0000) | (fb >> 16) | 0x0001_0001,
        ),
    ]
}

/// Open the graphics bridge windows through MMCONF.
pub fn amd_initenv(mmconf_base: usize, gnb: &GnbConfig) {
    for w in env_writes(gnb) {
        debug!(
            "B{}D{}F{} {:#04x} <- {:#010x}",
            w.bus, w.dev, w.func, w.reg, w.value
        );
        unsafe { writel(w.value, mmconf_base + w.offset()) };
    }
}
