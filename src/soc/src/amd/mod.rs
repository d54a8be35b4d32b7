use core::fmt;

pub mod family14;
pub mod mmconf;
#[cfg(feature = "cimx")]
pub mod sb800;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// MMCONF bus count must be a power of two from 1 to 256
    InvalidBusCount(u16),
    /// MMCONF base must be aligned to the size of the window
    UnalignedBase(u64),
    /// ROM cache size must be a power of two from 4KiB to 4GiB
    InvalidRomSize(u64),
    /// Physical address width outside what x86 MTRRs can express
    InvalidPhysBits(u8),
    /// Frame buffer must be 1MiB aligned with its 256MiB window below 4GiB
    InvalidFrameBuffer(u32),
    /// GMM registers must be 1MiB aligned
    InvalidGmmBase(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBusCount(n) => write!(f, "invalid MMCONF bus count {n}"),
            Self::UnalignedBase(b) => write!(f, "unaligned MMCONF base {b:#x}"),
            Self::InvalidRomSize(s) => write!(f, "invalid ROM cache size {s:#x}"),
            Self::InvalidPhysBits(b) => write!(f, "invalid physical address width {b}"),
            Self::InvalidFrameBuffer(b) => write!(f, "invalid frame buffer base {b:#x}"),
            Self::InvalidGmmBase(b) => write!(f, "invalid GMM base {b:#x}"),
        }
    }
}
