use crate::AgesaStatus;
use core::fmt;

/// The AGESA entry points a romstage goes through, in order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// AmdInitReset: southbridge and HT link reset handling
    Reset,
    /// AmdInitEarly: CPU and HT setup
    Early,
    /// AmdInitPost: memory training, ends cache-as-RAM usage
    Post,
    /// AmdInitEnv: first code running out of DRAM
    Env,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Self::Reset, Self::Early, Self::Post, Self::Env];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reset => "AmdInitReset",
            Self::Early => "AmdInitEarly",
            Self::Post => "AmdInitPost",
            Self::Env => "AmdInitEnv",
        };
        f.write_str(name)
    }
}

pub trait AgesaWrapper {
    fn init(&mut self, phase: Phase) -> AgesaStatus;
}

#[cfg(feature = "blob")]
mod blob {
    use super::{AgesaStatus, AgesaWrapper, Phase};

    extern "C" {
        fn agesawrapper_amdinitreset() -> u32;
        fn agesawrapper_amdinitearly() -> u32;
        fn agesawrapper_amdinitpost() -> u32;
        fn agesawrapper_amdinitenv() -> u32;
    }

    /// The vendor library linked into the romstage image.
    pub struct Blob(());

    impl Blob {
        /// # Safety
        ///
        /// The AGESA wrapper and library must be linked in, and cache-as-RAM
        /// must be up.
        pub const unsafe fn new() -> Self {
            Self(())
        }
    }

    impl AgesaWrapper for Blob {
        fn init(&mut self, phase: Phase) -> AgesaStatus {
            let raw = unsafe {
                match phase {
                    Phase::Reset => agesawrapper_amdinitreset(),
                    Phase::Early => agesawrapper_amdinitearly(),
                    Phase::Post => agesawrapper_amdinitpost(),
                    Phase::Env => agesawrapper_amdinitenv(),
                }
            };
            AgesaStatus::from(raw)
        }
    }
}

#[cfg(feature = "blob")]
pub use blob::Blob;
