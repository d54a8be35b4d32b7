#![no_std]

#[cfg(all(feature = "amd", any(target_arch = "x86", target_arch = "x86_64")))]
pub mod amd;
