#![no_std]

#[cfg(all(feature = "x86", any(target_arch = "x86", target_arch = "x86_64")))]
pub mod x86;
