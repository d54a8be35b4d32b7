#![doc = include_str!("../README.md")]
#![no_std]
#![no_main]

mod board;
mod config;

use board::Inagua;
use core::panic::PanicInfo;
use log::error;
use oreboot_cpu::x86::hang;

/// Entered from the cache-as-RAM setup code.
#[no_mangle]
pub extern "C" fn cache_as_ram_main(bist: u32, cpu_init_detectedx: u32) -> ! {
    let mut board = unsafe { Inagua::new() };
    let err = agesa::romstage::cache_as_ram_main(&mut board, bist, cpu_init_detectedx != 0);
    error!("romstage: {err}");
    board::flush_console();
    hang()
}

#[cfg_attr(not(test), panic_handler)]
fn panic(info: &PanicInfo) -> ! {
    match info.location() {
        Some(location) => board::panic_console(format_args!(
            "panic in '{}' line {}",
            location.file(),
            location.line()
        )),
        None => board::panic_console(format_args!("panic at unknown location")),
    }
    hang()
}
