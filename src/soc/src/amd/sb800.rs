//! SB800 southbridge, through AMD's CIMx library

extern "C" {
    #[link_name = "sb_Poweron_Init"]
    fn sb_poweron_init();
}

/// Early southbridge setup: LPC decode, SPI ROM speed, ACPI IO ranges.
pub fn poweron_init() {
    unsafe { sb_poweron_init() }
}
