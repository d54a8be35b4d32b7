use crate::config::{
    CONFIG_DEFAULT_CONSOLE_LOGLEVEL, CONFIG_MMCONF_BASE_ADDRESS, CONFIG_TTYS0_BASE,
    CONFIG_TTYS0_BAUD, GNB, MMIO, SERIAL_DEV, SUPERIO_PORT,
};
use agesa::{romstage::AgesaRomstage, AgesaStatus, AgesaWrapper, Blob, Phase};
use bootstate::{Error, Platform, PostCode};
use core::{
    convert::Infallible,
    fmt::{self, Write},
};
use log::{error, info};
use oreboot_asm::Ports;
use oreboot_console::{loglevel::level_filter, uart8250::divisor, ConsoleLogger, PostPort, Uart8250};
use oreboot_cpu::x86::{family_model, family_model_ids, lapic};
use oreboot_soc::amd::{family14, mmconf, sb800};
use oreboot_superio::smsc::kbc1100;

static CONSOLE: ConsoleLogger<Uart8250<Ports>> = ConsoleLogger::new();

extern "C" {
    /// Loads the next stage from the boot ROM and jumps to it
    fn copy_and_run();
}

pub struct Inagua {
    ports: Ports,
    post: PostPort<Ports>,
    agesa: Blob,
}

impl Inagua {
    /// # Safety
    ///
    /// Only one instance may exist, and only while cache-as-RAM is up.
    pub unsafe fn new() -> Self {
        let ports = Ports::new();
        Self {
            ports,
            post: PostPort::new(ports),
            agesa: Blob::new(),
        }
    }
}

impl Platform for Inagua {
    fn post_code(&mut self, code: PostCode) {
        self.post.post_code(code.value());
    }

    fn enter_next_stage(&mut self) -> Result<Infallible, Error> {
        unsafe { copy_and_run() };
        error!("Error: copy_and_run() returned!");
        Err(Error::NextStageReturned)
    }
}

impl AgesaWrapper for Inagua {
    fn init(&mut self, phase: Phase) -> AgesaStatus {
        self.agesa.init(phase)
    }
}

impl AgesaRomstage for Inagua {
    const SUPERIO_PORT: u16 = SUPERIO_PORT;
    const SERIAL_BASE: u16 = CONFIG_TTYS0_BASE;

    fn boot_cpu(&self) -> bool {
        lapic::boot_cpu()
    }

    fn configure_mmio(&mut self) {
        mmconf::amd_initmmio(&MMIO);
    }

    fn power_on_init(&mut self) {
        sb800::poweron_init();
    }

    fn early_device_init(&mut self, superio_port: u16, serial_base: u16) {
        kbc1100::early_init(&mut self.ports, superio_port);
        kbc1100::early_serial(&mut self.ports, SERIAL_DEV, serial_base);
    }

    fn console_init(&mut self) {
        let mut uart = Uart8250::new(self.ports, CONFIG_TTYS0_BASE);
        uart.init(divisor(CONFIG_TTYS0_BAUD));
        let level = level_filter(CONFIG_DEFAULT_CONSOLE_LOGLEVEL);
        if CONSOLE.init(uart, level).is_ok() {
            info!("oreboot romstage starting on AMD Inagua");
            if let Some((family, model)) = family_model_ids() {
                info!("CPU family {family:#x} model {model:#x}");
            }
        }
    }

    fn report_bist_failure(&mut self, bist: u32) {
        error!("BIST failed: {bist:08x}");
    }

    fn cpu_identity(&self) -> u32 {
        family_model()
    }

    fn finalize_env(&mut self) {
        family14::amd_initenv(CONFIG_MMCONF_BASE_ADDRESS as usize, &GNB);
    }
}

/// Drain the console before the core stops for good.
pub fn flush_console() {
    CONSOLE.with_sink(|uart| uart.flush());
}

/// Report a panic without waiting on the console lock, which the panicking
/// code may hold.
pub fn panic_console(args: fmt::Arguments) {
    CONSOLE.try_with_sink(|uart| {
        let _ = writeln!(uart, "[ERROR] {args}");
        uart.flush();
    });
}
