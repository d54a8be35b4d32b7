//! The pre-RAM stage of AGESA based boards: from cache-as-RAM entry to the
//! handoff into the next stage.

use crate::{AgesaStatus, AgesaWrapper, Phase};
use bootstate::{Error, Platform, PostCode, ResetPath, Role, Sequencer, SequencerState, Stage, Step};
use log::{debug, error, warn};

pub const POST_SB_POWERON: PostCode = PostCode::new(0x30);
pub const POST_SUPERIO_EARLY: PostCode = PostCode::new(0x31);
pub const POST_CONSOLE_INIT: PostCode = PostCode::new(0x32);
pub const POST_BIST: PostCode = PostCode::new(0x34);
pub const POST_AGESA_INIT_RESET: PostCode = PostCode::new(0x37);
pub const POST_AGESA_INIT_EARLY: PostCode = PostCode::new(0x39);
pub const POST_AGESA_INIT_POST: PostCode = PostCode::new(0x40);
pub const POST_AGESA_INIT_ENV: PostCode = PostCode::new(0x41);
pub const POST_HANDOFF: PostCode = PostCode::new(0x50);
/// Should never be seen
pub const POST_DEAD: PostCode = PostCode::new(0x54);

pub const ROMSTAGE_STEPS: usize = 11;

/// Everything the romstage needs from a mainboard.
pub trait AgesaRomstage: Platform + AgesaWrapper {
    /// Super-I/O configuration port
    const SUPERIO_PORT: u16;
    /// Console UART I/O base
    const SERIAL_BASE: u16;

    fn boot_cpu(&self) -> bool;

    /// Enable PCI MMCONF. Everything after depends on it.
    fn configure_mmio(&mut self);

    fn power_on_init(&mut self);

    fn early_device_init(&mut self, superio_port: u16, serial_base: u16);

    fn console_init(&mut self);

    fn report_bist_failure(&mut self, bist: u32);

    /// CPUID Fn0000_0001 EAX
    fn cpu_identity(&self) -> u32;

    /// Board work after AmdInitEnv
    fn finalize_env(&mut self);
}

fn check_bist<P: AgesaRomstage>(platform: &mut P, state: &SequencerState) -> Result<(), Error> {
    match state.bist() {
        0 => Ok(()),
        bist => {
            platform.report_bist_failure(bist);
            Err(Error::SelfTestFailure { bist })
        }
    }
}

fn identify<P: AgesaRomstage>(platform: &mut P, state: &SequencerState) -> Result<(), Error> {
    let cpu_init_detected = u32::from(state.reset_path() == ResetPath::Warm);
    debug!("BSP Family_Model: {:08x}", platform.cpu_identity());
    debug!("cpu_init_detectedx = {cpu_init_detected:08x}");
    Ok(())
}

// Failures are AGESA's to handle; it either halts or we carry on.
fn agesa<P: AgesaRomstage>(platform: &mut P, phase: Phase) -> Result<(), Error> {
    let status = platform.init(phase);
    if status.is_error() {
        error!("{phase}: {status}");
    } else if status.is_warning() {
        warn!("{phase}: {status}");
    } else if status != AgesaStatus::Success {
        debug!("{phase}: {status}");
    }
    Ok(())
}

/// The romstage step table.
pub fn steps<P: AgesaRomstage>() -> [Step<P>; ROMSTAGE_STEPS] {
    [
        Step::always("amd_initmmio", None, |p, _| {
            p.configure_mmio();
            Ok(())
        }),
        Step::cold_boot_cpu("sb_poweron_init", Some(POST_SB_POWERON), |p, _| {
            p.power_on_init();
            Ok(())
        }),
        Step::cold_boot_cpu("superio_early_init", Some(POST_SUPERIO_EARLY), |p, _| {
            p.early_device_init(P::SUPERIO_PORT, P::SERIAL_BASE);
            Ok(())
        }),
        Step::cold_boot_cpu("console_init", Some(POST_CONSOLE_INIT), |p, _| {
            p.console_init();
            Ok(())
        }),
        Step::always("report_bist_failure", Some(POST_BIST), check_bist::<P>),
        Step::always("identify_cpu", None, identify::<P>),
        Step::always("agesawrapper_amdinitreset", Some(POST_AGESA_INIT_RESET), |p, _| {
            agesa(p, Phase::Reset)
        }),
        Step::always("agesawrapper_amdinitearly", Some(POST_AGESA_INIT_EARLY), |p, _| {
            agesa(p, Phase::Early)
        }),
        Step::always("agesawrapper_amdinitpost", Some(POST_AGESA_INIT_POST), |p, _| {
            agesa(p, Phase::Post)
        }),
        Step::always("agesawrapper_amdinitenv", Some(POST_AGESA_INIT_ENV), |p, _| {
            agesa(p, Phase::Env)
        }),
        Step::always("amd_initenv", None, |p, _| {
            p.finalize_env();
            Ok(())
        }),
    ]
}

/// Run the romstage. Returns only if something went fatally wrong.
///
/// `cpu_init_detected` comes from the cache-as-RAM entry code and marks the
/// warm path; whether this core is the BSP is asked separately.
pub fn cache_as_ram_main<P: AgesaRomstage>(
    platform: &mut P,
    bist: u32,
    cpu_init_detected: bool,
) -> Error {
    let role = if platform.boot_cpu() {
        Role::Primary
    } else {
        Role::Secondary
    };
    let reset_path = if cpu_init_detected {
        ResetPath::Warm
    } else {
        ResetPath::Cold
    };

    let steps = steps::<P>();
    match Stage::new("romstage", &steps, POST_HANDOFF, POST_DEAD) {
        Ok(stage) => Sequencer::new(&stage, role, reset_path, bist).run(platform),
        Err(e) => e,
    }
}
