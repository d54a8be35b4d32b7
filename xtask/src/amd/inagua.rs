use crate::util::{
    dist_dir, find_binutils_prefix_or_fail, get_cargo_cmd_in, objcopy, objdump, project_root,
};
use crate::{Cli, Commands, Env};
use log::{error, info, trace};
use std::process;

const ARCH: &str = "x86_64";
const TARGET: &str = "x86_64-unknown-none";

const ROMSTAGE_ELF: &str = "amd-inagua";
const ROMSTAGE_BIN: &str = "amd-inagua-romstage.bin";

pub(crate) fn execute_command(args: &Cli) {
    match args.command {
        Commands::Make => {
            info!("building AMD Inagua");
            // Get binutils first so we can fail early
            let binutils_prefix = &find_binutils_prefix_or_fail(ARCH);
            xtask_build_romstage(&args.env);
            objcopy(&args.env, binutils_prefix, TARGET, ROMSTAGE_ELF, ROMSTAGE_BIN);

            let out_path = dist_dir(&args.env, TARGET).join(ROMSTAGE_BIN);
            println!("======= DONE =======");
            println!("Output file: {:?}", out_path.into_os_string());
        }
        Commands::Asm => {
            let binutils_prefix = &find_binutils_prefix_or_fail(ARCH);
            xtask_build_romstage(&args.env);
            objdump(&args.env, binutils_prefix, TARGET, ROMSTAGE_ELF);
        }
    }
}

fn xtask_build_romstage(env: &Env) {
    trace!("build Inagua romstage");
    let mut command = get_cargo_cmd_in(env, board_project_root(), TARGET, "build");
    let status = command.status().unwrap();
    trace!("cargo returned {status}");
    if !status.success() {
        error!("cargo build failed with {status}");
        process::exit(1);
    }
}

fn board_project_root() -> std::path::PathBuf {
    project_root().join("src/mainboard/amd/inagua")
}
