use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::error;
use std::process;

mod amd;
mod util;

#[derive(Parser)]
#[command(author, version, about = "oreboot build driver", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Board to build, as vendor/board
    #[arg(long, global = true, default_value = "amd/inagua")]
    mainboard: String,
    #[command(flatten)]
    env: Env,
    #[command(flatten)]
    verbose: Verbosity,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Build the flash image
    Make,
    /// Disassemble the stage ELF
    Asm,
}

#[derive(Args, Debug)]
pub(crate) struct Env {
    /// Build in release mode
    #[arg(long, global = true)]
    release: bool,
}

fn main() {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.mainboard.as_str() {
        "amd/inagua" => amd::inagua::execute_command(&args),
        other => {
            error!("unknown mainboard {other}");
            process::exit(1);
        }
    }
}
