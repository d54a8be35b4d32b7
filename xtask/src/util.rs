use crate::Env;
use log::{error, trace};
use std::{
    env,
    path::{Path, PathBuf},
    process::{self, Command},
};

pub(crate) fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap()
        .to_path_buf()
}

pub(crate) fn dist_dir(env: &Env, target: &str) -> PathBuf {
    let mut path_buf = project_root().join("target").join(target);
    path_buf = match env.release {
        false => path_buf.join("debug"),
        true => path_buf.join("release"),
    };
    path_buf
}

pub(crate) fn get_cargo_cmd_in(env: &Env, root: PathBuf, target: &str, command: &str) -> Command {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    trace!("cargo {command} in {}", root.display());
    let mut cmd = Command::new(cargo);
    cmd.current_dir(root);
    cmd.arg(command);
    cmd.args(["--target", target]);
    if env.release {
        cmd.arg("--release");
    }
    cmd
}

/// Find a binutils install that can handle `arch`, or exit.
pub(crate) fn find_binutils_prefix_or_fail(arch: &str) -> String {
    let prefixes = [
        format!("{arch}-linux-gnu-"),
        format!("{arch}-elf-"),
        format!("{arch}-unknown-elf-"),
        String::new(),
    ];
    for prefix in prefixes {
        let found = Command::new(format!("{prefix}objcopy"))
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success());
        if found {
            trace!("using binutils prefix '{prefix}'");
            return prefix;
        }
    }
    error!("no binutils found for {arch}, install binutils or cargo-binutils");
    process::exit(1);
}

pub(crate) fn objcopy(env: &Env, prefix: &str, target: &str, elf: &str, bin: &str) {
    let dist_dir = dist_dir(env, target);
    trace!("objcopy {elf} to {bin}");
    let status = Command::new(format!("{prefix}objcopy"))
        .current_dir(&dist_dir)
        .args(["-O", "binary", elf, bin])
        .status()
        .expect("run objcopy");
    if !status.success() {
        error!("objcopy failed with {status}");
        process::exit(1);
    }
}

pub(crate) fn objdump(env: &Env, prefix: &str, target: &str, elf: &str) {
    let dist_dir = dist_dir(env, target);
    let status = Command::new(format!("{prefix}objdump"))
        .current_dir(&dist_dir)
        .args(["-d", elf])
        .status()
        .expect("run objdump");
    if !status.success() {
        error!("objdump failed with {status}");
        process::exit(1);
    }
}
