use std::path::Path;
use std::process::Command;

use anyhow::{bail, Result};

/// Runs `gcc -E -P <source> -o <dst>`, the only preprocessing step this
/// driver performs itself. `gcc` (not a dedicated preprocessor binary)
/// is used because it understands all the same flags and is far more
/// likely to already be on the host.
pub fn preprocess(source: &Path, dst: &Path) -> Result<()> {
    run_gcc(&["-E", "-P", &path_str(source), "-o", &path_str(dst)], "preprocessor")
}

/// Runs `gcc <assembly> -o <binary>`, assembling and linking in one
/// invocation since this subset never produces more than one
/// translation unit.
pub fn assemble_and_link(assembly: &Path, binary: &Path) -> Result<()> {
    run_gcc(&[&path_str(assembly), "-o", &path_str(binary)], "assembler/linker")
}

fn run_gcc(args: &[&str], what: &str) -> Result<()> {
    tracing::debug!(?args, "invoking gcc");
    let output = Command::new("gcc")
        .args(args)
        .output()
        .map_err(|e| anyhow::anyhow!("failed to spawn gcc for the {what}: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("error while running the {what}:\n{stderr}");
    }

    Ok(())
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
