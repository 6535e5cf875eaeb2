//! nanocc - driver binary: preprocesses, runs the compiler pipeline,
//! then assembles and links, shelling out to `gcc` for everything this
//! crate doesn't implement itself.

mod cli;
mod external;
mod paths;
mod pipeline;

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use paths::{CleanupOnDrop, CompilationPaths};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let paths = CompilationPaths::derive(&cli.source).map_err(|e| format!("error: {e}"))?;

    external::preprocess(&cli.source, &paths.preprocessed).map_err(|e| format!("error: preprocessor: {e}"))?;
    let _preprocessed_guard = CleanupOnDrop(paths.preprocessed.clone());

    let stop_after = cli.stop_after();
    let assembly = pipeline::run(&paths.preprocessed, stop_after).map_err(|e| e.to_string())?;

    let Some(assembly_text) = assembly else {
        tracing::info!("stopped early per --lex/--parse/--tacky/--codegen");
        return Ok(());
    };

    fs::write(&paths.assembly, assembly_text).map_err(|e| format!("error: io: failed to write {}: {e}", paths.assembly.display()))?;

    if cli.emit_assembly {
        tracing::info!(path = %paths.assembly.display(), "wrote assembly, stopping before assemble/link");
        return Ok(());
    }
    let _assembly_guard = CleanupOnDrop(paths.assembly.clone());

    external::assemble_and_link(&paths.assembly, &paths.binary).map_err(|e| format!("error: assembler/linker: {e}"))?;

    Ok(())
}
