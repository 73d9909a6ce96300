//! # intellifix - IDE include-path repair hook
//!
//! Post-build hook that removes non-existent include paths from
//! `.vscode/c_cpp_properties.json`. Build tools faithfully copy every `-I`
//! flag the compiler receives, including paths declared by frameworks that
//! were never created on disk; this binary runs after each successful build
//! and silently drops those phantom entries so the IDE stops reporting
//! "Cannot find" warnings.
//!
//! The hook is advisory: it never fails the enclosing build. Only a failed
//! rewrite of the config file exits non-zero.

mod cli;
mod core;
mod run;

use clap::Parser;

use crate::cli::{Args, Commands};

fn main() {
    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        run::print_completions(*shell);
        return;
    }

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = run::run_fix(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
