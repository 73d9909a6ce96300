//! Application run modes: logger init, the fix pipeline, completions.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{self, Args};
use crate::core::loader::LoadOutcome;
use crate::core::writer::WriteError;
use crate::core::{app, filter, loader, writer};

/// Initialize env_logger from the -v/-q flags (RUST_LOG overrides).
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Generate a shell completion script on stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    cli::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

/// Run the fix pipeline: load, filter, rewrite if anything was dropped.
///
/// A missing file is a silent no-op and load problems degrade to a reported
/// no-op, so the enclosing build never fails on this hook's account. Only a
/// write failure propagates.
pub fn run_fix(args: &Args) -> Result<(), WriteError> {
    let props_path = args.project_dir.join(&args.config);

    let (raw, mut doc) = match loader::load(&props_path) {
        Ok(LoadOutcome::Absent) => {
            log::debug!("{} not found, nothing to do", props_path.display());
            return Ok(());
        }
        Ok(LoadOutcome::Loaded { raw, doc }) => (raw, doc),
        Err(e) => {
            println!("{}: {}", app::NAME, e);
            return Ok(());
        }
    };

    let removed = filter::prune(&mut doc, &args.project_dir);
    if removed.is_empty() {
        log::info!("{}: all paths exist", props_path.display());
        return Ok(());
    }

    let verb = if args.check { "would remove" } else { "removed" };
    for path in &removed {
        println!("{}: {} missing path: {}", app::NAME, verb, path);
    }
    if args.check {
        return Ok(());
    }

    writer::write(&props_path, writer::leading_comment_header(&raw), &doc)?;
    println!("{}: {} updated", app::NAME, args.config.display());
    Ok(())
}
