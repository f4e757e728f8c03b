//! mkvtomp4 - convert H.264 Matroska files to MP4.

mod cli;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use mkvtomp4_core::config::{ConfigManager, RunConfig};
use mkvtomp4_core::correction::correct_profile;
use mkvtomp4_core::io::CommandRunner;
use mkvtomp4_core::logging::{self, MessagePrefix};
use mkvtomp4_core::orchestrator::{run_conversion, RunOutcome};

use cli::{Args, USAGE};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_status(&e));
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Help and version go to stdout and are not failures.
fn parse_exit_status(e: &clap::Error) -> u8 {
    if e.use_stderr() {
        1
    } else {
        0
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = ConfigManager::new(args.config.clone());
    config.load().context("Failed to load settings")?;

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    logging::init_tracing(config.settings().logging.level.raised_by(args.verbose));
    report_settings(&config);

    let Some(source) = args.files.first() else {
        eprintln!("{}", USAGE);
        anyhow::bail!("no input file given");
    };
    if args.files.len() > 1 {
        eprintln!("{}", USAGE);
        tracing::warn!("ignoring extra arguments after {}", source.display());
    }

    let program = std::env::args().next().unwrap_or_else(|| "mkvtomp4".to_string());

    // Option combinations are checked for every mode before anything is touched.
    let run_config = RunConfig::resolve(args.to_request(source, program), config.settings())?;
    let runner = CommandRunner::new(run_config.dry_run);

    if args.correct_profile_only {
        correct_profile(&runner, &run_config.program, &run_config.source)?;
        return Ok(());
    }

    match run_conversion(&run_config, &runner)? {
        RunOutcome::Completed if !run_config.dry_run => {
            let message = format!("wrote {}", run_config.output.display());
            tracing::info!("{}", MessagePrefix::Success.format(&message));
        }
        RunOutcome::Completed => {}
        RunOutcome::Stopped(stage) => {
            tracing::info!(
                "stopped before {} (--stop-before-{})",
                stage,
                stage.flag_name()
            );
        }
    }
    Ok(())
}

/// Logged once the subscriber exists; loading happens before it does.
fn report_settings(config: &ConfigManager) {
    match config.path() {
        Some(path) => tracing::debug!("loaded settings from {}", path.display()),
        None => tracing::debug!("using built-in settings"),
    }
}
