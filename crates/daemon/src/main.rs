// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hydrogen daemon entry point.
//!
//! One coordinator thread drives the whole lifecycle: load the frozen
//! config snapshot, run the launch pipeline, idle until a termination
//! signal flips the stopping flag, then run the landing pipeline and
//! exit 0 when at least one subsystem stopped cleanly.

mod signals;
mod sink;
mod workers;

use anyhow::Context;
use clap::Parser;
use hy_config::AppConfig;
use hy_core::{LogSink, RunFlags, Severity, SystemClock};
use hy_launch::{LandingPipeline, LaunchPipeline, SysfsProbe};
use hy_registry::SubsystemRegistry;
use sink::TracingSink;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// How often the idle coordinator re-checks the stopping flag.
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "hydrogen", version, about = "Embedded multi-subsystem server")]
struct Cli {
    /// Path to the configuration file.
    #[arg(default_value = hy_config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("hydrogen: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match AppConfig::load(&cli.config) {
        Ok(config) => Some(config),
        Err(err) => {
            // Degrade, don't die: every evaluator reports the absence.
            eprintln!("hydrogen: {err} (starting without configuration)");
            None
        }
    };

    let _log_guard = init_tracing(config.as_ref());
    signals::install().context("installing signal handlers")?;

    let flags = RunFlags::process();
    flags.reset();

    let sink = TracingSink;
    sink.emit(
        "Launch",
        Severity::State,
        &format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    );

    let clock = SystemClock;
    let registry = SubsystemRegistry::new(clock.clone());
    let plans = workers::build_plans();
    let probe = SysfsProbe;

    let mut pipeline =
        LaunchPipeline::new(config.as_ref(), flags, &registry, &plans, &probe, &sink, clock);
    if let Ok(exe) = std::env::current_exe() {
        pipeline = pipeline.executable(exe);
    }
    let launch = pipeline.run();

    if !launch.aborted {
        while !flags.is_stopping() {
            std::thread::sleep(IDLE_POLL);
        }
    }

    let landing = LandingPipeline::new(flags, &registry, &plans, &sink).run();
    Ok(if landing.clean() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Console logging always; a file appender when the config enables the
/// file sink. The guard must live for the process lifetime.
fn init_tracing(
    config: Option<&AppConfig>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_path = config
        .and_then(|c| c.logging.as_ref())
        .and_then(|l| l.file.as_ref())
        .filter(|f| f.enabled)
        .and_then(|f| f.path.clone());

    match file_path {
        Some(path) => {
            let directory = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            let filename = path.file_name().map(PathBuf::from).unwrap_or_else(|| "hydrogen.log".into());
            let appender = tracing_appender::rolling::never(directory, filename);
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(file_writer.and(std::io::stdout))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(env_filter).init();
            None
        }
    }
}
