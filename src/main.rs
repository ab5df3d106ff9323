mod config;
mod helper;
mod lessons;
mod pause;
mod runner;

use helper::{log_error::log_anyhow_error_and_sources, logger::ConsoleLogger};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use pause::LinePause;
use runner::DemoRunner;
use std::{io, process::ExitCode};

static LOGGER: ConsoleLogger = ConsoleLogger;

fn main() -> ExitCode {
    init_logger();

    match run() {
        Ok(()) => {
            debug!("all lessons done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_anyhow_error_and_sources(&e, "run lessons");
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    // only fails if a logger was already set
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(config::DEFAULT_LOG_LEVEL);
    }
    debug!("{} started", config::APP_NAME);
}

fn run() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut runner = DemoRunner::new(stdout.lock(), LinePause::new(stdin.lock()));
    runner.run(&lessons::ALL_LESSONS)
}
