//! ngr - npm gum run
//!
//! Entry point for the ngr CLI application.

use std::process::ExitCode;

use anyhow::Result;
use log::debug;

use npm_gum_run::cli::Cli;
use npm_gum_run::config::Config;
use npm_gum_run::error::{exit_code, NgrError};
use npm_gum_run::{run, System};

fn main() -> ExitCode {
    let _cli = Cli::parse_args();
    let config = Config::from_env();
    init_logging(&config);

    match execute(&config) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(err) => {
            if let Some(ngr_err) = err.downcast_ref::<NgrError>() {
                eprintln!("Error: {ngr_err}");
                return ExitCode::from(ngr_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn execute(config: &Config) -> Result<()> {
    debug!("config = {config:?}");

    let mut system = System::from_config(config);
    let outcome = run(&mut system)?;

    debug!("outcome = {outcome:?}");
    Ok(())
}

fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .format_timestamp(None)
        .init();
}
