mod cli;

use clap::Parser;
use log::error;
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();
    cli::log::init(&args);

    match cloudlocate::locate() {
        Ok(result) => {
            cli::log::detection_result(&result);
            cli::output::detection_result(&result);
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}
