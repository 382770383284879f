use retrier_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // A log dir we cannot write to shouldn't stop the command from running.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("retrier error: {:#}", err);
        std::process::exit(1);
    }
}
