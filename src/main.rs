//! HireHub CLI binary.

use std::process;

use clap::Parser;
use log::debug;

use hirehub::cli::args::HireHubArgs;
use hirehub::cli::commands::execute_command;
use hirehub::cli::logging::init_logging;

fn main() {
    let args = HireHubArgs::parse();

    if let Err(e) = init_logging(args.verbosity()) {
        eprintln!("Warning: logging disabled: {e}");
    }
    debug!("hirehub {}", hirehub::VERSION);

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
