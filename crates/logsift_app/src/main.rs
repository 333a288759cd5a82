mod cli;
mod logging;
mod run;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::initialize(logging::LogDestination::Terminal);
    run::run(cli)
}
