mod cli;
mod config;
mod convert;
mod logging;
mod paint;
mod prompt;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = paint::run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
