//! wordlang command-line entry point

use clap::Parser;
use wordlang_cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
