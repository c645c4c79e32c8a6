//! UK Biobank schema tools CLI.

use clap::Parser;
use std::io::{self, IsTerminal};
use ukb_cli::logging::init_logging;
use ukb_schema::{LookupOptions, SchemaPaths};

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_fetch, run_lookup, run_values};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let paths = SchemaPaths::resolve(cli.schema_dir.as_deref());
    let result = match &cli.command {
        Command::Lookup(args) => {
            let options = LookupOptions::default().with_verbose(log_config.is_verbose());
            run_lookup(args, &paths, options)
        }
        Command::Values(args) => run_values(args, &paths),
        Command::Fetch(args) => run_fetch(args, &paths),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
