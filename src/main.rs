//! `binvis inputfile outputfile`: write a Hilbert-curve entropy map of a file as PNG.

#![warn(clippy::all, clippy::pedantic)]

use std::process;

use clap::Parser;

use binvis::cli::{program_name, usage, Cli};
use binvis::{visualize_file, RenderOptions, TextReporter};

fn main() {
    env_logger::init();

    let program = program_name(std::env::args_os().next().as_deref());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            log::debug!("argument error: {e}");
            print!("{}", usage(&program));
            process::exit(1);
        }
    };

    let mut reporter = TextReporter::stdout();
    if let Err(e) = visualize_file(
        &cli.inputfile,
        &cli.outputfile,
        &RenderOptions::default(),
        &mut reporter,
    ) {
        eprintln!("{e}");
        process::exit(1);
    }
}
