//! Command-line surface of the `binvis` binary.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use clap::Parser;

/// Title printed at the top of the usage text.
pub const TITLE: &str = "binvis";

#[derive(Parser, Debug)]
#[command(name = "binvis", disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Render a binary file as a Hilbert-curve entropy map", long_about = None)]
pub struct Cli {
    /// Input file to analyze
    #[arg(allow_hyphen_values = true)]
    pub inputfile: PathBuf,

    /// Output PNG image (must not exist yet)
    #[arg(allow_hyphen_values = true)]
    pub outputfile: PathBuf,
}

/// Program name as invoked, without its directory.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| TITLE.to_string())
}

/// Usage text shown when the program is invoked with the wrong arguments.
pub fn usage(program: &str) -> String {
    format!(
        "{TITLE}\n\
         \n\
         Usage: {program} inputfile outputfile\n\
         \x20  inputfile - Input file to analyze\n\
         \x20  outputimage - Output PNG image\n"
    )
}
