use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{BASE_OPTIONS_FILE, EXTRA_OPTIONS_FILE};

#[derive(Parser, Debug)]
#[command(name = "flagconf")]
#[command(
    about = "Turn compiler_options.txt flag files into editor tooling config: \
             a flag list for completion engines or a .clangd file."
)]
pub struct Cli {
    /// Project directory. Flag files and the default output live here, and
    /// relative include paths resolve against it.
    #[arg(short = 'C', long = "dir", default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Base options file, relative to --dir.
    #[arg(long = "base", default_value = BASE_OPTIONS_FILE, global = true)]
    pub base: PathBuf,

    /// Extra options file, relative to --dir.
    #[arg(long = "extra", default_value = EXTRA_OPTIONS_FILE, global = true)]
    pub extra: PathBuf,

    /// More log output (-v info, -vv debug). RUST_LOG wins when set.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the flag list as a JSON settings mapping.
    Settings {
        /// Host parameters as a JSON object. Unknown keys are ignored.
        #[arg(short = 'r', long = "request")]
        request: Option<String>,
    },
    /// Write a .clangd file with a CompileFlags/Add list.
    Clangd {
        /// Output path, relative to --dir. Defaults to .clangd.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Print the document instead of writing a file.
        #[arg(long = "stdout", conflicts_with = "output")]
        stdout: bool,
    },
}
