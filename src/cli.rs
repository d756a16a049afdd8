use std::path::PathBuf;

use palc::{Parser, Subcommand};

/// CLI arguments
#[derive(Parser)]
#[command(name = "loxvm", after_long_help = "A bytecode virtual machine for the Lox language.")]
pub struct Cli {
    /// Program mode
    #[command(subcommand)]
    pub mode: Mode,
}

/// Program mode
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Run a script file
    Run { path: PathBuf },
    /// Interactive prompt
    Repl,
    /// Compile a script file and print its bytecode
    Dump { path: PathBuf },
}
