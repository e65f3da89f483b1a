use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Print the tokens of a Lox script, or of each line typed at the prompt")]
pub struct Cli {
    /// Scan a script
    pub script: Option<PathBuf>,
}
