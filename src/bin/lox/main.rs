use std::fs;
use std::path::Path;
use std::process::exit;

use anyhow::Context;
use clap::Parser;
use loxscan::cli::Cli;
use loxscan::{run, Diagnostics, EXIT_DATA_ERROR};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(script) = &cli.script {
        let code =
            fs::read_to_string(script).with_context(|| format!("script `{}`", script.display()))?;
        let mut diags = Diagnostics::default();
        run(script, &code, &mut diags)?;
        if diags.had_error() {
            exit(EXIT_DATA_ERROR);
        }
    } else {
        repl()?;
    }

    Ok(())
}

fn repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let prompt = Path::new("<stdin>");
    let mut diags = Diagnostics::default();
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                run(prompt, &line, &mut diags)?;
                diags.clear();
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(ReadlineError::Interrupted) => {
                eprintln!("user exit");
                exit(1);
            }
            Err(e) => return Err(e),
        }
    }
}
