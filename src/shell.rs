use anyhow::Result;
use clap::Args;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::*;

use crate::terminal::Terminal;

#[derive(Debug, Args)]
pub struct Command {
    #[arg(long, default_value = "history.txt")]
    history: PathBuf,
}

pub fn execute_command(cmd: &Command) -> Result<()> {
    let mut terminal = Terminal::new()?;

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(&cmd.history).is_err() {
        println!("No previous history.");
    }

    println!("{}\n", terminal.evaluate("menu")?);

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                rl.add_history_entry(line.as_str())?;

                match terminal.evaluate(&line) {
                    Ok(text) => println!("{}\n", text),
                    Err(e) => warn!("rendering failed: {:?}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("ctrl-c");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("ctrl-d");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(rl.save_history(&cmd.history)?)
}
