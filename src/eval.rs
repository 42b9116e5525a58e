use anyhow::Result;
use clap::Args;

use crate::terminal::Terminal;

#[derive(Debug, Args, Clone)]
pub struct Command {
    #[arg(short, long, default_value = "menu")]
    text: Vec<String>,
}

pub fn execute_command(cmd: &Command) -> Result<()> {
    let mut terminal = Terminal::new()?;

    for text in &cmd.text {
        println!("{}\n", terminal.evaluate(text)?);
    }

    Ok(())
}
