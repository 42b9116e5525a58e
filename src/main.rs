use clap::{Parser, Subcommand};
use std::error::Error;
use tracing::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod eval;
mod serve;
mod shell;
mod terminal;
mod text;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Serve(serve::Command),
    Shell(shell::Command),
    Eval(eval::Command),
}

fn get_rust_log(verbose: u8) -> String {
    let fallback = match verbose {
        0 => "skincare=info,engine=info",
        _ => "skincare=debug,engine=debug",
    };

    let mut filter = std::env::var("RUST_LOG").unwrap_or_else(|_| fallback.into());

    if !filter.contains("tower_http=") {
        filter.push_str(",tower_http=info");
    }

    if !filter.contains("rustyline=") {
        filter.push_str(",rustyline=info");
    }

    filter
}

fn main() -> Result<(), Box<dyn Error>> {
    color_backtrace::install();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(get_rust_log(cli.verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("initialized, ready");

    match &cli.command {
        Some(Commands::Serve(cmd)) => Ok(serve::execute_command(cmd)?),
        Some(Commands::Shell(cmd)) => Ok(shell::execute_command(cmd)?),
        Some(Commands::Eval(cmd)) => Ok(eval::execute_command(cmd)?),
        None => Ok(()),
    }
}
