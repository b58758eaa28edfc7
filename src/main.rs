mod cli;

use askline::error::Result;
use askline::prompt::{LineConsole, TerminalConsole};
use clap::Parser;
use cli::{App, Cli, Settings};
use colored::*;
use std::io::IsTerminal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenv::dotenv().ok();

    // Logs go to stderr so they never land between a prompt and its answer
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App::new(Settings::from_env());

    let plain = cli.plain || !std::io::stdin().is_terminal();
    info!("Starting askline (plain console: {})", plain);

    let result = if plain {
        app.start(&mut LineConsole::stdio(), cli.command)
    } else {
        app.start(&mut TerminalConsole::new(), cli.command)
    };

    if let Err(e) = &result {
        error!("askline failed: {:?}", e);
        eprintln!("{} {}", "Error:".red(), e.to_string().red());
    }
    result
}
