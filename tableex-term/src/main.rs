mod app;
mod cli;
mod clipboard;
mod error;
mod input;
mod render;
mod terminal;
mod timer;
mod viewport;

use std::fs::File;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::cli::Cli;
use crate::error::TermError;

async fn run(cli: Cli) -> Result<(), TermError> {
    let log_file = File::create(&cli.log_file)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut app = App::new(&cli)?;
    app.run().await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
