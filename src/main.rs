// src/main.rs
// objtrim - strip excluded materials and placeholder faces from OBJ files

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, run_filter};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.resolve_config()?;
    run_filter(&config)?;

    Ok(())
}
