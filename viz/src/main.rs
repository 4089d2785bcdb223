use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use anchor_viz::config::{Args, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(Args::parse())?;
    let cwd = std::env::current_dir().context("cannot read current directory")?;

    let path = anchor_viz::visualize(&config, &cwd).context("failed to visualize program")?;
    println!("{}", path.display());

    Ok(())
}
