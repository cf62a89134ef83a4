use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod errors;
mod handlers;
mod router;
mod schemas;
#[cfg(test)]
mod tests;
mod views;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
