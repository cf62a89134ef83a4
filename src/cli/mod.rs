use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{forecast_once, serve};

#[derive(Parser)]
#[command(name = "storecast")]
#[command(about = "Store sales forecasting web server and CLI tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Address and port to listen on
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:5000")]
        bind_address: String,
    },
    /// Run a single forecast and print the result as JSON
    Forecast {
        /// Store number to forecast
        #[arg(short, long)]
        store_number: i64,
        /// Forecast start date (YYYY-MM-DD)
        #[arg(short, long)]
        forecast_start_date: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::Forecast {
                store_number,
                forecast_start_date,
            } => {
                forecast_once(store_number, forecast_start_date).await?;
            }
        }
        Ok(())
    }
}
