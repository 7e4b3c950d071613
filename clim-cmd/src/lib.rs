//! Command implementations for the climatology CLI.
//!
//! The only command fetches the archive for the fixed location, computes
//! every derived dataset and writes the document the dashboard loads.

use clap::Subcommand;

pub mod config;
pub mod fetch;
pub mod output;
pub mod pipeline;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch Denver daily temperatures and write the climatology document
    Fetch {
        /// Output path for the generated script
        #[arg(short = 'o', long, default_value = config::DEFAULT_OUTPUT)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output } => {
            let today = chrono::Local::now().date_naive();
            let config = config::Config::denver(today).with_output(output);
            pipeline::run_fetch(&config).await
        }
    }
}
