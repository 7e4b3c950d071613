//! clim-cli - builds the Denver daily temperature climatology document.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "clim-cli",
    version,
    about = "Denver daily temperature climatology builder"
)]
struct Cli {
    #[command(subcommand)]
    command: clim_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    clim_cmd::run(cli.command).await
}
