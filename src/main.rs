use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use demo_service::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    match args.get_command() {
        cli::Commands::Serve => {
            commands::serve::execute().await?;
        }
        cli::Commands::Traffic { base_url } => {
            commands::traffic::execute(base_url).await?;
        }
        cli::Commands::Version => {
            println!("demo-service v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
