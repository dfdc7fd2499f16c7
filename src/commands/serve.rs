use anyhow::Result;
use colored::Colorize;
use demo_service::{config, server};

/// Execute the serve command
pub async fn execute() -> Result<()> {
    println!("{}", "Starting demo service...".green());

    let cfg = config::load_config()?;
    server::start_server(cfg).await
}
