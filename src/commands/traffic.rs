use anyhow::Result;
use demo_service::{config, traffic::{self, TrafficGenerator}};
use tokio::io::BufReader;

/// Execute the traffic command
///
/// Loads the traffic section of the config, applies the optional base URL
/// override, and hands off to the interactive menu.
pub async fn execute(base_url: Option<String>) -> Result<()> {
    let cfg = config::load_config()?;

    let mut traffic_cfg = cfg.traffic;
    if let Some(url) = base_url {
        traffic_cfg.base_url = url;
    }

    let generator = TrafficGenerator::new(&traffic_cfg)?;
    traffic::run_interactive(generator, BufReader::new(tokio::io::stdin())).await
}
