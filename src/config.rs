use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub work: WorkConfig,
    pub traffic: TrafficConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Parameters for the /simulate-work chaos injection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkConfig {
    pub min_delay_seconds: f64,
    pub max_delay_seconds: f64,
    pub error_rate: f64,
    /// Fixed RNG seed for deterministic behavior; entropy-seeded when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrafficConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Concurrent workers for continuous traffic
    pub workers: usize,
    pub burst_size: usize,
    pub burst_workers: usize,
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            min_delay_seconds: 0.1,
            max_delay_seconds: 2.0,
            error_rate: 0.1,
            seed: None,
        }
    }
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 5,
            workers: 10,
            burst_size: 20,
            burst_workers: 20,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("work.min_delay_seconds", 0.1)?
        .set_default("work.max_delay_seconds", 2.0)?
        .set_default("work.error_rate", 0.1)?
        .set_default("traffic.base_url", "http://localhost:8000")?
        .set_default("traffic.timeout_seconds", 5)?
        .set_default("traffic.workers", 10)?
        .set_default("traffic.burst_size", 20)?
        .set_default("traffic.burst_workers", 20)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("DEMO_SERVICE").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&cfg.work.error_rate) {
        anyhow::bail!(
            "work.error_rate must be between 0.0 and 1.0, got {}",
            cfg.work.error_rate
        );
    }

    if cfg.work.min_delay_seconds < 0.0 {
        anyhow::bail!("work.min_delay_seconds cannot be negative");
    }

    if cfg.work.min_delay_seconds > cfg.work.max_delay_seconds {
        anyhow::bail!(
            "work.min_delay_seconds ({}) exceeds work.max_delay_seconds ({})",
            cfg.work.min_delay_seconds,
            cfg.work.max_delay_seconds
        );
    }

    if cfg.traffic.workers == 0 || cfg.traffic.burst_workers == 0 {
        anyhow::bail!("traffic worker pools must have at least one worker");
    }

    if cfg.traffic.burst_size == 0 {
        anyhow::bail!("traffic.burst_size must be at least 1");
    }

    if cfg.traffic.timeout_seconds == 0 {
        anyhow::bail!("traffic.timeout_seconds must be at least 1");
    }

    Ok(())
}
