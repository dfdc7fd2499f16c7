use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::{io::Write, sync::Arc, time::Duration};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, Lines},
    sync::Semaphore,
    time::{sleep, Instant},
};

use crate::config::TrafficConfig;

/// Endpoints the generator exercises; /metrics is left to the scraper
const ENDPOINTS: [&str; 3] = ["/", "/health", "/simulate-work"];

/// Client-side load generator for the demo service
#[derive(Clone)]
pub struct TrafficGenerator {
    client: reqwest::Client,
    base_url: String,
    workers: usize,
    burst_size: usize,
    burst_workers: usize,
}

impl TrafficGenerator {
    pub fn new(cfg: &TrafficConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            workers: cfg.workers,
            burst_size: cfg.burst_size,
            burst_workers: cfg.burst_workers,
        })
    }

    /// Make a single request to a random endpoint
    ///
    /// Transport errors and timeouts are reported on the console and
    /// swallowed; the caller only sees the status code or None.
    pub async fn make_request(&self) -> Option<u16> {
        let endpoint = ENDPOINTS[rand::thread_rng().gen_range(0..ENDPOINTS.len())];
        let url = format!("{}{}", self.base_url, endpoint);

        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                println!("{} {} -> {}", "✓".green(), endpoint, status);
                Some(status)
            }
            Err(e) => {
                println!("{} {} -> Error: {}", "✗".red(), endpoint, e);
                None
            }
        }
    }

    /// Generate continuous traffic for the given duration
    ///
    /// Submits one request per interval (1/rate, jittered by ±0.1s) onto a
    /// pool bounded at `workers` in-flight tasks, without awaiting each
    /// request before scheduling the next. Returns the number of requests
    /// submitted.
    pub async fn generate_traffic(&self, duration: Duration, requests_per_second: f64) -> usize {
        println!(
            "Starting traffic generation for {} seconds",
            duration.as_secs_f64()
        );
        println!("Target: {} requests per second", requests_per_second);

        let request_interval = 1.0 / requests_per_second;
        let deadline = Instant::now() + duration;
        let pool = Arc::new(Semaphore::new(self.workers));
        let mut submitted = 0;

        while Instant::now() < deadline {
            // Blocks only when all workers are busy
            let permit = pool
                .clone()
                .acquire_owned()
                .await
                .expect("traffic pool semaphore closed");

            let generator = self.clone();
            tokio::spawn(async move {
                let _permit = permit;
                generator.make_request().await;
            });
            submitted += 1;

            // Jitter to avoid perfect timing
            let pause = request_interval + rand::thread_rng().gen_range(-0.1..=0.1);
            if pause > 0.0 {
                sleep(Duration::from_secs_f64(pause)).await;
            }
        }

        println!("Traffic generation completed!");
        submitted
    }

    /// Fire `burst_size` concurrent requests and wait for all of them
    pub async fn burst_traffic(&self) -> Vec<Option<u16>> {
        println!("Generating burst traffic...");

        let pool = Arc::new(Semaphore::new(self.burst_workers));
        let tasks: Vec<_> = (0..self.burst_size)
            .map(|_| {
                let generator = self.clone();
                let pool = pool.clone();
                tokio::spawn(async move {
                    let _permit = pool
                        .acquire_owned()
                        .await
                        .expect("burst pool semaphore closed");
                    generator.make_request().await
                })
            })
            .collect();

        let results = futures::future::join_all(tasks)
            .await
            .into_iter()
            .map(|joined| joined.unwrap_or(None))
            .collect();

        println!("Burst traffic completed!");
        results
    }
}

/// Interactive traffic menu
///
/// Generic over the input source so tests can drive it with scripted
/// lines; the binary passes a buffered stdin reader.
pub async fn run_interactive<R>(generator: TrafficGenerator, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("Demo Service Traffic Simulator");
    println!("{}", "=".repeat(40));

    let mut lines = input.lines();

    loop {
        println!();
        println!("Select traffic pattern:");
        println!("1. Continuous traffic (5 minutes)");
        println!("2. Burst traffic");
        println!("3. Custom continuous traffic");
        println!("4. Exit");
        print!("\nEnter choice (1-4): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF on stdin
            break;
        };

        match line.trim() {
            "1" => {
                generator
                    .generate_traffic(Duration::from_secs(300), 2.0)
                    .await;
            }
            "2" => {
                generator.burst_traffic().await;
            }
            "3" => match read_custom_params(&mut lines).await? {
                Some((duration, rate)) => {
                    generator
                        .generate_traffic(Duration::from_secs(duration), rate)
                        .await;
                }
                None => println!("Invalid input. Please enter numbers."),
            },
            "4" => break,
            _ => println!("Invalid choice. Please select 1-4."),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Prompt for custom duration and rate; None on non-numeric input,
/// a non-positive rate, or EOF
async fn read_custom_params<R>(lines: &mut Lines<R>) -> Result<Option<(u64, f64)>>
where
    R: AsyncBufRead + Unpin,
{
    print!("Duration (seconds): ");
    std::io::stdout().flush()?;
    let Some(duration_line) = lines.next_line().await? else {
        return Ok(None);
    };

    print!("Requests per second: ");
    std::io::stdout().flush()?;
    let Some(rate_line) = lines.next_line().await? else {
        return Ok(None);
    };

    let duration = duration_line.trim().parse::<u64>();
    let rate = rate_line.trim().parse::<f64>();

    match (duration, rate) {
        (Ok(duration), Ok(rate)) if rate > 0.0 => Ok(Some((duration, rate))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_strips_trailing_slash() {
        let cfg = TrafficConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..TrafficConfig::default()
        };
        let generator = TrafficGenerator::new(&cfg).unwrap();
        assert_eq!(generator.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_endpoint_set_excludes_metrics() {
        assert_eq!(ENDPOINTS.len(), 3);
        assert!(!ENDPOINTS.contains(&"/metrics"));
    }

    fn scripted(input: &'static str) -> Lines<&'static [u8]> {
        input.as_bytes().lines()
    }

    fn idle_generator() -> TrafficGenerator {
        // Never contacted by the menu paths these tests take
        TrafficGenerator::new(&TrafficConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_menu_exits_on_choice_four() {
        let result = run_interactive(idle_generator(), "4\n".as_bytes()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_menu_exits_cleanly_on_eof() {
        let result = run_interactive(idle_generator(), "".as_bytes()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_menu_loops_past_invalid_choice() {
        // "9" and "banana" are rejected, the menu re-shows, "4" exits
        let result = run_interactive(idle_generator(), "9\nbanana\n4\n".as_bytes()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_menu_recovers_from_non_numeric_custom_params() {
        // Choice 3 with junk parameters falls back to the menu
        let result = run_interactive(idle_generator(), "3\nabc\n2.0\n4\n".as_bytes()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_custom_params_accepts_numbers() {
        let mut lines = scripted("10\n2.5\n");
        let params = read_custom_params(&mut lines).await.unwrap();
        assert_eq!(params, Some((10, 2.5)));
    }

    #[tokio::test]
    async fn test_custom_params_rejects_non_numeric_duration() {
        let mut lines = scripted("ten\n2.0\n");
        assert_eq!(read_custom_params(&mut lines).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_custom_params_rejects_non_numeric_rate() {
        let mut lines = scripted("10\nfast\n");
        assert_eq!(read_custom_params(&mut lines).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_custom_params_rejects_non_positive_rate() {
        let mut lines = scripted("10\n0\n");
        assert_eq!(read_custom_params(&mut lines).await.unwrap(), None);

        let mut lines = scripted("10\n-2\n");
        assert_eq!(read_custom_params(&mut lines).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_custom_params_handles_eof_mid_prompt() {
        let mut lines = scripted("10\n");
        assert_eq!(read_custom_params(&mut lines).await.unwrap(), None);
    }
}
