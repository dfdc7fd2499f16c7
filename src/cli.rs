use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "demo-service", version, about = "Demo service with observability")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP service (default)
    Serve,

    /// Run the interactive traffic generator
    Traffic {
        /// Base URL of the service to exercise
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// Show version information
    Version,
}

impl Cli {
    /// Get the command to execute, defaulting to Serve if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
