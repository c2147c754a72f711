//! Request-echo service.
//!
//! ```text
//!   request ──▶ listener ──▶ middleware ──▶ route table ──▶ handler
//!                            (request id,    (api | path)    (extract one
//!                             trace, limits)                  field, wrap it)
//!   response ◀── JSON envelope ◀──────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use request_echo::config::{self, Deployment};
use request_echo::lifecycle;

#[derive(Parser)]
#[command(name = "request-echo")]
#[command(about = "Echoes request fields back as JSON", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route set to serve (overrides the config file).
    #[arg(short, long)]
    deployment: Option<Deployment>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("request-echo: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(deployment) = cli.deployment {
        config.deployment = deployment;
    }

    match lifecycle::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal startup error");
            eprintln!("request-echo: {}", e);
            ExitCode::FAILURE
        }
    }
}
