//! Sample client for the request-echo routes.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "echo-cli")]
#[command(about = "Sends sample requests to a running request-echo service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3031")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// GET /api/message, optionally with ?message=
    Message { text: Option<String> },
    /// GET /api/header-message, optionally with X-Custom-Header
    Header { value: Option<String> },
    /// POST /api/message with a JSON body
    Post { json: String },
    /// PUT /api/message/{id}
    Put { id: String },
    /// DELETE /api/message/{id}
    Delete { id: String },
    /// GET /message/{message} (path deployment)
    Path { message: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = reqwest::Url::parse(&cli.url)?;

    let request = match cli.command {
        Commands::Message { text } => {
            let req = client.get(endpoint(&base, &["api", "message"])?);
            match text {
                Some(text) => req.query(&[("message", text)]),
                None => req,
            }
        }
        Commands::Header { value } => {
            let req = client.get(endpoint(&base, &["api", "header-message"])?);
            match value {
                Some(value) => req.header("X-Custom-Header", value),
                None => req,
            }
        }
        Commands::Post { json } => {
            let body: Value = serde_json::from_str(&json)?;
            client.post(endpoint(&base, &["api", "message"])?).json(&body)
        }
        Commands::Put { id } => client.put(endpoint(&base, &["api", "message", &id])?),
        Commands::Delete { id } => client.delete(endpoint(&base, &["api", "message", &id])?),
        Commands::Path { message } => client.get(endpoint(&base, &["message", &message])?),
    };

    print_response(request.send().await?).await
}

/// Append path segments to the base URL, percent-encoding each one.
fn endpoint(base: &reqwest::Url, segments: &[&str]) -> Result<reqwest::Url, Box<dyn std::error::Error>> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("'{}' cannot be used as a base URL", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    println!("{} {}", status, render_body(&text)?);
    Ok(exit_code(status))
}

/// Pretty-print JSON bodies, pass anything else through.
fn render_body(text: &str) -> Result<String, serde_json::Error> {
    match serde_json::from_str::<Value>(text) {
        Ok(json) => serde_json::to_string_pretty(&json),
        Err(_) => Ok(text.to_string()),
    }
}

fn exit_code(status: reqwest::StatusCode) -> ExitCode {
    if status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
