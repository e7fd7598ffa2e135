//! API Tester command-line entry point.
//!
//! Reads a request description as JSON, executes it, prints a one-line
//! summary followed by the normalized result, and optionally appends the
//! pair to a history file.
//!
//! # Exit codes
//!
//! - 0: the call succeeded (`errorType` is `NONE`)
//! - 1: the call completed with a classified error
//! - 2: invalid arguments, unreadable input, or a history/config failure
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use api_tester::config::{get_config, load_config_file};
use api_tester::executor::execute;
use api_tester::formatter::{format_body, format_summary, format_timestamp, StatusClass};
use api_tester::history::{append_entry, maintain_history_limit, HistoryEntry};
use api_tester::models::{RequestDescription, ResponseResult};
use api_tester::transport::ReqwestTransport;
use log::{debug, info};
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: api-tester <request.json | -> [--history <file>] [--config <settings.json>] [--body-only]";

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    /// Request description file, `None` for stdin.
    input: Option<PathBuf>,
    history: Option<PathBuf>,
    config: Option<PathBuf>,
    body_only: bool,
}

impl CliArgs {
    fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut input_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--history" => {
                    let value = args.next().ok_or("--history requires a file path")?;
                    parsed.history = Some(PathBuf::from(value));
                }
                "--config" => {
                    let value = args.next().ok_or("--config requires a file path")?;
                    parsed.config = Some(PathBuf::from(value));
                }
                "--body-only" => parsed.body_only = true,
                "-" if !input_seen => input_seen = true,
                other if other.starts_with("--") => {
                    return Err(format!("unknown option: {}", other));
                }
                other if !input_seen => {
                    parsed.input = Some(PathBuf::from(other));
                    input_seen = true;
                }
                other => return Err(format!("unexpected argument: {}", other)),
            }
        }

        if !input_seen {
            return Err("missing request description".to_string());
        }

        Ok(parsed)
    }
}

fn read_description(input: Option<&PathBuf>) -> Result<RequestDescription, Box<dyn Error>> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&content)?)
}

/// Summary line prefixed with the local completion time, e.g.
/// `14:03:27 200 OK (42ms)`.
fn summary_line(result: &ResponseResult) -> String {
    format!(
        "{} {}",
        format_timestamp(result.timestamp),
        format_summary(result)
    )
}

async fn run(args: &CliArgs) -> Result<ResponseResult, Box<dyn Error>> {
    if let Some(path) = &args.config {
        load_config_file(path)?;
    }

    let description = read_description(args.input.as_ref())?;
    let transport = ReqwestTransport::new(&get_config())?;

    let result = execute(&description, &transport).await;
    debug!(
        "response status {} is {}",
        result.status,
        StatusClass::from_status(result.status).as_str()
    );

    if args.body_only {
        println!("{}", format_body(&result.body));
    } else {
        println!("{}", summary_line(&result));
        if let Some(message) = &result.error_message {
            eprintln!("{}", message);
        }
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    if let Some(path) = &args.history {
        let entry = HistoryEntry::new(description, Some(result.clone()));
        append_entry(path, &entry)?;
        let removed = maintain_history_limit(path, get_config().history_limit)?;
        info!(
            "recorded history entry {} in {} ({} old entries removed)",
            entry.id,
            path.display(),
            removed
        );
    }

    Ok(result)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("api-tester: {}\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(&args).await {
        Ok(result) if result.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("api-tester: {}", err);
            ExitCode::from(2)
        }
    }
}
