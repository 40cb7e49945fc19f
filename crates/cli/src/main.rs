//! Unique Jobs CLI - inspect how a job resolves to a lock strategy
//!
//! Configuration comes from the `UNIQUE_JOBS_*` environment variables;
//! flags override them per invocation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unique_jobs_core::port::WorkerOptionsProvider;
use unique_jobs_core::{JobItem, LockType, UniqueJobsConfig, UniquenessService, WorkerOptions};

const DEFAULT_LOG_FILTER: &str = "unique_jobs_core=info,unique_jobs_cli=info";

#[derive(Parser)]
#[command(name = "unique-jobs")]
#[command(about = "Job uniqueness lock resolution", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log format (pretty or json)
    #[arg(long, global = true, env = "UNIQUE_JOBS_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve uniqueness settings for a job item
    Resolve {
        /// Job item as JSON object
        #[arg(long)]
        item: String,

        /// Worker options as JSON object (omit if the worker declares none)
        #[arg(long)]
        worker_options: Option<String>,

        /// Override the default lock type
        #[arg(long)]
        default_lock: Option<LockType>,

        /// Treat uniqueness as globally disabled
        #[arg(long)]
        disabled: bool,
    },

    /// List registered lock types
    Locks,
}

#[derive(Debug, Tabled)]
struct Row {
    field: &'static str,
    value: String,
}

impl Row {
    fn new(field: &'static str, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

fn init_logging(log_format: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match log_format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn parse_item(raw: &str) -> Result<JobItem> {
    let value: serde_json::Value = serde_json::from_str(raw).context("Invalid JSON job item")?;
    JobItem::from_value(value).context("Job item must be a JSON object")
}

fn parse_worker_options(raw: &str) -> Result<WorkerOptions> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("Invalid JSON worker options")?;
    WorkerOptions::from_value(value).context("Worker options must be a JSON object")
}

fn resolve(
    config: UniqueJobsConfig,
    item: &JobItem,
    worker_options: Option<&WorkerOptions>,
) -> Result<Vec<Row>> {
    let service = UniquenessService::with_config(config);
    let worker = worker_options.map(|options| options as &dyn WorkerOptionsProvider);
    let resolution = service.resolve(item, worker);

    let mut rows = vec![
        Row::new("unique_enabled", resolution.unique_enabled()),
        Row::new("log_duplicate_payload", resolution.log_duplicate_payload()),
        Row::new("options_source", resolution.options_source()),
        Row::new("unique_lock", resolution.unique_lock()),
    ];

    let lock = resolution.lock()?;
    rows.push(Row::new("lock_strategy", lock.lock_type()));

    Ok(rows)
}

/// Single-line failure report, including the error's context chain
fn failure_line(e: &anyhow::Error) -> String {
    format!("✗ {:#}", e)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_format);

    match cli.command {
        Commands::Resolve {
            item,
            worker_options,
            default_lock,
            disabled,
        } => {
            let mut config =
                UniqueJobsConfig::from_env().context("Invalid UNIQUE_JOBS_* configuration")?;
            if let Some(default_lock) = default_lock {
                config = config.with_default_lock(default_lock);
            }
            if disabled {
                config = config.with_enabled(false);
            }

            let item = parse_item(&item)?;
            let worker_options = worker_options
                .as_deref()
                .map(parse_worker_options)
                .transpose()?;

            info!(enabled = config.enabled, default_lock = %config.default_lock, "Resolving job item");

            match resolve(config, &item, worker_options.as_ref()) {
                Ok(rows) => {
                    println!("{}", "✓ Lock resolved".green().bold());
                    println!();
                    println!("{}", Table::new(rows));
                }
                Err(e) => {
                    eprintln!("{}", failure_line(&e).red().bold());
                    std::process::exit(1);
                }
            }
        }

        Commands::Locks => {
            let service = UniquenessService::with_config(UniqueJobsConfig::default());
            let rows: Vec<Row> = service
                .registry()
                .lock_types()
                .map(|lock_type| Row::new("lock_type", lock_type))
                .collect();

            println!("{}", "Registered lock types".cyan().bold());
            println!();
            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(rows: &'a [Row], field: &str) -> &'a str {
        &rows.iter().find(|row| row.field == field).unwrap().value
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(parse_item("[1, 2]").is_err());
        assert!(parse_item("{").is_err());
        assert!(parse_worker_options("\"until_executed\"").is_err());
    }

    #[test]
    fn test_resolve_rows() {
        let item = parse_item(r#"{"unique": "until_executing", "log_duplicate_payload": true}"#).unwrap();
        let rows = resolve(UniqueJobsConfig::default(), &item, None).unwrap();

        assert_eq!(value_of(&rows, "unique_enabled"), "true");
        assert_eq!(value_of(&rows, "log_duplicate_payload"), "true");
        assert_eq!(value_of(&rows, "options_source"), "empty");
        assert_eq!(value_of(&rows, "lock_strategy"), "until_executing");
    }

    #[test]
    fn test_resolve_unknown_lock() {
        let item = parse_item(r#"{"unique": "bogus_lock"}"#).unwrap();
        let err = resolve(UniqueJobsConfig::default(), &item, None).unwrap_err();

        assert!(err.to_string().contains("bogus_lock"));
    }

    #[test]
    fn test_failure_line_reports_error_once() {
        let item = parse_item(r#"{"unique": "bogus_lock"}"#).unwrap();
        let err = resolve(UniqueJobsConfig::default(), &item, None).unwrap_err();

        let line = failure_line(&err);
        assert_eq!(line, "✗ No implementation for `unique: :bogus_lock`");
        assert_eq!(line.matches("bogus_lock").count(), 1);
    }
}
