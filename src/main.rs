//! Lanai - Main entrypoint.
//!
//! Command-line harness for the Lanai ternary search tree. It loads
//! configuration, initializes logging, and can build a sample trie to show
//! its size, longest-prefix and prefix-query results.

use clap::{Args as ClapArgs, Parser, Subcommand};
use lanai_lib::config::trie::QueueBackend;
use lanai_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig};
use lanai_lib::data_structures::{
    ArrayQueue, LanaiTrie, LanaiTrieError, LinkedQueue, QueueFactory, ResultQueue,
};
use lanai_lib::error::{
    report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult, TracingErrorReporter,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Keys inserted by `demo` when none are given.
const SAMPLE_KEYS: [&str; 11] = [
    "cats", "cape", "captain", "foes", "apple", "she", "root", "shells", "the", "thermos", "foo",
];

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build a sample trie and print query results
    Demo(DemoArgs),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Options for the `demo` subcommand.
#[derive(ClapArgs, Debug)]
struct DemoArgs {
    /// Comma-separated keys to insert
    #[clap(long, value_delimiter = ',', default_values_t = SAMPLE_KEYS.map(String::from))]
    keys: Vec<String>,

    /// Query for the longest-prefix lookup
    #[clap(long, default_value = "capetown")]
    query: String,

    /// Prefix to enumerate keys for
    #[clap(long, default_value = "ca")]
    prefix: String,

    /// Print the results as JSON
    #[clap(long)]
    json: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            keys: SAMPLE_KEYS.map(String::from).to_vec(),
            query: "capetown".to_string(),
            prefix: "ca".to_string(),
            json: false,
        }
    }
}

/// Results of one `demo` run.
#[derive(Serialize, Debug)]
struct DemoReport {
    size: usize,
    query: String,
    longest_prefix: Option<String>,
    prefix: String,
    matches: Vec<String>,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output stays clean.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from `args.keys` and runs the sample queries against it.
///
/// Misses are reported as empty results rather than errors.
fn run_demo<F: QueueFactory>(
    factory: F,
    config: &LanaiConfig,
    args: &DemoArgs,
) -> LanaiResult<DemoReport> {
    let trie = LanaiTrie::with_config(factory, config.trie.to_trie_config());
    for (i, key) in args.keys.iter().enumerate() {
        trie.put(key, i)?;
    }
    info!(size = trie.size(), "Sample trie built");

    let longest_prefix = match trie.longest_prefix(&args.query) {
        Ok(key) => Some(key),
        Err(LanaiTrieError::NotFound(_)) => None,
        Err(e) => return Err(e.into()),
    };

    let matches = match trie.starts_with(&args.prefix) {
        Ok(mut queue) => queue.drain_all(),
        Err(LanaiTrieError::NotFound(_)) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    Ok(DemoReport {
        size: trie.size(),
        query: args.query.clone(),
        longest_prefix,
        prefix: args.prefix.clone(),
        matches,
    })
}

fn print_report(report: &DemoReport, json: bool) -> LanaiResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("size: {}", report.size);
    match &report.longest_prefix {
        Some(key) => println!("longest prefix of {:?}: {key}", report.query),
        None => println!("longest prefix of {:?}: <none>", report.query),
    }
    println!("keys starting with {:?}:", report.prefix);
    for key in &report.matches {
        println!("  {key}");
    }
    Ok(())
}

/// Runs the selected subcommand against a loaded configuration.
fn execute(command: Command, config: &LanaiConfig) -> LanaiResult<()> {
    match command {
        Command::Demo(args) => {
            info!(backend = ?config.trie.queue_backend, "Running demo");
            let report = match config.trie.queue_backend {
                QueueBackend::Array => run_demo(ArrayQueue::<String>::new, config, &args)?,
                QueueBackend::Linked => run_demo(LinkedQueue::<String>::new, config, &args)?,
            };
            print_report(&report, args.json)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&LanaiConfig::default())
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let command = args.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    // Generating a config must not depend on an existing one
    let loaded = match &command {
        Command::GenConfig { .. } => Ok(LanaiConfig::default()),
        _ => ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load(),
    };

    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let lanai_config = match loaded {
        Ok(lanai_config) => lanai_config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config").with_details(format!(
                "while loading {:?}",
                args.config
            )));
            process::exit(1);
        }
    };
    config::init_global_config(lanai_config);

    let Some(global) = config::get_global_config() else {
        eprintln!("Global configuration unavailable");
        process::exit(1);
    };

    if let Err(e) = execute(command, global.get()) {
        report_error(ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
