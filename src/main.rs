//! Hua tokenizer command line entrypoint.
//!
//! Loads configuration, initializes logging and runs one subcommand. Tokens
//! go to stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use hua_lib::config::{ConfigLoader, HuaConfig, LogConfig, Validate, ENV_PREFIX};
use hua_lib::data_structures::Token;
use hua_lib::error::config::ConfigError;
use hua_lib::error::{
    report_error, set_error_reporter, ErrorContext, HuaError, HuaResult, TracingErrorReporter,
};
use hua_lib::vocabulary::VocabularyLoader;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Hua tokenizer.
#[derive(Parser, Debug)]
#[clap(name = "hua", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Split text into vocabulary tokens
    Split(SplitArgs),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Arguments of the `split` subcommand.
#[derive(clap::Args, Debug)]
struct SplitArgs {
    /// Vocabulary word list, one word per line (overrides `vocabulary.path`)
    #[clap(short, long, value_parser)]
    vocab: Option<PathBuf>,

    /// Marker for unknown spans (overrides `tokenizer.unknown_marker`)
    #[clap(short, long)]
    unknown: Option<String>,

    /// Unmatched span to drop instead of marking; repeatable
    #[clap(short, long = "ignore")]
    ignore: Vec<String>,

    /// Print each input's tokens as a JSON array
    #[clap(long)]
    json: bool,

    /// Text to split; each stdin line is split when absent
    text: Option<String>,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> HuaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| HuaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Writes one input's tokens, either one per line or as a JSON array.
fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], marker: &str, json: bool) -> HuaResult<()> {
    if json {
        let rendered: Vec<&str> = tokens.iter().map(|token| token.as_str(marker)).collect();
        serde_json::to_writer(&mut *out, &rendered)?;
        writeln!(out)?;
    } else {
        for token in tokens {
            writeln!(out, "{}", token.as_str(marker))?;
        }
    }
    Ok(())
}

fn run_split(args: SplitArgs, config: HuaConfig) -> HuaResult<()> {
    let mut tokenizer = config.tokenizer;
    if let Some(marker) = args.unknown {
        tokenizer.unknown_marker = marker;
    }
    tokenizer.ignore_tokens.extend(args.ignore);
    tokenizer.validate()?;

    let path = args
        .vocab
        .or_else(|| config.vocabulary.path.clone())
        .ok_or_else(|| ConfigError::MissingValue("vocabulary.path".to_string()))?;

    let trie = VocabularyLoader::from_config(&config.vocabulary).load_file(&path)?;
    let options = tokenizer.split_options();
    let marker = tokenizer.unknown_marker.as_str();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.text {
        Some(text) => write_tokens(&mut out, &trie.split(&text, &options), marker, args.json)?,
        None => {
            for (i, line) in io::stdin().lock().lines().enumerate() {
                let line = line?;
                // Blank separator between inputs in line mode
                if i > 0 && !args.json {
                    writeln!(out)?;
                }
                write_tokens(&mut out, &trie.split(&line, &options), marker, args.json)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn run(command: Command, config: HuaConfig) -> HuaResult<()> {
    match command {
        Command::Split(args) => run_split(args, config),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&config)
                .map_err(|e| HuaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    // gen-config must work even when the current configuration is broken
    let config = match &args.command {
        Command::GenConfig { .. } => Ok(HuaConfig::default()),
        _ => ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load(),
    };

    let log_config = config
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let result = config
        .map_err(HuaError::from)
        .and_then(|config| run(args.command, config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(ErrorContext::new(e, "cli"));
            ExitCode::FAILURE
        }
    }
}
