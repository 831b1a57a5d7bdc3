use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;
use toutv_model::{AgentHandle, ModelError, ModelFactory};
use tracing_subscriber::EnvFilter;

/// Convert saved TOU.TV API responses into the typed model and print it as JSON
#[derive(Debug, Parser)]
#[command(name = "toutv-model", version, about)]
struct Cli {
    /// Log conversion details (skipped lineup items, details selection)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// A section listing with its lineups
    Section { file: PathBuf },
    /// A single section summary
    SectionSummary { file: PathBuf },
    /// A show with its seasons and episodes
    Show { file: PathBuf },
    /// A search result, or an array of search results
    Search { file: PathBuf },
    /// A single episode lineup item
    Episode { file: PathBuf },
    /// A details record of a show or an episode
    Details { file: PathBuf },
    /// The user profile, built from the account and the TOU.TV responses
    UserInfos { rc_file: PathBuf, toutv_file: PathBuf },
}

/// Errors reported by the command line tool
#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to decode JSON from {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Failed to encode output: {0}")]
    Output(serde_json::Error),
}

/// Reads and decodes a JSON document; `-` reads stdin
fn read_json(path: &Path) -> Result<Value, CliError> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: Serialize>(model: &T) -> Result<(), CliError> {
    let output = serde_json::to_string_pretty(model).map_err(CliError::Output)?;
    println!("{}", output);
    Ok(())
}

fn run(command: Command, factory: &ModelFactory) -> Result<(), CliError> {
    match command {
        Command::Section { file } => print_json(&factory.create_section(&read_json(&file)?)?),
        Command::SectionSummary { file } => {
            print_json(&factory.create_section_summary(&read_json(&file)?)?)
        }
        Command::Show { file } => print_json(&factory.create_show(&read_json(&file)?)?),
        Command::Search { file } => match read_json(&file)? {
            Value::Array(results) => {
                let summaries = results
                    .iter()
                    .map(|result| factory.create_search_show_summary(result))
                    .collect::<Result<Vec<_>, _>>()?;
                print_json(&summaries)
            }
            result => print_json(&factory.create_search_show_summary(&result)?),
        },
        Command::Episode { file } => {
            print_json(&factory.create_episode_lineup_item(&read_json(&file)?)?)
        }
        Command::Details { file } => print_json(&factory.create_details(&read_json(&file)?)?),
        Command::UserInfos {
            rc_file,
            toutv_file,
        } => {
            let rc = read_json(&rc_file)?;
            let toutv = read_json(&toutv_file)?;
            print_json(&factory.create_user_infos(&rc, &toutv)?)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let factory = ModelFactory::new(AgentHandle::new());
    tracing::debug!(agent = %factory.agent(), "Created model factory");

    if let Err(e) = run(cli.command, &factory) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
