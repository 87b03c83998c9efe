//! ghostpress CLI
//!
//! Entry point for the `ghostpress` command-line tool.

#![allow(clippy::print_stdout)]

mod terminal;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ghostpress_core::{AlwaysConfirm, ConfirmPublish, PublishService};
use ghostpress_domain::constants::DIAGNOSTICS_TARGET;
use ghostpress_domain::PublishConfig;
use ghostpress_infra::{config, folder_documents, folder_of, load_document, GhostAdminClient};
use tracing_subscriber::EnvFilter;

use crate::terminal::{PromptConfirm, TerminalObserver};

#[derive(Parser)]
#[command(name = "ghostpress")]
#[command(about = "Publish Markdown notes to a Ghost blog", version)]
struct Cli {
    /// Path to a config file (default: probe ghostpress.toml, config.toml, ...)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Log outgoing payloads and API responses
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a single note
    Publish {
        /// Markdown file to publish
        file: PathBuf,
    },

    /// Publish every note in a folder
    PublishFolder {
        /// Folder to publish, or a note whose folder should be published
        path: PathBuf,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.clone())?;
    if cli.debug {
        config.debug_log = true;
    }
    init_tracing(config.debug_log);

    let client = GhostAdminClient::new().context("failed to create Ghost client")?;
    let service = PublishService::new(Arc::new(client), Arc::new(TerminalObserver));

    let succeeded = match cli.command {
        Commands::Publish { file } => run_publish(&service, &config, &file).await?,
        Commands::PublishFolder { path, yes } => {
            let confirm: &dyn ConfirmPublish = if yes { &AlwaysConfirm } else { &PromptConfirm };
            run_publish_folder(&service, &config, &path, confirm).await?
        }
    };

    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn load_config(path: Option<PathBuf>) -> Result<PublishConfig> {
    let loaded = match path {
        Some(path) => config::load_from_file(Some(path)),
        None => config::load(),
    };
    loaded.context("failed to load configuration")
}

fn init_tracing(debug_log: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if debug_log {
        if let Ok(directive) = format!("{DIAGNOSTICS_TARGET}=debug").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug_log)
        .init();
}

async fn run_publish(
    service: &PublishService,
    config: &PublishConfig,
    file: &std::path::Path,
) -> Result<bool> {
    let document =
        load_document(file).with_context(|| format!("failed to read {}", file.display()))?;

    let result = service.publish_note(&document, config).await;
    println!("{}", result.notice());
    Ok(result.success)
}

async fn run_publish_folder(
    service: &PublishService,
    config: &PublishConfig,
    path: &std::path::Path,
    confirm: &dyn ConfirmPublish,
) -> Result<bool> {
    let folder = folder_of(path)?;
    let entries = folder_documents(&folder)
        .with_context(|| format!("failed to list notes in {}", folder.display()))?;

    let outcome = service.publish_folder(&entries, config, confirm).await;
    println!("{}", outcome.notice());
    Ok(outcome.is_success())
}
