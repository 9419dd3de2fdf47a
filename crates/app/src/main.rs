//! Nebula board backup tool - Main Entry Point
//!
//! Wires the file system, key-value store and clock adapters into the
//! board header's backup and restore actions.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nebula_application::ports::{CancellationToken, FileSystem};
use nebula_application::{BoardHeader, ImportBackup};
use nebula_domain::Tab;
use nebula_infrastructure::{FileKeyValueStore, SystemClock, TokioFileSystem, TracingNotifier};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "nebula", version, about = "Back up and restore Nebula boards")]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a .nebu backup of the given tabs and the stored scratchpads
    Backup {
        /// JSON file holding the board's tab array
        #[arg(long)]
        tabs: PathBuf,
        /// Directory to write the backup into
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Restore a .nebu backup; scratchpads go back into the store
    Restore {
        /// Backup file to read
        file: PathBuf,
        /// Where to write the restored tab array (stdout if omitted)
        #[arg(long)]
        tabs_out: Option<PathBuf>,
    },
    /// Validate a .nebu backup and print a summary
    Inspect {
        /// Backup file to read
        file: PathBuf,
    },
}

type Header = BoardHeader<FileKeyValueStore, TokioFileSystem, SystemClock, TracingNotifier>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let header = build_header(&cfg);

    match cli.command {
        Commands::Backup { tabs, out } => {
            let destination = out.unwrap_or_else(|| cfg.download_dir());
            run_backup(&header, &tabs, destination).await
        }
        Commands::Restore { file, tabs_out } => run_restore(&header, &file, tabs_out).await,
        Commands::Inspect { file } => run_inspect(&cfg, &file).await,
    }
}

fn build_header(cfg: &AppConfig) -> Header {
    let store =
        FileKeyValueStore::new(cfg.storage_dir()).with_quota(Some(cfg.max_value_bytes));
    let header = BoardHeader::new(
        store,
        TokioFileSystem::new(),
        SystemClock::new(),
        TracingNotifier::new(),
    );
    match cfg.read_timeout() {
        Some(timeout) => header.with_import_timeout(timeout),
        None => header,
    }
}

async fn run_backup(header: &Header, tabs_path: &Path, destination: PathBuf) -> Result<()> {
    let raw = TokioFileSystem::new()
        .read_file_string(tabs_path)
        .await
        .with_context(|| format!("reading tabs from {}", tabs_path.display()))?;
    let tabs: Vec<Tab> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing tabs from {}", tabs_path.display()))?;

    let output = header.backup(tabs, destination).await?;
    println!(
        "{} ({} tabs, {} scratchpads)",
        output.path.display(),
        output.tab_count,
        output.scratchpad_count
    );
    Ok(())
}

async fn run_restore(header: &Header, file: &Path, tabs_out: Option<PathBuf>) -> Result<()> {
    let (token, receiver) = CancellationToken::new();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    let restored = header.restore_with_cancellation(file, receiver).await;
    interrupt.abort();

    let Some(restored) = restored else {
        anyhow::bail!("restore of {} failed", file.display());
    };

    let tabs_json = serde_json::to_string_pretty(&restored.tabs)?;
    match tabs_out {
        Some(path) => TokioFileSystem::new()
            .write_file(&path, tabs_json.as_bytes())
            .await
            .with_context(|| format!("writing tabs to {}", path.display()))?,
        None => println!("{tabs_json}"),
    }
    Ok(())
}

async fn run_inspect(cfg: &AppConfig, file: &Path) -> Result<()> {
    let import = ImportBackup::new(TokioFileSystem::new());
    let import = match cfg.read_timeout() {
        Some(timeout) => import.with_timeout(timeout),
        None => import,
    };
    let restored = import.execute(file).await?;

    println!("format:      {}", restored.format.signature());
    match restored.created_at {
        Some(created_at) => println!("created:     {}", created_at.to_rfc3339()),
        None => println!("created:     unknown"),
    }
    println!("tabs:        {}", restored.tabs.len());
    println!("scratchpads: {}", restored.scratchpads.len());
    Ok(())
}
