use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

use qaboard::AppContext;
use qaboard::model::ClientConfig;
use qaboard::store::LocalStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "qaboard")]
#[command(about = "Terminal client for the Q&A forum", long_about = None)]
pub(crate) struct Cli {
    /// Backend base URL (overrides the saved config)
    #[arg(long, global = true, env = "QABOARD_API_URL")]
    url: Option<String>,

    /// Directory holding the session and config files (defaults to ./.qaboard)
    #[arg(long, global = true, env = "QABOARD_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => LocalStore::state_dir(&std::env::current_dir().context("get current dir")?),
    };
    let runtime = Runtime {
        url: cli.url,
        state_dir,
    };
    crate::cli_exec::handle_command(&runtime, cli.command)
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Process-wide settings resolved from flags and environment.
pub(crate) struct Runtime {
    url: Option<String>,
    state_dir: PathBuf,
}

impl Runtime {
    pub(crate) fn open_store(&self) -> Result<Arc<LocalStore>> {
        let store = LocalStore::open(&self.state_dir)
            .with_context(|| format!("open state dir {}", self.state_dir.display()))?;
        Ok(Arc::new(store))
    }

    /// Saved config with the `--url` override applied.
    pub(crate) fn config(&self, store: &LocalStore) -> Result<ClientConfig> {
        let cfg = store.read_config()?;
        Ok(match self.url.as_deref() {
            Some(url) => cfg.with_base_url(url),
            None => cfg,
        })
    }

    pub(crate) fn context(&self) -> Result<AppContext> {
        let store = self.open_store()?;
        let cfg = self.config(&store)?;
        AppContext::new(&cfg, store).context("create http client")
    }
}
