use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use santaDraw::app::settings::{load_settings, load_settings_from, user_cache_dir};
use santaDraw::app::App;
use santaDraw::runner::run_app;
use santaDraw::ui;

/// Secret Santa name drawing in the terminal.
#[derive(Parser, Debug)]
#[command(name = "santa-draw", version, about)]
struct Cli {
    /// Seed the random generator for reproducible draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Theme: "festive", "dark", "light", or a path to a palette TOML.
    #[arg(long)]
    theme: Option<String>,

    /// Settings file (defaults to the per-user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the per-user cache dir). The TUI owns stdout,
    /// so logs always go to a file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Names to prefill the roster with.
    names: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.log_file.as_deref())?;

    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        None => load_settings(),
    };
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    ui::colors::set_theme(&settings.theme);

    let mut app = match cli.seed {
        Some(seed) => App::with_seed(seed),
        None => App::new(),
    };
    app.settings = settings;
    for name in &cli.names {
        app.roster.add(name);
    }

    run_app(app)
}

/// Route tracing output to a file with a non-blocking writer. The returned
/// guard must stay alive for the duration of the program so buffered lines
/// are flushed on exit.
fn init_logging(path: Option<&Path>) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => user_cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("santa-draw.log"),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log dir {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
