use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use todolist::cli::commands::Cli;
use todolist::io::config_io::read_config;
use todolist::io::paths;
use todolist::io::storage::{FileStore, MemoryStore, Storage};
use todolist::ops::task_store::TaskStore;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir();

    let config = match read_config(&cli.config_path()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let dir_ok = match fs::create_dir_all(&data_dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!(
                "warning: cannot use {} ({}); changes will not be saved",
                data_dir.display(),
                e
            );
            false
        }
    };
    if dir_ok {
        init_tracing(&data_dir);
    }

    let result = if dir_ok {
        let store = TaskStore::open(Storage::new(FileStore::new(&data_dir)));
        todolist::tui::run(store, &config.ui)
    } else {
        warn!("falling back to in-memory storage");
        let store = TaskStore::open(Storage::new(MemoryStore::new()));
        todolist::tui::run(store, &config.ui)
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Tracing is opt-in via RUST_LOG and is appended to `td.log` in the data
/// directory.
fn init_tracing(data_dir: &Path) {
    // Ignore invalid/huge filters rather than failing startup.
    let Some(filter) = std::env::var("RUST_LOG").ok().and_then(|raw| {
        let raw = raw.trim();
        if raw.is_empty() || raw.len() > 4096 {
            return None;
        }
        EnvFilter::try_new(raw).ok()
    }) else {
        return;
    };

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_path(data_dir))
    else {
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
}
