use std::path::PathBuf;

use clap::Parser;

use crate::io::paths;

#[derive(Parser, Debug)]
#[command(name = "td", about = concat!("[x] todolist v", env!("CARGO_PKG_VERSION"), " - a to-do list that remembers"), version)]
pub struct Cli {
    /// Directory holding saved tasks and theme
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: <data-dir>/config.toml)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Data directory, falling back to the XDG default
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(paths::default_data_dir)
    }

    /// Config file path, falling back to the one inside the data directory
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| paths::config_path(&self.data_dir()))
    }
}
