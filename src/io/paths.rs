use std::path::{Path, PathBuf};

/// Directory name under the XDG data home
const APP_DIR: &str = "todolist";

/// Default data directory, respecting XDG_DATA_HOME
pub fn default_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

/// Resolve the data directory from explicit XDG/HOME values
pub fn data_dir_from(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let base = xdg_data_home
        .filter(|p| p.is_absolute())
        .unwrap_or_else(|| {
            home.unwrap_or_else(|| PathBuf::from("/"))
                .join(".local")
                .join("share")
        });
    base.join(APP_DIR)
}

/// Config file location inside a data directory
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Log file location inside a data directory
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("td.log")
}
