use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Palette overrides for light mode (`name = "#RRGGBB"`)
    #[serde(default)]
    pub light: HashMap<String, String>,
    /// Palette overrides for dark mode
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            light: HashMap::new(),
            dark: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.light.is_empty());
        assert!(config.ui.dark.is_empty());
    }

    #[test]
    fn palette_tables_are_read() {
        let config: Config = toml::from_str(
            r##"
[ui]
show_key_hints = false

[ui.dark]
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.dark.get("highlight").map(String::as_str), Some("#FB4196"));
    }
}
