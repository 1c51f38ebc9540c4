/// Config file loading and creation for the gemrank CLI.
///
/// Config lives at ~/.config/gemrank/config.toml.
/// All fields are optional; CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct GemrankConfig {
    pub ratio_exponent: Option<f64>,
    pub audience_source: Option<String>,
    pub top: Option<usize>,
    pub output: Option<PathBuf>,
    pub link_width: Option<usize>,
    pub url_prefix: Option<String>,
    pub api_url: Option<String>,
    pub retries: Option<usize>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# gemrank configuration
# All values here can be overridden by CLI flags.

# Exponent applied to the audience-to-review ratio.
# Negative values surface hidden gems (large audience, few reviews).
# ratio_exponent = -1.0

# Which audience estimate to trust: \"players\" or \"owners\"
# audience_source = \"players\"

# How many entries to print. Omit to print the whole catalog.
# top = 100

# Report file path. Omit to print to stdout.
# output = \"ranking.md\"

# Minimum width of the link field in report lines
# link_width = 40

# Store page prefix prepended to each appid
# url_prefix = \"http://store.steampowered.com/app/\"

# SteamSpy bulk endpoint
# api_url = \"https://steamspy.com/api.php?request=all\"

# Max retries when the fetch fails
# retries = 3
";

/// Returns the default config path: ~/.config/gemrank/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("gemrank").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> GemrankConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => GemrankConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
