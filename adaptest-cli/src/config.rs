/// Config file loading and creation for the adaptest CLI.
///
/// Config lives at ~/.config/adaptest/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct AdaptestConfig {
    pub grid_size: Option<usize>,
    pub guess: Option<f64>,
    pub slip: Option<f64>,
    pub students_per_ability: Option<usize>,
    pub max_questions: Option<usize>,
    pub convergence_threshold: Option<f64>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# adaptest configuration
# All values here can be overridden by CLI flags.

# Number of points on the ability hypothesis grid
# grid_size = 20

# Observation model constants (4-option multiple choice defaults)
# guess = 0.25
# slip = 0.05

# Simulation defaults
# students_per_ability = 10
# max_questions = 50
# convergence_threshold = 0.05
";

/// Returns the default config path: ~/.config/adaptest/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("adaptest").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> AdaptestConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AdaptestConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
