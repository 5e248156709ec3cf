use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File-backed defaults for git-next-version.
///
/// Everything here can be overridden per run by CLI flags or their
/// environment-variable equivalents; the resolved values travel through the
/// workflow as explicit parameters, never as ambient state.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_style")]
    pub version_style: String,

    #[serde(default)]
    pub ignore_paths: Vec<String>,

    #[serde(default)]
    pub force_patch: bool,
}

fn default_version_style() -> String {
    "X.Y.Z".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_style: default_version_style(),
            ignore_paths: Vec::new(),
            force_patch: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./nextversion.toml").exists() {
        fs::read_to_string("./nextversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".nextversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
