use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the complete configuration for stampver.
///
/// Names the release branch and the two stamped files, both relative to the
/// repository root. Replaces the hard-coded root path of the build script
/// this tool grew out of, so the same logic can run against any directory.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Branch whose builds get a `post` suffix; all others get `dev`.
    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    /// File holding the persisted version string, relative to the root.
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    /// File receiving the commit id, relative to the root.
    #[serde(default = "default_sha_file")]
    pub sha_file: PathBuf,
}

fn default_release_branch() -> String {
    "release".to_string()
}

fn default_version_file() -> PathBuf {
    PathBuf::from("VERSION")
}

fn default_sha_file() -> PathBuf {
    PathBuf::from("GIT_SHA")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release_branch: default_release_branch(),
            version_file: default_version_file(),
            sha_file: default_sha_file(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `stampver.toml` in current directory
/// 3. `.stampver.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./stampver.toml").exists() {
        fs::read_to_string("./stampver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".stampver.toml");
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
