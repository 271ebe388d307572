use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const DEFAULT_GRID_DIVISIONS: u32 = 10;
pub const DEFAULT_OUTPUT: &str = "polygon.svg";

fn default_width() -> f64 {
    DEFAULT_WIDTH
}
fn default_height() -> f64 {
    DEFAULT_HEIGHT
}
fn default_grid_divisions() -> u32 {
    DEFAULT_GRID_DIVISIONS
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_grid_divisions")]
    pub grid_divisions: u32,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            grid_divisions: default_grid_divisions(),
            output: None,
            verbose: default_verbose(),
            json: false,
        }
    }
}

/// Outcome of searching the standard config locations
#[derive(Debug, Default)]
pub struct Discovered {
    pub config: Option<FileConfig>,
    /// One message per file that was found but could not be parsed
    pub skipped: Vec<String>,
}

impl FileConfig {
    /// Load the first parseable config from the standard search paths
    pub fn load() -> Discovered {
        Self::load_from(&get_config_paths())
    }

    /// Load the first parseable config among `paths`, in order.
    ///
    /// Unparseable files are skipped and reported in `Discovered::skipped` so the
    /// caller can warn once logging is set up.
    pub fn load_from(paths: &[PathBuf]) -> Discovered {
        let mut discovered = Discovered::default();

        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        discovered.config = Some(config);
                        break;
                    }
                    Err(e) => {
                        discovered
                            .skipped
                            .push(format!("Failed to parse config file {:?}: {}", path, e));
                    }
                }
            }
        }

        discovered
    }

    /// Load an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polycheck.toml"));
    paths.push(PathBuf::from(".polycheck.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polycheck").join("config.toml"));
        paths.push(config_dir.join("polycheck.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polycheck.toml"));
        paths.push(home.join(".config").join("polycheck").join("config.toml"));
    }

    paths
}
