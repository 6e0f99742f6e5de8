use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{WrapErr, eyre};
use log::{debug, info};
use serde::Deserialize;

/// Global configuration, read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solver: SolverConfig,
    pub display: DisplayConfig,
    pub scramble: ScrambleConfig,
}

/// The external two-phase solver. It is run as `command args... FACELETS`
/// and must print the solution move string on stdout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            command: "kociemba".to_owned(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colour stickers with ANSI escapes.
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
    pub length: usize,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        ScrambleConfig { length: 25 }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("cube");
        path.push("config.toml");
        Some(path)
    }

    /// Load the config at `explicit`, or else at the default path if it
    /// exists, or else fall back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> color_eyre::Result<Config> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!(target: "config", "No config file found; using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Self::parse(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;
        info!(target: "config", "Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> color_eyre::Result<Config> {
        let config = toml::from_str::<Config>(text)?;
        if config.solver.command.trim().is_empty() {
            return Err(eyre!("`solver.command` must not be empty"));
        }
        Ok(config)
    }
}
