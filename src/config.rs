use crate::generator::abbreviations::AbbreviationTable;
use crate::generator::render::Target;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".propgen.toml";

/// Effective settings after every layer has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub target: Target,

    /// Added on top of the built-in abbreviation table
    pub abbreviations: BTreeMap<String, String>,
}

/// One TOML config file. Unset keys leave earlier layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub target: Option<Target>,

    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local (or explicit) config > global config > defaults
    pub fn load(
        target: Option<Target>,
        config_path: Option<PathBuf>,
        cli_abbreviations: Vec<(String, String)>,
    ) -> Result<Self> {
        let mut layers = Vec::new();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                layers.push(ConfigFile::from_file(&global_path)?);
            }
        }

        // An explicit --config replaces the local lookup
        match config_path {
            Some(path) => layers.push(ConfigFile::from_file(&path)?),
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    layers.push(ConfigFile::from_file(&local_path)?);
                }
            }
        }

        Ok(Self::from_layers(layers, target, cli_abbreviations))
    }

    /// Apply file layers lowest priority first, then the CLI overrides
    pub fn from_layers(
        layers: impl IntoIterator<Item = ConfigFile>,
        cli_target: Option<Target>,
        cli_abbreviations: Vec<(String, String)>,
    ) -> Self {
        let mut target = None;
        let mut abbreviations = BTreeMap::new();

        for layer in layers {
            if layer.target.is_some() {
                target = layer.target;
            }
            for (key, value) in layer.abbreviations {
                abbreviations.insert(key.to_lowercase(), value);
            }
        }

        if cli_target.is_some() {
            target = cli_target;
        }
        for (key, value) in cli_abbreviations {
            abbreviations.insert(key.to_lowercase(), value);
        }

        Self {
            target: target.unwrap_or_default(),
            abbreviations,
        }
    }

    pub fn abbreviation_table(&self) -> AbbreviationTable {
        AbbreviationTable::with_entries(&self.abbreviations)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "propgen").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Parse a `KEY=VALUE` abbreviation given on the command line
pub fn parse_abbreviation(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty abbreviation in '{}'", s));
    }
    Ok((key.to_lowercase(), value.trim().to_string()))
}
