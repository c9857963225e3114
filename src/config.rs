use crate::case::{AcronymStyle, Options, SymbolPolicy};
use crate::Scheme;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".varcase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub default_scheme: Scheme,
    pub acronyms: AcronymStyle,
    pub symbols: SymbolPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_scheme: Scheme::Camel,
            acronyms: AcronymStyle::Collapse,
            symbols: SymbolPolicy::Split,
        }
    }
}

/// One config file on disk; absent keys leave the lower layer untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_scheme: Option<Scheme>,
    acronyms: Option<AcronymStyle>,
    symbols: Option<SymbolPolicy>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub scheme: Option<Scheme>,
    pub preserve_acronyms: bool,
    pub strict: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), Path::new(LOCAL_CONFIG_FILE), overrides)
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            debug!(path = %local.display(), "loading local config");
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(scheme) = overrides.scheme {
            config.default_scheme = scheme;
        }
        if overrides.preserve_acronyms {
            config.acronyms = AcronymStyle::Preserve;
        }
        if overrides.strict {
            config.symbols = SymbolPolicy::Reject;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(scheme) = file.default_scheme {
            self.default_scheme = scheme;
        }
        if let Some(acronyms) = file.acronyms {
            self.acronyms = acronyms;
        }
        if let Some(symbols) = file.symbols {
            self.symbols = symbols;
        }
        self
    }

    pub fn options(&self) -> Options {
        Options {
            acronyms: self.acronyms,
            symbols: self.symbols,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write this config to `path`, refusing to replace an existing file unless `force`.
    pub fn write_to(&self, path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "varcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
