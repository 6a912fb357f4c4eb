//! Configuration file support for create-rext
//!
//! Reads `create-rext.toml` from the working directory or any ancestor, then
//! applies environment overrides.

use crate::install::CommandInstaller;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file
pub const CONFIG_FILE: &str = "create-rext.toml";

/// Overrides the template directory
pub const TEMPLATE_DIR_ENV: &str = "CREATE_REXT_TEMPLATE_DIR";

/// Overrides the installer command line (whitespace separated)
pub const INSTALL_CMD_ENV: &str = "CREATE_REXT_INSTALL_CMD";

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Dependency installation settings
    #[serde(default)]
    pub install: InstallConfig,

    /// Template location settings
    #[serde(default)]
    pub template: TemplateConfig,
}

/// Dependency installation settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InstallConfig {
    /// Installer argv, first element is the program
    /// Default: ["npm", "install"]
    #[serde(default = "default_install_command")]
    pub command: Vec<String>,

    /// Skip the install step entirely
    #[serde(default)]
    pub skip: bool,
}

/// Template location settings
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct TemplateConfig {
    /// Template directory. Relative paths are resolved against the config
    /// file's directory. Unset means the template shipped with the binary.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_install_command() -> Vec<String> {
    vec!["npm".to_string(), "install".to_string()]
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: default_install_command(),
            skip: false,
        }
    }
}

impl Config {
    /// Load config for a run started in `cwd`, with environment overrides applied.
    /// Returns defaults if no config file is found or it cannot be parsed.
    pub fn load(cwd: &Path) -> Self {
        let mut config = Self::load_file(cwd);
        config.apply_env(
            std::env::var_os(TEMPLATE_DIR_ENV).map(PathBuf::from),
            std::env::var(INSTALL_CMD_ENV).ok(),
        );
        config
    }

    fn load_file(cwd: &Path) -> Self {
        let Some(path) = Self::find_config_path(cwd) else {
            return Self::default();
        };
        tracing::debug!("using config {}", path.display());

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::parse(&contents, path.parent().unwrap_or(cwd)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse TOML text, resolving a relative template path against `base`
    pub fn parse(contents: &str, base: &Path) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(contents)?;
        if let Some(path) = config.template.path.take() {
            config.template.path = Some(base.join(path));
        }
        Ok(config)
    }

    /// Apply environment-style overrides. Empty values are ignored.
    pub fn apply_env(&mut self, template_dir: Option<PathBuf>, install_cmd: Option<String>) {
        if let Some(dir) = template_dir.filter(|d| !d.as_os_str().is_empty()) {
            self.template.path = Some(dir);
        }
        if let Some(cmd) = install_cmd {
            let argv: Vec<String> = cmd.split_whitespace().map(str::to_string).collect();
            if !argv.is_empty() {
                self.install.command = argv;
            }
        }
    }

    /// Find the config file by walking up the directory tree
    fn find_config_path(start: &Path) -> Option<PathBuf> {
        let mut dir = start;

        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        None
    }

    /// Installer built from the configured command, falling back to `npm install`
    pub fn installer(&self) -> CommandInstaller {
        CommandInstaller::from_argv(self.install.command.iter().cloned()).unwrap_or_default()
    }
}
