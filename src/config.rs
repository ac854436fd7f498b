//! Optional per-project configuration.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Name of the config file looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "build-css.toml";

/// Launcher used to reach the Tailwind CLI.
#[cfg(not(windows))]
const DEFAULT_LAUNCHER: &str = "npx";
/// Launcher used to reach the Tailwind CLI.
#[cfg(windows)]
const DEFAULT_LAUNCHER: &str = "npx.cmd";
/// Package name passed to the launcher.
const DEFAULT_TOOL: &str = "tailwindcss";

/// Resolved configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program that launches the tool.
    program: String,
    /// Arguments placed before the stylesheet flags.
    args: Vec<String>,
    /// Config file that supplied the values, if any.
    source: Option<PathBuf>,
}

/// Raw config file structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// Tool command line, split with shell quoting rules.
    command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: DEFAULT_LAUNCHER.to_string(),
            args: vec![DEFAULT_TOOL.to_string()],
            source: None,
        }
    }
}

impl Config {
    /// Load the config from a base directory, falling back to defaults.
    pub(crate) fn load(base_dir: &Path) -> Result<Self> {
        Self::load_from(&base_dir.join(CONFIG_FILE_NAME))
    }

    /// Load a config file from an explicit path.
    pub(crate) fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source: error,
                });
            }
        };

        let raw: RawConfig = toml::from_str(&contents).map_err(|error| Error::ConfigParse {
            path: path.to_path_buf(),
            source: error,
        })?;

        let mut config = Self {
            source: Some(path.to_path_buf()),
            ..Self::default()
        };

        if let Some(command) = raw.command {
            let mut words = shell_words::split(&command).map_err(|error| Error::CommandParse {
                command: command.clone(),
                message: error.to_string(),
            })?;
            if words.is_empty() {
                return Err(Error::CommandEmpty {
                    path: path.to_path_buf(),
                });
            }
            config.args = words.split_off(1);
            config.program = words.remove(0);
        }

        Ok(config)
    }

    /// Return the program that launches the tool.
    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    /// Return the arguments that precede the stylesheet flags.
    pub(crate) fn args(&self) -> &[String] {
        &self.args
    }

    /// Return the config file that was read, if one existed.
    pub(crate) fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::{
        config::{CONFIG_FILE_NAME, Config, DEFAULT_LAUNCHER},
        error::Error,
    };

    #[test]
    fn defaults_when_config_missing() {
        let dir = tempdir().expect("tempdir");

        let config = Config::load(dir.path()).expect("config");
        assert_eq!(config.program(), DEFAULT_LAUNCHER);
        assert_eq!(config.args(), ["tailwindcss"]);
        assert!(config.source().is_none());
    }

    #[test]
    fn empty_file_keeps_default_command() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "").expect("write config");

        let config = Config::load(dir.path()).expect("config");
        assert_eq!(config.program(), DEFAULT_LAUNCHER);
        assert_eq!(config.args(), ["tailwindcss"]);
        assert_eq!(config.source(), Some(path.as_path()));
    }

    #[test]
    fn splits_command_with_quotes() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "command = \"'/opt/tailwind cli/tailwindcss' --minify\"",
        )
        .expect("write config");

        let config = Config::load(dir.path()).expect("config");
        assert_eq!(config.program(), "/opt/tailwind cli/tailwindcss");
        assert_eq!(config.args(), ["--minify"]);
    }

    #[test]
    fn errors_when_command_blank() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE_NAME), "command = \"  \"").expect("write config");

        let error = Config::load(dir.path()).expect_err("config should fail");
        assert!(matches!(error, Error::CommandEmpty { .. }));
    }

    #[test]
    fn errors_when_command_quote_unterminated() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE_NAME), "command = \"npx 'tailwindcss\"")
            .expect("write config");

        let error = Config::load(dir.path()).expect_err("config should fail");
        assert!(matches!(error, Error::CommandParse { .. }));
    }

    #[test]
    fn errors_on_unknown_keys() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE_NAME), "input = \"other.css\"")
            .expect("write config");

        let error = Config::load(dir.path()).expect_err("config should fail");
        assert!(matches!(error, Error::ConfigParse { .. }));
    }
}
