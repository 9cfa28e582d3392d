use crate::consts;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Styles used to draw the game screen
    theme: ThemeConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("dashsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Resolve the configured styles against the built-in defaults
    pub(crate) fn theme(&self) -> Theme {
        self.theme.resolve()
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct ThemeConfig {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    border: Option<parse_style::Style>,
}

impl ThemeConfig {
    fn resolve(&self) -> Theme {
        Theme {
            snake: resolve_style(self.snake.as_ref(), consts::SNAKE_STYLE),
            food: resolve_style(self.food.as_ref(), consts::FOOD_STYLE),
            border: resolve_style(self.border.as_ref(), consts::BORDER_STYLE),
        }
    }
}

fn resolve_style(configured: Option<&parse_style::Style>, default: Style) -> Style {
    configured.cloned().map_or(default, Style::from)
}

/// Styles used when drawing the game screen, after applying configuration
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) snake: Style,
    pub(crate) food: Style,
    pub(crate) border: Style,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            snake: consts::SNAKE_STYLE,
            food: consts::FOOD_STYLE,
            border: consts::BORDER_STYLE,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
