//! Lexer configuration.
//!
//! The only grammar knob is the declared [`Version`], fixed for a lexer's
//! lifetime. [`LexerConfig`] bundles it with logging options and can be
//! loaded from or saved to TOML.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A declared grammar-capability level.
///
/// Versions are totally ordered; each gated extension is available from
/// some version onward.
///
/// ```
/// use cartc_lex::Version;
///
/// assert!(!Version(2).supports_long_comments());
/// assert!(Version(8).supports_long_comments());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(pub u32);

impl Version {
    /// First version that recognizes `--[[ ... ]]` long comments.
    pub const LONG_COMMENTS: Version = Version(3);

    /// The version assumed when none is configured.
    pub const CURRENT: Version = Version(8);

    /// Whether `--` followed by a long-bracket opener starts a long comment.
    /// Older versions read it as a single-line comment.
    pub fn supports_long_comments(self) -> bool {
        self >= Self::LONG_COMMENTS
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl From<u32> for Version {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version {}", self.0)
    }
}

/// Error type for configuration loading and saving.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration TOML.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Lexer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Declared grammar version.
    #[serde(default)]
    pub version: Version,

    /// Emit a `trace` event for every token.
    #[serde(default)]
    pub trace_tokens: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            version: Version::CURRENT,
            trace_tokens: false,
        }
    }
}

impl LexerConfig {
    /// A configuration for `version` with default logging options.
    pub fn for_version(version: impl Into<Version>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    ///
    /// ```
    /// use cartc_lex::{LexerConfig, Version};
    ///
    /// let config = LexerConfig::from_toml_str("version = 4").unwrap();
    /// assert_eq!(config.version, Version(4));
    /// assert!(!config.trace_tokens);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Saves configuration to a TOML file, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
