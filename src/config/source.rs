//! Where a site config comes from.

use super::{ConfigError, template::generate_config_template};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Serialization format of a config source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// A configuration source accepted by [`load_config`](super::load_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A config file on disk, format chosen by extension.
    File(PathBuf),
    /// Inline TOML text.
    Toml(String),
    /// Inline JSON text.
    Json(String),
    /// The starter config written by `lumen init`.
    Embedded,
}

impl ConfigSource {
    /// Read the raw text of this source.
    pub(super) fn read(&self) -> Result<(String, ConfigFormat), ConfigError> {
        match self {
            Self::File(path) => {
                let content = fs::read_to_string(path)
                    .map_err(|err| ConfigError::Io(path.clone(), err))?;
                Ok((content, ConfigFormat::from_path(path)))
            }
            Self::Toml(content) => Ok((content.clone(), ConfigFormat::Toml)),
            Self::Json(content) => Ok((content.clone(), ConfigFormat::Json)),
            Self::Embedded => Ok((generate_config_template(), ConfigFormat::Toml)),
        }
    }

    /// Path of the file behind this source, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            _ => None,
        }
    }
}

/// Values that replace what the source says, applied before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `url` (e.g., a preview deployment origin).
    pub site_url: Option<String>,
    /// Replaces `pathPrefix`.
    pub path_prefix: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.site_url.is_none() && self.path_prefix.is_none()
    }
}
