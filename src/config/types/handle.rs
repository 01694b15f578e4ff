//! Process-wide config instance.
//!
//! The site config is loaded once at startup and never replaced, so the
//! global slot is a set-once cell. Readers get a cheap `Arc` clone and share
//! it across threads without locking.

use super::ConfigError;
use crate::config::SiteConfig;
use std::sync::{Arc, OnceLock};

/// A set-once slot holding the loaded site config.
#[derive(Debug, Default)]
pub struct ConfigHandle {
    cell: OnceLock<Arc<SiteConfig>>,
}

impl ConfigHandle {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Publish `config`. Fails if a config was already published.
    pub fn init(&self, config: SiteConfig) -> Result<Arc<SiteConfig>, ConfigError> {
        let arc = Arc::new(config);
        self.cell
            .set(Arc::clone(&arc))
            .map_err(|_| ConfigError::AlreadyInitialized)?;
        Ok(arc)
    }

    #[inline]
    pub fn get(&self) -> Option<Arc<SiteConfig>> {
        self.cell.get().cloned()
    }
}

/// Global config storage.
pub static CONFIG: ConfigHandle = ConfigHandle::new();

/// Publish the process-wide config.
#[inline]
pub fn init_config(config: SiteConfig) -> Result<Arc<SiteConfig>, ConfigError> {
    CONFIG.init(config)
}

/// The process-wide config, or `None` before [`init_config`].
#[inline]
pub fn try_cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get()
}

/// The process-wide config.
///
/// # Panics
///
/// Panics if called before [`init_config`]; startup always initializes first.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    try_cfg().expect("site config accessed before init_config")
}
