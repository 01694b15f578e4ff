//! Lumen - site configuration for a personal blog.
//!
//! Loads `lumen.toml` once, validates it, and publishes the result as a
//! read-only, process-wide [`config::SiteConfig`] for the site build to read.
//!
//! ```ignore
//! use lumen::config::{ConfigSource, init_config, load_config};
//!
//! let config = load_config(&ConfigSource::File("lumen.toml".into()))?;
//! let config = init_config(config)?;
//! println!("{}", config.canonical_url("/posts/hello"));
//! ```

pub mod cli;
pub mod config;
pub mod logger;
